//! Motion Service: classify + apply, with lightweight counters.

use super::classifier::Classifier;
use super::config::MotionConfig;
use super::controller;
use super::interface::{AnimationTarget, CommandDecision, Intent};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Per-intent submission counters. Counts only, never the command text.
pub struct MotionStats {
    counts: [AtomicU64; 6],
}

impl MotionStats {
    pub fn new() -> Self {
        Self {
            counts: Default::default(),
        }
    }

    fn slot(intent: Intent) -> usize {
        match intent {
            Intent::Idle => 0,
            Intent::Walk => 1,
            Intent::Run => 2,
            Intent::Wave => 3,
            Intent::Jump => 4,
            Intent::Unknown => 5,
        }
    }

    pub fn record(&self, intent: Intent) {
        self.counts[Self::slot(intent)].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self, intent: Intent) -> u64 {
        self.counts[Self::slot(intent)].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            idle: self.count(Intent::Idle),
            walk: self.count(Intent::Walk),
            run: self.count(Intent::Run),
            wave: self.count(Intent::Wave),
            jump: self.count(Intent::Jump),
            unknown: self.count(Intent::Unknown),
        }
    }
}

impl Default for MotionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub idle: u64,
    pub walk: u64,
    pub run: u64,
    pub wave: u64,
    pub jump: u64,
    pub unknown: u64,
}

impl StatsSnapshot {
    pub fn total(&self) -> u64 {
        self.idle + self.walk + self.run + self.wave + self.jump + self.unknown
    }
}

pub struct MotionService {
    classifier: Classifier,
    stats: MotionStats,
}

impl MotionService {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            stats: MotionStats::new(),
        }
    }

    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.classifier())
    }

    pub fn classifier(&self) -> Classifier {
        self.classifier
    }

    /// Interpret one command against the target. Each call is a complete
    /// transition; the last one submitted wins.
    pub fn submit(&self, text: &str, target: &mut dyn AnimationTarget) -> CommandDecision {
        let decision = self.classifier.classify(text);
        debug!(
            intent = %decision.intent(),
            speed = decision.speed(),
            chars = text.chars().count(),
            "Classified motion command"
        );
        controller::apply(decision, target);
        self.stats.record(decision.intent());
        decision
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for MotionService {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}
