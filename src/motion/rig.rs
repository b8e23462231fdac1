//! In-memory animation rig.
//!
//! Holds the controller parameters the interpreter writes to and exposes
//! them as a serializable frame for the renderer.

use super::interface::{AnimationTarget, BoolParam, Trigger, DEFAULT_SPEED};
use serde::Serialize;

/// A single frame of rig parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RigSnapshot {
    pub is_walking: bool,
    pub is_running: bool,
    pub playback_rate: f32,
    /// Triggers fired since the last drain, oldest first.
    pub pending_triggers: Vec<Trigger>,
}

#[derive(Debug, Clone)]
pub struct RigState {
    is_walking: bool,
    is_running: bool,
    playback_rate: f32,
    pending: Vec<Trigger>,
    wave_fired: u64,
    jump_fired: u64,
}

impl RigState {
    pub fn new() -> Self {
        Self {
            is_walking: false,
            is_running: false,
            playback_rate: DEFAULT_SPEED,
            pending: Vec::new(),
            wave_fired: 0,
            jump_fired: 0,
        }
    }

    pub fn get_bool(&self, param: BoolParam) -> bool {
        match param {
            BoolParam::IsWalking => self.is_walking,
            BoolParam::IsRunning => self.is_running,
        }
    }

    pub fn playback_rate(&self) -> f32 {
        self.playback_rate
    }

    /// Total times a trigger has fired over the rig's lifetime.
    pub fn fire_count(&self, trigger: Trigger) -> u64 {
        match trigger {
            Trigger::Wave => self.wave_fired,
            Trigger::Jump => self.jump_fired,
        }
    }

    /// Consume pending triggers, as the state machine does when it starts
    /// the one-shot clip.
    pub fn take_triggers(&mut self) -> Vec<Trigger> {
        std::mem::take(&mut self.pending)
    }

    pub fn snapshot(&self) -> RigSnapshot {
        RigSnapshot {
            is_walking: self.is_walking,
            is_running: self.is_running,
            playback_rate: self.playback_rate,
            pending_triggers: self.pending.clone(),
        }
    }
}

impl Default for RigState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationTarget for RigState {
    fn set_bool(&mut self, param: BoolParam, value: bool) {
        match param {
            BoolParam::IsWalking => self.is_walking = value,
            BoolParam::IsRunning => self.is_running = value,
        }
    }

    fn fire_trigger(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Wave => self.wave_fired += 1,
            Trigger::Jump => self.jump_fired += 1,
        }
        self.pending.push(trigger);
    }

    fn set_playback_rate(&mut self, rate: f32) {
        self.playback_rate = rate;
    }
}
