use serde::{Deserialize, Serialize};
use std::fmt;

// ── Decision Types ─────────────────────────────────────

/// Discrete animation category selected from a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Idle,
    Walk,
    Run,
    Wave,
    Jump,
    Unknown,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Idle,
        Intent::Walk,
        Intent::Run,
        Intent::Wave,
        Intent::Jump,
        Intent::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Idle => "idle",
            Intent::Walk => "walk",
            Intent::Run => "run",
            Intent::Wave => "wave",
            Intent::Jump => "jump",
            Intent::Unknown => "unknown",
        }
    }

    /// Walk and Run are the only intents that consume the speed factor.
    pub fn is_locomotion(&self) -> bool {
        matches!(self, Intent::Walk | Intent::Run)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_SPEED: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Invalid speed factor {0}: must be finite and greater than zero")]
pub struct InvalidSpeed(pub f32);

/// Output of the classifier: what to play and how fast.
///
/// Immutable once built; the speed is always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDecision")]
pub struct CommandDecision {
    intent: Intent,
    speed: f32,
}

impl CommandDecision {
    /// Build a decision. A speed that is not finite and > 0 falls back to
    /// `DEFAULT_SPEED`.
    pub fn new(intent: Intent, speed: f32) -> Self {
        Self::try_new(intent, speed).unwrap_or(Self {
            intent,
            speed: DEFAULT_SPEED,
        })
    }

    pub fn try_new(intent: Intent, speed: f32) -> Result<Self, InvalidSpeed> {
        if speed.is_finite() && speed > 0.0 {
            Ok(Self { intent, speed })
        } else {
            Err(InvalidSpeed(speed))
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Only applied to the rig for locomotion intents.
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Default for CommandDecision {
    fn default() -> Self {
        Self {
            intent: Intent::Unknown,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Wire shape of a decision before the speed check.
#[derive(Deserialize)]
struct RawDecision {
    intent: Intent,
    speed: f32,
}

impl TryFrom<RawDecision> for CommandDecision {
    type Error = InvalidSpeed;

    fn try_from(raw: RawDecision) -> Result<Self, Self::Error> {
        Self::try_new(raw.intent, raw.speed)
    }
}

// ── Controller Parameters ──────────────────────────────

/// Persistent locomotion flags on the animation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoolParam {
    #[serde(rename = "isWalking")]
    IsWalking,
    #[serde(rename = "isRunning")]
    IsRunning,
}

impl BoolParam {
    pub fn name(&self) -> &'static str {
        match self {
            BoolParam::IsWalking => "isWalking",
            BoolParam::IsRunning => "isRunning",
        }
    }
}

/// One-shot controller signals. They reset themselves once consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Wave,
    Jump,
}

impl Trigger {
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::Wave => "wave",
            Trigger::Jump => "jump",
        }
    }
}

// ── Target Trait ───────────────────────────────────────

/// Write-only capability over an animation state machine (Live2D rig,
/// skeletal controller, test double). The interpreter never reads it back.
pub trait AnimationTarget {
    fn set_bool(&mut self, param: BoolParam, value: bool);

    fn fire_trigger(&mut self, trigger: Trigger);

    fn set_playback_rate(&mut self, rate: f32);
}
