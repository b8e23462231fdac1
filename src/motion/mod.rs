pub mod classifier;
pub mod config;
pub mod controller;
pub mod interface;
pub mod rig;
pub mod service;


pub use classifier::{classify, Classifier, MatchMode, SpeedPrecedence};
pub use config::{load_config, save_config, MotionConfig};
pub use controller::apply;
pub use interface::{
    AnimationTarget, BoolParam, CommandDecision, Intent, InvalidSpeed, Trigger, DEFAULT_SPEED,
};
pub use rig::{RigSnapshot, RigState};
pub use service::{MotionService, StatsSnapshot};
