pub mod cli;
pub mod config;
pub mod motion;

pub use motion::{
    apply, classify, AnimationTarget, BoolParam, Classifier, CommandDecision, Intent,
    MotionService, RigState, Trigger,
};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;
    cli::run(cli::MotionArgs::parse())
}
