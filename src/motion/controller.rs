//! Controller Adapter: turns a decision into rig parameter writes.

use super::interface::{
    AnimationTarget, BoolParam, CommandDecision, Intent, Trigger, DEFAULT_SPEED,
};
use tracing::{debug, warn};

/// Apply a decision to the target.
///
/// Locomotion bools and playback rate are reset first, so whatever the
/// previous command left behind never survives into the new one.
pub fn apply(decision: CommandDecision, target: &mut dyn AnimationTarget) {
    target.set_bool(BoolParam::IsWalking, false);
    target.set_bool(BoolParam::IsRunning, false);
    target.set_playback_rate(DEFAULT_SPEED);

    match decision.intent() {
        Intent::Walk => {
            target.set_playback_rate(decision.speed());
            target.set_bool(BoolParam::IsWalking, true);
        }
        Intent::Run => {
            target.set_playback_rate(decision.speed());
            target.set_bool(BoolParam::IsRunning, true);
        }
        Intent::Wave => target.fire_trigger(Trigger::Wave),
        Intent::Jump => target.fire_trigger(Trigger::Jump),
        Intent::Idle => {}
        Intent::Unknown => {
            warn!(target: "kokoro_motion::controller", "Command not understood, rig left idle");
        }
    }

    debug!(
        target: "kokoro_motion::controller",
        intent = %decision.intent(),
        speed = decision.speed(),
        "Applied motion decision"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Write {
        Bool(BoolParam, bool),
        Trigger(Trigger),
        Rate(f32),
    }

    #[derive(Default)]
    struct Log(Vec<Write>);

    impl AnimationTarget for Log {
        fn set_bool(&mut self, param: BoolParam, value: bool) {
            self.0.push(Write::Bool(param, value));
        }
        fn fire_trigger(&mut self, trigger: Trigger) {
            self.0.push(Write::Trigger(trigger));
        }
        fn set_playback_rate(&mut self, rate: f32) {
            self.0.push(Write::Rate(rate));
        }
    }

    fn reset() -> Vec<Write> {
        vec![
            Write::Bool(BoolParam::IsWalking, false),
            Write::Bool(BoolParam::IsRunning, false),
            Write::Rate(1.0),
        ]
    }

    fn writes_for(intent: Intent, speed: f32) -> Vec<Write> {
        let mut log = Log::default();
        apply(CommandDecision::new(intent, speed), &mut log);
        log.0
    }

    #[test]
    fn walk_sets_rate_then_flag() {
        let mut expected = reset();
        expected.push(Write::Rate(0.6));
        expected.push(Write::Bool(BoolParam::IsWalking, true));
        assert_eq!(writes_for(Intent::Walk, 0.6), expected);
    }

    #[test]
    fn run_sets_rate_then_flag() {
        let mut expected = reset();
        expected.push(Write::Rate(1.8));
        expected.push(Write::Bool(BoolParam::IsRunning, true));
        assert_eq!(writes_for(Intent::Run, 1.8), expected);
    }

    #[test]
    fn wave_and_jump_fire_triggers_at_normal_rate() {
        let mut expected = reset();
        expected.push(Write::Trigger(Trigger::Wave));
        assert_eq!(writes_for(Intent::Wave, 1.4), expected);

        let mut expected = reset();
        expected.push(Write::Trigger(Trigger::Jump));
        assert_eq!(writes_for(Intent::Jump, 0.6), expected);
    }

    #[test]
    fn idle_and_unknown_only_reset() {
        assert_eq!(writes_for(Intent::Idle, 1.8), reset());
        assert_eq!(writes_for(Intent::Unknown, 1.4), reset());
    }
}
