//! Command Classifier: maps free-form text to an animation intent.
//!
//! Keyword-based (no LLM call). Lowercase the text, look for known
//! keywords, first table hit wins. Table order is the tie-break policy,
//! since one command can hit several categories ("run and wave" is a Wave).

use super::interface::{CommandDecision, Intent, DEFAULT_SPEED};
use serde::{Deserialize, Serialize};

// ── Keyword sets ───────────────────────────────────────────

/// Intent tables in resolution order.
const INTENT_KW: &[(Intent, &[&str])] = &[
    (Intent::Wave, &["wave", "hello", "hi"]),
    (Intent::Jump, &["jump", "hop"]),
    (Intent::Run, &["run", "sprint"]),
    (Intent::Walk, &["walk", "move"]),
    (Intent::Idle, &["stop", "idle", "rest"]),
];

/// Speed modifiers in legacy order. "very slow" sits behind "slow" and can
/// never win here.
const SPEED_KW_FIRST_MATCH: &[(&str, f32)] = &[
    ("very fast", 1.8),
    ("fast", 1.4),
    ("slow", 0.6),
    ("slowly", 0.6),
    ("very slow", 0.4),
];

/// Same modifiers, longest phrase first.
const SPEED_KW_MOST_SPECIFIC: &[(&str, f32)] = &[
    ("very fast", 1.8),
    ("very slow", 0.4),
    ("slowly", 0.6),
    ("fast", 1.4),
    ("slow", 0.6),
];

// ── Policies ───────────────────────────────────────────────

/// How a keyword is located in the command text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Plain containment: "jumping" matches "jump", "this" matches "hi".
    #[default]
    Substring,
    /// Whole words only. Phrases must match consecutive words.
    WordBoundary,
}

/// Order in which speed modifiers are tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedPrecedence {
    /// Legacy table order: "walk very slow" resolves to 0.6.
    #[default]
    FirstMatch,
    /// Longer phrases first: "walk very slow" resolves to 0.4.
    MostSpecific,
}

// ── Classifier ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    pub match_mode: MatchMode,
    pub speed_precedence: SpeedPrecedence,
}

impl Classifier {
    pub fn new(match_mode: MatchMode, speed_precedence: SpeedPrecedence) -> Self {
        Self {
            match_mode,
            speed_precedence,
        }
    }

    /// Classify a command. Total: anything unrecognised is `Unknown` at 1.0.
    pub fn classify(&self, text: &str) -> CommandDecision {
        let normalized = text.trim().to_lowercase();
        let words = match self.match_mode {
            MatchMode::Substring => Vec::new(),
            MatchMode::WordBoundary => split_words(&normalized),
        };
        let hit = |kw: &str| match self.match_mode {
            MatchMode::Substring => normalized.contains(kw),
            MatchMode::WordBoundary => contains_phrase(&words, kw),
        };

        let intent = INTENT_KW
            .iter()
            .find(|(_, kws)| kws.iter().any(|kw| hit(*kw)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::Unknown);

        let speed_table = match self.speed_precedence {
            SpeedPrecedence::FirstMatch => SPEED_KW_FIRST_MATCH,
            SpeedPrecedence::MostSpecific => SPEED_KW_MOST_SPECIFIC,
        };
        let speed = speed_table
            .iter()
            .find(|(kw, _)| hit(*kw))
            .map(|(_, speed)| *speed)
            .unwrap_or(DEFAULT_SPEED);

        CommandDecision::new(intent, speed)
    }
}

/// Classify with the compatibility policies (substring, first match).
pub fn classify(text: &str) -> CommandDecision {
    Classifier::default().classify(text)
}

fn split_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|w| w == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word_mode() -> Classifier {
        Classifier::new(MatchMode::WordBoundary, SpeedPrecedence::FirstMatch)
    }

    fn specific() -> Classifier {
        Classifier::new(MatchMode::Substring, SpeedPrecedence::MostSpecific)
    }

    #[test]
    fn each_keyword_selects_its_intent() {
        for (intent, kws) in INTENT_KW {
            for kw in *kws {
                assert_eq!(classify(kw).intent(), *intent, "keyword {:?}", kw);
            }
        }
    }

    #[test]
    fn wave_beats_run() {
        assert_eq!(classify("run and wave").intent(), Intent::Wave);
    }

    #[test]
    fn jump_beats_walk() {
        assert_eq!(classify("walk then hop").intent(), Intent::Jump);
    }

    #[test]
    fn substring_matches_inflections() {
        assert_eq!(classify("jumping rope").intent(), Intent::Jump);
        assert_eq!(classify("sprinter").intent(), Intent::Run);
    }

    #[test]
    fn substring_hi_hides_inside_other_words() {
        // "this" contains "hi"
        assert_eq!(classify("stop this").intent(), Intent::Wave);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let d = classify("   RUN Very FAST  ");
        assert_eq!(d, CommandDecision::new(Intent::Run, 1.8));
    }

    #[test]
    fn speed_modifiers() {
        assert_eq!(classify("walk fast").speed(), 1.4);
        assert_eq!(classify("run very fast").speed(), 1.8);
        assert_eq!(classify("walk slowly").speed(), 0.6);
        assert_eq!(classify("walk").speed(), 1.0);
    }

    #[test]
    fn very_slow_is_shadowed_by_slow() {
        let d = classify("walk very slow");
        assert_eq!(d.intent(), Intent::Walk);
        assert_eq!(d.speed(), 0.6);
    }

    #[test]
    fn speed_is_computed_for_non_locomotion() {
        assert_eq!(classify("wave fast").speed(), 1.4);
        assert_eq!(classify("dance fast"), CommandDecision::new(Intent::Unknown, 1.4));
    }

    #[test]
    fn empty_and_nonsense_are_unknown() {
        assert_eq!(classify(""), CommandDecision::new(Intent::Unknown, 1.0));
        assert_eq!(classify("   "), CommandDecision::new(Intent::Unknown, 1.0));
        assert_eq!(classify("qwzx"), CommandDecision::new(Intent::Unknown, 1.0));
    }

    #[test]
    fn word_boundary_rejects_partial_words() {
        let c = word_mode();
        assert_eq!(c.classify("sprinter").intent(), Intent::Unknown);
        assert_eq!(c.classify("jumping rope").intent(), Intent::Unknown);
        assert_eq!(c.classify("stop this").intent(), Intent::Idle);
    }

    #[test]
    fn word_boundary_accepts_punctuated_words() {
        let c = word_mode();
        assert_eq!(c.classify("hi there!").intent(), Intent::Wave);
        assert_eq!(c.classify("walk, slowly.").speed(), 0.6);
        assert_eq!(c.classify("run...very fast").speed(), 1.8);
    }

    #[test]
    fn word_boundary_phrase_needs_adjacent_words() {
        let c = word_mode();
        // "very" and "fast" are not adjacent, so only "fast" hits
        assert_eq!(c.classify("very quickly and fast").speed(), 1.4);
    }

    #[test]
    fn most_specific_reaches_very_slow() {
        assert_eq!(specific().classify("walk very slow").speed(), 0.4);
        assert_eq!(specific().classify("walk very fast").speed(), 1.8);
        assert_eq!(specific().classify("walk slowly").speed(), 0.6);
        assert_eq!(specific().classify("walk fast").speed(), 1.4);
    }

    #[test]
    fn default_classifier_matches_free_function() {
        for text in ["run and wave", "walk very slow", "", "hop fast"] {
            assert_eq!(Classifier::default().classify(text), classify(text));
        }
    }

    proptest! {
        #[test]
        fn classification_is_total(text in ".*") {
            let d = classify(&text);
            prop_assert!(Intent::ALL.contains(&d.intent()));
            prop_assert!(d.speed() > 0.0);
        }

        #[test]
        fn every_policy_yields_positive_speed(text in ".*") {
            for mode in [MatchMode::Substring, MatchMode::WordBoundary] {
                for prec in [SpeedPrecedence::FirstMatch, SpeedPrecedence::MostSpecific] {
                    let d = Classifier::new(mode, prec).classify(&text);
                    prop_assert!(d.speed() > 0.0);
                }
            }
        }
    }
}
