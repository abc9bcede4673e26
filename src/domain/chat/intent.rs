//! Intent classification for inbound messages.
//!
//! Routing is a fixed-priority substring match, kept as an ordered rule
//! table so the priority law (News > Weather > General) stays explicit and
//! testable.

use serde::{Deserialize, Serialize};

/// Routing category assigned to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    News,
    Weather,
    General,
}

struct Rule {
    triggers: &'static [&'static str],
    intent: Intent,
}

/// Evaluated top to bottom; the first matching rule wins.
const RULES: &[Rule] = &[
    Rule {
        triggers: &["news", "brief"],
        intent: Intent::News,
    },
    Rule {
        triggers: &["weather"],
        intent: Intent::Weather,
    },
];

impl Intent {
    /// Classifies a raw message.
    ///
    /// Trigger matching is a case-insensitive substring search; a message
    /// matching several rules resolves to the first in the table. Messages
    /// matching nothing are General.
    pub fn classify(message: &str) -> Intent {
        let lowered = message.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| lowered.contains(t)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::General)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn news_trigger_classifies_news() {
        assert_eq!(Intent::classify("any news today?"), Intent::News);
    }

    #[test]
    fn brief_trigger_classifies_news() {
        assert_eq!(Intent::classify("give me a morning brief"), Intent::News);
    }

    #[test]
    fn weather_trigger_classifies_weather() {
        assert_eq!(
            Intent::classify("What's the weather in Paris"),
            Intent::Weather
        );
    }

    #[test]
    fn unmatched_message_is_general() {
        assert_eq!(Intent::classify("tell me a joke"), Intent::General);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Intent::classify("NEWS please"), Intent::News);
        assert_eq!(Intent::classify("WeAtHeR?"), Intent::Weather);
    }

    #[test]
    fn triggers_match_inside_words() {
        // Substring search, not token search.
        assert_eq!(Intent::classify("debriefing notes"), Intent::News);
    }

    #[test]
    fn news_beats_weather_when_both_present() {
        assert_eq!(
            Intent::classify("news about the weather in Oslo"),
            Intent::News
        );
    }

    proptest! {
        // Priority law: any message containing both a News trigger and the
        // Weather trigger classifies as News.
        #[test]
        fn priority_law_news_over_weather(
            prefix in "[a-z ]{0,20}",
            news_trigger in prop_oneof![Just("news"), Just("brief")],
            middle in "[a-z ]{0,20}",
            suffix in "[a-z ]{0,20}",
        ) {
            let message = format!("{prefix}{news_trigger}{middle}weather{suffix}");
            prop_assert_eq!(Intent::classify(&message), Intent::News);

            let reversed = format!("{prefix}weather{middle}{news_trigger}{suffix}");
            prop_assert_eq!(Intent::classify(&reversed), Intent::News);
        }
    }
}
