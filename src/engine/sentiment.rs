//! Coarse per-message sentiment classification.
//!
//! Counts fixed positive and negative word lists by substring containment
//! in the lowercased message; the larger count wins and ties resolve to
//! neutral.

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "wonderful",
    "excited",
    "grateful",
    "thankful",
    "proud",
    "accomplished",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "worried",
    "stressed",
    "angry",
    "frustrated",
    "hopeless",
    "lonely",
];

/// Three-way emotional valence of a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(format!("unknown sentiment: {s}")),
        }
    }
}

/// Classify a message. Each list word counts at most once, regardless of
/// how many times it appears.
pub fn analyze(message: &str) -> Sentiment {
    let lower = message.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
