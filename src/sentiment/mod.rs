//! Lexical sentiment tagging for headlines.
//!
//! Sentiment is inferred purely from keyword presence, not semantic
//! understanding. Matching is by case-insensitive substring, untokenized, so
//! "downturn" counts for "down".

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The coarse sentiment attached to a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// The lowercase wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "up", "growth", "rise", "profit", "buy", "positive", "win", "beat", "bullish", "increase",
    "deal", "success",
];

const NEGATIVE_WORDS: &[&str] = &[
    "down", "fall", "loss", "sell", "negative", "drop", "miss", "bearish", "decrease", "warn",
    "risk", "fail",
];

/// The keyword sets used to score a headline.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Lexicon {
    /// Creates a lexicon with custom keyword sets.
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self { positive, negative }
    }

    /// Classifies `text` by counting which keywords occur in it.
    ///
    /// Each keyword counts at most once; the larger count wins and ties
    /// (including empty text) are [`Sentiment::Neutral`]. Pure and total.
    pub fn classify(&self, text: &str) -> Sentiment {
        let text = text.to_lowercase();
        let pos = self
            .positive
            .iter()
            .filter(|word| text.contains(word.as_str()))
            .count();
        let neg = self
            .negative
            .iter()
            .filter(|word| text.contains(word.as_str()))
            .count();

        match pos.cmp(&neg) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}
