use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::sentiment::Sentiment;

/// A news item normalized from one raw upstream entry.
///
/// Field fallbacks have already been applied; `published_at` is only set when
/// the upstream timestamp parsed cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// The headline.
    pub title: String,
    /// Reserved; upstream provides no usable summary and none is derived.
    pub summary: String,
    /// The publisher display name.
    pub source: String,
    /// The article link.
    pub url: String,
    /// The publication instant, when the upstream timestamp was resolvable.
    pub published_at: Option<DateTime<Utc>>,
    /// A short human-readable publication date for the dashboard.
    pub display_date: String,
}

/// A normalized item that passed the recency filter, with its sentiment.
///
/// Serializes with exactly the keys the dashboard consumes: `title`,
/// `summary`, `source`, `url`, `date`, and `sentiment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// The headline.
    pub title: String,
    /// Reserved; always empty.
    pub summary: String,
    /// The publisher display name.
    pub source: String,
    /// The article link.
    pub url: String,
    /// A short human-readable publication date.
    #[serde(rename = "date")]
    pub display_date: String,
    /// The lexical sentiment of the headline.
    pub sentiment: Sentiment,
    /// The publication instant the recency filter admitted; in-memory only.
    #[serde(skip)]
    pub published_at: Option<DateTime<Utc>>,
}

/// The document one run produces, fully replacing any prior output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDocument {
    /// Human time of day of the run, e.g. `03:14 PM`.
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    /// Human full date of the run, e.g. `Thursday, June 05, 2025`.
    pub date: String,
    /// One entry per watchlist ticker; the sequence may be empty.
    pub news: BTreeMap<String, Vec<FeedItem>>,
}

impl NewsDocument {
    /// Assembles the document from the per-ticker map, stamped with `now`.
    pub fn assemble(now: DateTime<Local>, news: BTreeMap<String, Vec<FeedItem>>) -> Self {
        Self {
            last_updated: now.format("%I:%M %p").to_string(),
            date: now.format("%A, %B %d, %Y").to_string(),
            news,
        }
    }
}
