use chrono::{DateTime, Utc};

use crate::feed::FeedConfig;
use crate::feed::model::{FeedItem, NewsItem};

/// Applies the recency window and the per-ticker cap, attaching sentiment.
///
/// Items are walked in the given (upstream) order. Only items whose
/// `published_at` resolved and whose signed age at `now` is strictly inside
/// `config.max_age` are kept; items without a timestamp cannot be proven
/// recent and are dropped. Scanning stops as soon as `config.max_items`
/// items have been accepted. Empty input yields an empty output.
pub fn select(
    items: impl IntoIterator<Item = NewsItem>,
    now: DateTime<Utc>,
    config: &FeedConfig,
) -> Vec<FeedItem> {
    let mut accepted = Vec::new();
    for item in items {
        let Some(published_at) = item.published_at else {
            continue;
        };
        if now.signed_duration_since(published_at) >= config.max_age {
            continue;
        }

        let sentiment = config.lexicon.classify(&item.title);
        accepted.push(FeedItem {
            title: item.title,
            summary: item.summary,
            source: item.source,
            url: item.url,
            display_date: item.display_date,
            sentiment,
            published_at: Some(published_at),
        });

        if accepted.len() >= config.max_items {
            break;
        }
    }
    accepted
}
