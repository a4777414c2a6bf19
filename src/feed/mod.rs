//! The news-normalization pipeline.
//!
//! One run walks the watchlist in definition order, fetches a bounded raw
//! stream per ticker through the [`NewsSource`] seam, normalizes and filters
//! it, and assembles the output document. Failures are absorbed at the
//! smallest enclosing unit: a malformed stream entry skips that entry, a
//! transport failure empties that ticker, and nothing aborts the run.

mod model;
mod normalize;
mod select;

pub use model::{FeedItem, NewsDocument, NewsItem};
pub use normalize::normalize;
pub use select::select;

use chrono::{DateTime, Duration, Local, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::core::{NewsSource, NwError};
use crate::sentiment::Lexicon;
use crate::watchlist::Watchlist;

/// Tuning knobs for one pipeline run.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Maximum age an item may have to be eligible for inclusion.
    pub max_age: Duration,
    /// Maximum number of accepted items persisted per ticker.
    pub max_items: usize,
    /// Maximum number of raw upstream items inspected per ticker.
    pub lookahead: u32,
    /// The keyword sets used to score headlines.
    pub lexicon: Lexicon,
}

impl FeedConfig {
    /// Overrides the recency window.
    #[must_use]
    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Overrides the per-ticker cap.
    #[must_use]
    pub const fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Overrides how many raw items are inspected before giving up.
    #[must_use]
    pub const fn lookahead(mut self, lookahead: u32) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Overrides the sentiment keyword sets.
    #[must_use]
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::hours(48),
            max_items: 5,
            lookahead: 15,
            lexicon: Lexicon::default(),
        }
    }
}

/// Runs the pipeline once and assembles the output document.
///
/// Every watchlist ticker gets exactly one entry in the result, in any
/// failure mode: a ticker whose fetch or processing fails contributes an
/// empty sequence and the run continues with the remaining tickers.
pub async fn build_feed(
    source: &dyn NewsSource,
    watchlist: &Watchlist,
    config: &FeedConfig,
    now: DateTime<Local>,
) -> NewsDocument {
    let now_utc = now.with_timezone(&Utc);
    let mut news = BTreeMap::new();

    for ticker in watchlist.iter() {
        let items = match ticker_feed(source, &ticker.symbol, config, now_utc).await {
            Ok(items) => items,
            Err(e) => {
                warn!(symbol = %ticker.symbol, error = %e, "news fetch failed; recording empty feed");
                Vec::new()
            }
        };
        debug!(symbol = %ticker.symbol, fresh = items.len(), "ticker processed");
        news.insert(ticker.symbol.clone(), items);
    }

    NewsDocument::assemble(now, news)
}

/// Fetch → normalize → select for a single ticker.
async fn ticker_feed(
    source: &dyn NewsSource,
    symbol: &str,
    config: &FeedConfig,
    now: DateTime<Utc>,
) -> Result<Vec<FeedItem>, NwError> {
    let raw = source.fetch_news(symbol, config.lookahead).await?;
    if raw.is_empty() {
        debug!(symbol, "no raw news returned");
        return Ok(Vec::new());
    }

    // Upstream is asked for `lookahead` items, but its count is unverified.
    let normalized = raw
        .into_iter()
        .take(config.lookahead as usize)
        .map(normalize);

    Ok(select(normalized, now, config))
}
