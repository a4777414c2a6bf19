//! newswatch: scheduled Yahoo Finance news refresh for a fixed watchlist.
//!
//! Fetches recent headlines for each ticker on the watchlist, keeps only
//! items provably younger than the recency window, tags each headline with a
//! lexical sentiment, and assembles a single JSON document for the dashboard
//! frontend. One run produces one document; there is no cross-run state.

/// Core building blocks: the HTTP client, the error type, and service traits.
pub mod core;
/// The normalization pipeline: normalize, filter, select, and assemble.
pub mod feed;
/// The Yahoo Finance news transport.
pub mod news;
/// Persistence of the assembled document.
pub mod output;
/// Lexical sentiment tagging.
pub mod sentiment;
/// The static ticker registry.
pub mod watchlist;

pub use crate::core::{NewsSource, NwClient, NwClientBuilder, NwError};
pub use feed::{FeedConfig, FeedItem, NewsDocument, NewsItem, build_feed, normalize, select};
pub use news::{NewsBuilder, RawNewsItem};
pub use sentiment::{Lexicon, Sentiment};
pub use watchlist::{TickerMeta, Watchlist};
