//! Scheduled news refresh job.
//!
//! A single no-argument run: fetch recent headlines for every watchlist
//! ticker, filter and tag them, and overwrite the dashboard's news document.
//! Scheduling (cron or similar) is external to this binary.

use chrono::Local;
use std::error::Error;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use newswatch::{FeedConfig, NwClient, Watchlist, build_feed, output};

/// Logical path of the document the dashboard frontend reads.
const OUTPUT_PATH: &str = "src/data/news.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt().with_env_filter(filter).with_target(true).init();

    let watchlist = Watchlist::default();
    let config = FeedConfig::default();
    info!(tickers = watchlist.len(), "starting news refresh");

    let client = NwClient::builder().build()?;
    let document = build_feed(&client, &watchlist, &config, Local::now()).await;

    output::write_document(&document, Path::new(OUTPUT_PATH)).await?;
    info!("news refresh complete");
    Ok(())
}
