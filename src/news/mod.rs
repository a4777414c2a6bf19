mod api;
mod model;
mod wire;

pub use model::RawNewsItem;

use crate::{NwClient, NwError};

/// A builder for fetching raw news items for a specific symbol.
pub struct NewsBuilder {
    client: NwClient,
    symbol: String,
    count: u32,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &NwClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            count: 10,
        }
    }

    /// Sets the maximum number of raw items to request from upstream.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Executes the request and fetches the raw news items.
    ///
    /// Stream entries that are not JSON objects, fail to decode, or are ad
    /// placements are dropped; they never fail the request.
    ///
    /// # Errors
    ///
    /// Returns an `NwError` if the request to the Yahoo Finance endpoint
    /// fails, the response status is unsuccessful, or the envelope cannot be
    /// parsed.
    pub async fn fetch(self) -> Result<Vec<RawNewsItem>, NwError> {
        api::fetch_news(&self.client, &self.symbol, self.count).await
    }
}
