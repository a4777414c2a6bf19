use crate::core::{NwClient, NwError};
use crate::news::{NewsBuilder, RawNewsItem};

/// A trait for services that can fetch raw news items for a symbol.
///
/// This abstracts the upstream transport so the pipeline driver is a pure
/// function of (watchlist, configuration, clock, upstream responses) and so
/// tests can script responses without a network. It is implemented by
/// [`NwClient`].
pub trait NewsSource: Send + Sync {
    /// Asynchronously fetches up to `count` raw news items for `symbol`.
    ///
    /// The returned items preserve upstream order (roughly newest first,
    /// unverified) and both observed item shapes.
    fn fetch_news<'a>(
        &'a self,
        symbol: &'a str,
        count: u32,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<RawNewsItem>, NwError>> + Send + 'a>,
    >;
}

impl NewsSource for NwClient {
    fn fetch_news<'a>(
        &'a self,
        symbol: &'a str,
        count: u32,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<RawNewsItem>, NwError>> + Send + 'a>,
    > {
        Box::pin(async move { NewsBuilder::new(self, symbol).count(count).fetch().await })
    }
}
