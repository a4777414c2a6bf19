//! Public client surface + builder.

mod constants;

use crate::core::NwError;
use constants::{DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// The shared HTTP client for the Yahoo news endpoint.
///
/// Cheap to clone; all clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NwClient {
    http: Client,
    base_news: Url,
}

impl Default for NwClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NwClient {
    /// Create a new builder.
    pub fn builder() -> NwClientBuilder {
        NwClientBuilder::default()
    }

    /// Start a news request for `symbol`.
    pub fn news(&self, symbol: impl Into<String>) -> crate::news::NewsBuilder {
        crate::news::NewsBuilder::new(self, symbol)
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NwClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NwClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news base URL (e.g., `https://finance.yahoo.com/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `NwError` if a default URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<NwClient, NwError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NwClient { http, base_news })
    }
}
