use serde::Deserialize;

use crate::news::model::RawNewsItem;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) data: Option<NewsData>,
}

#[derive(Deserialize)]
pub(crate) struct NewsData {
    #[serde(rename = "tickerStream")]
    pub(crate) ticker_stream: Option<TickerStream>,
}

#[derive(Deserialize)]
pub(crate) struct TickerStream {
    // Entries are decoded one at a time so a single malformed item is
    // dropped without failing the whole envelope.
    pub(crate) stream: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
pub(crate) struct StreamItem {
    pub(crate) content: Option<Content>,
    // Flat-shape fields, seen on older stream entries.
    pub(crate) title: Option<String>,
    pub(crate) link: Option<String>,
    pub(crate) publisher: Option<String>,
    pub(crate) ad: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct Content {
    pub(crate) title: Option<String>,
    #[serde(rename = "pubDate")]
    pub(crate) pub_date: Option<String>,
    pub(crate) provider: Option<Provider>,
    #[serde(rename = "clickThroughUrl")]
    pub(crate) click_through_url: Option<ClickThroughUrl>,
}

#[derive(Deserialize)]
pub(crate) struct Provider {
    #[serde(rename = "displayName")]
    pub(crate) display_name: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ClickThroughUrl {
    pub(crate) url: Option<String>,
}

impl StreamItem {
    /// Collapse a wire entry into the raw item union, or `None` for ads.
    pub(crate) fn into_raw(self) -> Option<RawNewsItem> {
        if self.ad.is_some() {
            return None;
        }
        Some(match self.content {
            Some(c) => RawNewsItem::Enriched {
                title: c.title,
                url: c.click_through_url.and_then(|u| u.url),
                source: c.provider.and_then(|p| p.display_name),
                pub_date: c.pub_date,
            },
            None => RawNewsItem::Flat {
                title: self.title,
                url: self.link,
                source: self.publisher,
            },
        })
    }
}
