use serde::Serialize;
use tracing::debug;

use crate::{
    core::{NwClient, NwError},
    news::{model::RawNewsItem, wire},
};

#[derive(Serialize)]
struct ServiceConfig<'a> {
    #[serde(rename = "snippetCount")]
    snippet_count: u32,
    s: &'a [&'a str],
}

#[derive(Serialize)]
struct NewsPayload<'a> {
    #[serde(rename = "serviceConfig")]
    service_config: ServiceConfig<'a>,
}

pub(super) async fn fetch_news(
    client: &NwClient,
    symbol: &str,
    count: u32,
) -> Result<Vec<RawNewsItem>, NwError> {
    let mut url = client.base_news().join("xhr/ncp")?;
    url.query_pairs_mut()
        .append_pair("queryRef", "latestNews")
        .append_pair("serviceKey", "ncp_fin");

    let payload = NewsPayload {
        service_config: ServiceConfig {
            snippet_count: count,
            s: &[symbol],
        },
    };

    let resp = client.http().post(url).json(&payload).send().await?;

    if !resp.status().is_success() {
        return Err(NwError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = resp.text().await?;
    let envelope: wire::NewsEnvelope = serde_json::from_str(&body).map_err(NwError::Json)?;

    let entries = envelope
        .data
        .and_then(|d| d.ticker_stream)
        .and_then(|ts| ts.stream)
        .unwrap_or_default();

    let total = entries.len();
    let items: Vec<RawNewsItem> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<wire::StreamItem>(entry).ok())
        .filter_map(wire::StreamItem::into_raw)
        .collect();

    debug!(symbol, total, kept = items.len(), "parsed news stream");
    Ok(items)
}
