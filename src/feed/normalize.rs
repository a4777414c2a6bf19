use chrono::{DateTime, Utc};

use crate::feed::model::NewsItem;
use crate::news::RawNewsItem;

const NO_TITLE: &str = "No Title";
const NO_URL: &str = "#";
const UNKNOWN_SOURCE: &str = "Unknown";
const RECENT_LABEL: &str = "Recent";

/// Maps one raw upstream item onto the canonical record.
///
/// Missing fields fall back to `"No Title"` / `"#"` / `"Unknown"`; never
/// fails. Flat items carry no timestamp, so they normalize with
/// `published_at` unset and can never be proven recent.
pub fn normalize(raw: RawNewsItem) -> NewsItem {
    match raw {
        RawNewsItem::Enriched {
            title,
            url,
            source,
            pub_date,
        } => {
            let (published_at, display_date) = parse_pub_date(pub_date.as_deref());
            NewsItem {
                title: title.unwrap_or_else(|| NO_TITLE.to_string()),
                summary: String::new(),
                source: source.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
                url: url.unwrap_or_else(|| NO_URL.to_string()),
                published_at,
                display_date,
            }
        }
        RawNewsItem::Flat { title, url, source } => NewsItem {
            title: title.unwrap_or_else(|| NO_TITLE.to_string()),
            summary: String::new(),
            source: source.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            url: url.unwrap_or_else(|| NO_URL.to_string()),
            published_at: None,
            display_date: RECENT_LABEL.to_string(),
        },
    }
}

/// Parses an RFC 3339 `pubDate` string as UTC.
///
/// On success the display date is the short `%b %d, %H:%M` form; on parse
/// failure it degrades to the first 10 characters of the raw string (an ISO
/// date-only prefix), and an absent or empty string yields the literal
/// `"Recent"`.
fn parse_pub_date(raw: Option<&str>) -> (Option<DateTime<Utc>>, String) {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return (None, RECENT_LABEL.to_string());
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => {
            let utc = parsed.with_timezone(&Utc);
            (Some(utc), utc.format("%b %d, %H:%M").to_string())
        }
        Err(_) => (None, raw.chars().take(10).collect()),
    }
}
