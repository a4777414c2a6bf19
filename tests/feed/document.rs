use chrono::{Local, TimeZone};
use newswatch::{FeedItem, NewsDocument, Sentiment};
use std::collections::BTreeMap;

fn sample_item() -> FeedItem {
    FeedItem {
        title: "Chipmaker beats estimates".to_string(),
        summary: String::new(),
        source: "Newswire".to_string(),
        url: "https://example.com/story".to_string(),
        display_date: "Feb 26, 11:48".to_string(),
        sentiment: Sentiment::Positive,
        published_at: None,
    }
}

#[test]
fn assemble_stamps_locale_strings() {
    let now = Local.with_ymd_and_hms(2025, 6, 5, 15, 14, 0).unwrap();
    let document = NewsDocument::assemble(now, BTreeMap::new());

    assert_eq!(document.last_updated, "03:14 PM");
    assert_eq!(document.date, "Thursday, June 05, 2025");
}

#[test]
fn items_serialize_with_the_dashboard_keys() {
    let value = serde_json::to_value(sample_item()).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["date", "sentiment", "source", "summary", "title", "url"]);
    assert_eq!(object["date"], "Feb 26, 11:48");
    assert_eq!(object["sentiment"], "positive");
}

#[test]
fn document_round_trips_through_json() {
    let now = Local.with_ymd_and_hms(2025, 6, 5, 15, 14, 0).unwrap();
    let mut news = BTreeMap::new();
    news.insert("NVDA".to_string(), vec![sample_item()]);
    news.insert("AMD".to_string(), Vec::new());
    let document = NewsDocument::assemble(now, news);

    let json = serde_json::to_string_pretty(&document).unwrap();
    let parsed: NewsDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, document);
    assert_eq!(parsed.news["NVDA"].len(), 1);
    assert!(parsed.news["AMD"].is_empty());
}

#[test]
fn empty_sequences_serialize_as_arrays() {
    let now = Local.with_ymd_and_hms(2025, 6, 5, 15, 14, 0).unwrap();
    let mut news = BTreeMap::new();
    news.insert("MU".to_string(), Vec::new());
    let document = NewsDocument::assemble(now, news);

    let value = serde_json::to_value(&document).unwrap();
    assert!(value["news"]["MU"].as_array().unwrap().is_empty());
}
