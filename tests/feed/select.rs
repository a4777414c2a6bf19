use chrono::{DateTime, Duration, TimeZone, Utc};
use newswatch::{FeedConfig, NewsItem, Sentiment, select};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 27, 12, 0, 0).unwrap()
}

fn item(title: &str, published_at: Option<DateTime<Utc>>) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        summary: String::new(),
        source: "Newswire".to_string(),
        url: "https://example.com/story".to_string(),
        published_at,
        display_date: "Feb 26, 11:48".to_string(),
    }
}

#[test]
fn keeps_only_items_inside_the_window() {
    let config = FeedConfig::default();
    let items = vec![
        item("fresh", Some(now() - Duration::hours(1))),
        item("stale", Some(now() - Duration::hours(72))),
        item("undated", None),
        item("borderline", Some(now() - Duration::hours(48))),
    ];

    let picked = select(items, now(), &config);

    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].title, "fresh");
}

#[test]
fn exactly_48h_old_is_excluded_but_future_dated_passes() {
    let config = FeedConfig::default();
    let items = vec![
        item("at the boundary", Some(now() - Duration::hours(48))),
        item("from the future", Some(now() + Duration::hours(1))),
    ];

    let picked = select(items, now(), &config);

    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].title, "from the future");
}

#[test]
fn stops_at_the_cap_preserving_order() {
    let config = FeedConfig::default().max_items(4);
    let items: Vec<_> = (0..10)
        .map(|i| item(&format!("story {i}"), Some(now() - Duration::minutes(i))))
        .collect();

    let picked = select(items, now(), &config);

    assert_eq!(picked.len(), 4);
    let titles: Vec<_> = picked.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["story 0", "story 1", "story 2", "story 3"]);
}

#[test]
fn attaches_sentiment_from_the_title() {
    let config = FeedConfig::default();
    let items = vec![
        item("Profit up after record quarter", Some(now())),
        item("Guidance warns of falling demand", Some(now())),
        item("Quarterly report published", Some(now())),
    ];

    let picked = select(items, now(), &config);

    let sentiments: Vec<_> = picked.iter().map(|p| p.sentiment).collect();
    assert_eq!(
        sentiments,
        [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
    );
}

#[test]
fn empty_input_yields_empty_output() {
    let config = FeedConfig::default();
    assert!(select(Vec::new(), now(), &config).is_empty());
}

#[test]
fn accepted_items_keep_their_publication_instant() {
    let config = FeedConfig::default();
    let published = now() - Duration::hours(2);
    let picked = select(vec![item("fresh", Some(published))], now(), &config);

    assert_eq!(picked[0].published_at, Some(published));
    assert_eq!(picked[0].summary, "");
}
