use chrono::{TimeZone, Utc};
use newswatch::{RawNewsItem, normalize};

#[test]
fn enriched_item_with_all_fields() {
    let item = normalize(RawNewsItem::Enriched {
        title: Some("Chipmaker beats estimates".to_string()),
        url: Some("https://example.com/story".to_string()),
        source: Some("Newswire".to_string()),
        pub_date: Some("2026-02-26T11:48:04Z".to_string()),
    });

    assert_eq!(item.title, "Chipmaker beats estimates");
    assert_eq!(item.url, "https://example.com/story");
    assert_eq!(item.source, "Newswire");
    assert_eq!(item.summary, "");
    assert_eq!(
        item.published_at,
        Some(Utc.with_ymd_and_hms(2026, 2, 26, 11, 48, 4).unwrap())
    );
    assert_eq!(item.display_date, "Feb 26, 11:48");
}

#[test]
fn enriched_item_with_nothing_resolvable() {
    // The entire nested chain can be absent; nothing raises.
    let item = normalize(RawNewsItem::Enriched {
        title: None,
        url: None,
        source: None,
        pub_date: None,
    });

    assert_eq!(item.title, "No Title");
    assert_eq!(item.url, "#");
    assert_eq!(item.source, "Unknown");
    assert_eq!(item.published_at, None);
    assert_eq!(item.display_date, "Recent");
}

#[test]
fn offset_timestamps_are_converted_to_utc() {
    let item = normalize(RawNewsItem::Enriched {
        title: Some("Morning wrap".to_string()),
        url: None,
        source: None,
        pub_date: Some("2026-02-26T11:48:04+02:00".to_string()),
    });

    assert_eq!(
        item.published_at,
        Some(Utc.with_ymd_and_hms(2026, 2, 26, 9, 48, 4).unwrap())
    );
    assert_eq!(item.display_date, "Feb 26, 09:48");
}

#[test]
fn unparseable_date_degrades_to_iso_prefix() {
    let item = normalize(RawNewsItem::Enriched {
        title: Some("Odd date".to_string()),
        url: None,
        source: None,
        pub_date: Some("2026-02-30T99:99:99Z".to_string()),
    });

    assert_eq!(item.published_at, None);
    assert_eq!(item.display_date, "2026-02-30");
}

#[test]
fn short_unparseable_date_is_kept_whole() {
    let item = normalize(RawNewsItem::Enriched {
        title: None,
        url: None,
        source: None,
        pub_date: Some("garbage".to_string()),
    });

    assert_eq!(item.published_at, None);
    assert_eq!(item.display_date, "garbage");
}

#[test]
fn empty_date_string_falls_back_to_label() {
    let item = normalize(RawNewsItem::Enriched {
        title: None,
        url: None,
        source: None,
        pub_date: Some(String::new()),
    });

    assert_eq!(item.published_at, None);
    assert_eq!(item.display_date, "Recent");
}

#[test]
fn flat_item_maps_fields_and_has_no_timestamp() {
    let item = normalize(RawNewsItem::Flat {
        title: Some("Flat headline".to_string()),
        url: Some("https://example.com/flat".to_string()),
        source: Some("Wire".to_string()),
    });

    assert_eq!(item.title, "Flat headline");
    assert_eq!(item.url, "https://example.com/flat");
    assert_eq!(item.source, "Wire");
    assert_eq!(item.published_at, None);
    assert_eq!(item.display_date, "Recent");
}

#[test]
fn flat_item_defaults() {
    let item = normalize(RawNewsItem::Flat {
        title: None,
        url: None,
        source: None,
    });

    assert_eq!(item.title, "No Title");
    assert_eq!(item.url, "#");
    assert_eq!(item.source, "Unknown");
}
