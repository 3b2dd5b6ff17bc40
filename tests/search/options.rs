//! Custom matcher options.

use crate::common::{blog_items, make_items};
use codelog::{
    is_searchable, search, Error, SearchIndex, SearchKey, SearchOptions, SiteConfig, WeightedKey,
};

#[test]
fn test_zero_threshold_requires_exact_prefix() {
    let options = SearchOptions {
        threshold: 0.0,
        ..SearchOptions::default()
    };
    let index = SearchIndex::build(blog_items(), options).unwrap();
    assert_eq!(search(&index, "dark").slugs(), vec!["dark-mode-done-right"]);
    assert!(search(&index, "drak").is_empty());
}

#[test]
fn test_title_only_keys_ignore_descriptions() {
    let options = SearchOptions {
        keys: vec![SearchKey::Title.into()],
        ..SearchOptions::default()
    };
    let index = SearchIndex::build(blog_items(), options).unwrap();
    assert!(!search(&index, "espresso")
        .slugs()
        .contains(&"cafe-culture-in-lisbon"));
    assert_eq!(index.records()[0].fields.len(), 1);
}

#[test]
fn test_ignore_location_finds_late_matches() {
    let title = format!("{} rust", "x".repeat(60));
    let items = make_items(&[(title.as_str(), "")]);

    let strict = SearchIndex::new(items.clone());
    assert!(search(&strict, "rust").is_empty());

    let relaxed = SearchIndex::build(
        items,
        SearchOptions {
            ignore_location: true,
            ..SearchOptions::default()
        },
    )
    .unwrap();
    assert_eq!(search(&relaxed, "rust").len(), 1);
}

#[test]
fn test_min_query_chars_is_configurable() {
    let options = SearchOptions {
        min_query_chars: 4,
        ..SearchOptions::default()
    };
    let index = SearchIndex::build(blog_items(), options).unwrap();
    assert!(search(&index, "css").is_empty());
    assert!(!search(&index, "css grid").is_empty());
}

#[test]
fn test_invalid_options_rejected() {
    let cases = [
        SearchOptions {
            threshold: 1.5,
            ..SearchOptions::default()
        },
        SearchOptions {
            keys: vec![],
            ..SearchOptions::default()
        },
        SearchOptions {
            keys: vec![WeightedKey {
                key: SearchKey::Title,
                weight: -1.0,
            }],
            ..SearchOptions::default()
        },
        SearchOptions {
            keys: vec![SearchKey::Title.into(), SearchKey::Title.into()],
            ..SearchOptions::default()
        },
    ];
    for options in cases {
        let err = SearchIndex::build(blog_items(), options).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)), "{:?}", err);
    }
}

#[test]
fn test_min_query_chars_cannot_drop_below_two() {
    for raw in [
        r#"{"search":{"minQueryChars":1}}"#,
        r#"{"search":{"minQueryChars":0}}"#,
    ] {
        let err = SiteConfig::from_json_str(raw).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)), "{}: {:?}", raw, err);
    }
    assert_eq!(
        SiteConfig::from_json_str(r#"{"search":{"minQueryChars":3}}"#)
            .unwrap()
            .search
            .options
            .min_query_chars,
        3
    );
}

#[test]
fn test_low_minimum_never_admits_short_queries() {
    assert!(!is_searchable("a", 1));
    assert!(!is_searchable("", 0));
    assert!(is_searchable("ab", 0));
    assert!(!is_searchable("abc", 4));
}
