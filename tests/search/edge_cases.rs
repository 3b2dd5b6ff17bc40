//! Inputs at the boundaries.

use crate::common::{blog_index, make_items};
use codelog::{is_searchable, search, SearchIndex};

#[test]
fn test_short_queries_are_not_evaluated() {
    let index = blog_index();
    assert!(search(&index, "").is_empty());
    assert!(search(&index, "d").is_empty());
    assert!(search(&index, "é").is_empty());
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // Two bytes, one character
    assert!(!is_searchable("é", 2));
    assert!(is_searchable("éa", 2));
    assert!(is_searchable("🦀🦀", 2));
}

#[test]
fn test_whitespace_only_query_is_empty() {
    let index = blog_index();
    assert!(search(&index, "   ").is_empty());
    assert!(search(&index, "\t\n").is_empty());
}

#[test]
fn test_empty_index() {
    let index = SearchIndex::new(make_items(&[]));
    assert!(index.is_empty());
    assert!(search(&index, "anything").is_empty());
}

#[test]
fn test_empty_fields_are_skipped() {
    let index = SearchIndex::new(make_items(&[("Only a title", "")]));
    assert_eq!(index.records()[0].fields.len(), 1);
    assert_eq!(search(&index, "title").len(), 1);
}

#[test]
fn test_pattern_longer_than_every_field() {
    let index = SearchIndex::new(make_items(&[("Go", "Hi")]));
    assert!(search(&index, "a query far longer than any field").is_empty());
}

#[test]
fn test_odd_input_does_not_panic() {
    let index = blog_index();
    let long = "a".repeat(500);
    for query in ["🦀 rust", "((", "%%%", "\u{0301}\u{0301}", long.as_str()] {
        let _ = search(&index, query);
    }
}
