//! Ordering guarantees between results.

use crate::common::{assert_ranked, blog_index, make_item, make_items};
use codelog::{search, ContentItem, SearchIndex};
use std::sync::Arc;

fn index_of(items: Vec<ContentItem>) -> SearchIndex {
    SearchIndex::new(items.into())
}

#[test]
fn test_exact_title_beats_prefix() {
    let index = SearchIndex::new(make_items(&[("Rust ownership", ""), ("Rust", "")]));
    assert_eq!(search(&index, "rust").slugs(), vec!["rust", "rust-ownership"]);
}

#[test]
fn test_earlier_match_beats_later() {
    let index = SearchIndex::new(make_items(&[("Learning astro", ""), ("Astro tips", "")]));
    let results = search(&index, "astro");
    assert_eq!(results.slugs(), vec!["astro-tips", "learning-astro"]);
    assert!(results[0].score < results[1].score);
}

#[test]
fn test_matching_both_fields_beats_one() {
    let index = SearchIndex::new(make_items(&[
        ("Astro basics", "nothing related"),
        ("Astro basics!", "astro for beginners"),
    ]));
    let results = search(&index, "astro");
    assert_eq!(results[0].ref_index, 1);
    assert_eq!(results[1].ref_index, 0);
}

#[test]
fn test_ties_keep_input_order() {
    let index = index_of(vec![
        make_item("first", "Same title", ""),
        make_item("second", "Same title", ""),
        make_item("third", "Same title", ""),
    ]);
    let results = search(&index, "same");
    assert_eq!(results.slugs(), vec!["first", "second", "third"]);
    assert_eq!(results[0].score, results[2].score);
}

#[test]
fn test_scores_ascend_for_many_queries() {
    let index = blog_index();
    for query in ["ar", "the", "mode", "css grid", "in practice", "rust tears"] {
        assert_ranked(&search(&index, query));
    }
}

#[test]
fn test_scores_are_bounded() {
    let index = blog_index();
    for m in search(&index, "astro").iter() {
        assert!(m.score > 0.0 && m.score <= 1.0, "{} scored {}", m.item.slug, m.score);
    }
}

#[test]
fn test_reordering_items_reorders_ties_only() {
    let items: Vec<ContentItem> = blog_index().items().iter().rev().cloned().collect();
    let reversed = SearchIndex::new(Arc::from(items));
    let results = search(&reversed, "dark");
    assert_eq!(results[0].item.slug, "dark-mode-done-right");
}
