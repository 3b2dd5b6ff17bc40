//! Index builds keyed on item-set identity.

use crate::common::blog_items;
use codelog::{ContentItem, IndexCache, SearchOptions};
use std::sync::Arc;

#[test]
fn test_same_allocation_reuses_index() {
    let items = blog_items();
    let mut cache = IndexCache::new();
    let first = cache.get_or_build(&items);
    for _ in 0..5 {
        let again = cache.get_or_build(&items);
        assert!(Arc::ptr_eq(&first, &again));
    }
    assert_eq!(cache.builds(), 1);
}

#[test]
fn test_equal_content_new_allocation_rebuilds() {
    let items = blog_items();
    let copy: Arc<[ContentItem]> = items.iter().cloned().collect::<Vec<_>>().into();
    let mut cache = IndexCache::new();

    let a = cache.get_or_build(&items);
    let b = cache.get_or_build(&copy);
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(b.is_built_from(&copy));
    assert_eq!(cache.builds(), 2);
}

#[test]
fn test_clear_forces_rebuild() {
    let items = blog_items();
    let mut cache = IndexCache::new();
    cache.get_or_build(&items);
    cache.clear();
    cache.get_or_build(&items);
    assert_eq!(cache.builds(), 2);
}

#[test]
fn test_cache_options_apply() {
    let options = SearchOptions {
        threshold: 0.0,
        ..SearchOptions::default()
    };
    let mut cache = IndexCache::with_options(options).unwrap();
    let index = cache.get_or_build(&blog_items());
    assert_eq!(index.options().threshold, 0.0);

    let bad = SearchOptions {
        threshold: -0.1,
        ..SearchOptions::default()
    };
    assert!(IndexCache::with_options(bad).is_err());
}
