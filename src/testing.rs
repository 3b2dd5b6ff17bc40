//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ContentItem, PostMeta};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Lowercase, hyphen-joined slug of a title.
pub fn slug_of(title: &str) -> String {
    title
        .split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Create a content item with a fixed publish date.
pub fn make_item(slug: &str, title: &str, description: &str) -> ContentItem {
    ContentItem {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        data: PostMeta {
            title: title.to_string(),
            description: description.to_string(),
            pub_datetime: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            mod_datetime: None,
            author: None,
            tags: vec![],
            featured: false,
            draft: false,
            extra: BTreeMap::new(),
        },
    }
}

/// Create an item set from `(title, description)` pairs, slugs derived from titles.
pub fn make_items(entries: &[(&str, &str)]) -> Arc<[ContentItem]> {
    entries
        .iter()
        .map(|(title, description)| make_item(&slug_of(title), title, description))
        .collect::<Vec<_>>()
        .into()
}
