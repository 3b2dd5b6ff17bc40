// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary posts, arbitrary query. Search must not panic, must only return
//! items that exist, and must keep results sorted.

#![no_main]

use arbitrary::Arbitrary;
use codelog::testing::make_item;
use codelog::{search, ContentItem, SearchIndex};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
struct Input {
    posts: Vec<(String, String)>,
    query: String,
}

fuzz_target!(|input: Input| {
    let items: Arc<[ContentItem]> = input
        .posts
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, (title, description))| make_item(&format!("p{}", i), title, description))
        .collect::<Vec<_>>()
        .into();
    let index = SearchIndex::new(items);
    let results = search(&index, &input.query);

    for m in results.iter() {
        assert!(m.ref_index < index.len());
        assert!(m.score > 0.0 && m.score <= 1.0);
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].score < pair[1].score
                || (pair[0].score == pair[1].score && pair[0].ref_index < pair[1].ref_index)
        );
    }
});
