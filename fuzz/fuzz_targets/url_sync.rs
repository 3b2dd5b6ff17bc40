// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query-string sync.
//!
//! Whatever the user types, writing it into `?q=` and reading it back must
//! give the same string, and must keep the page on the same origin and path.

#![no_main]

use codelog::location::{query_param, sync_query};
use codelog::MemoryHistory;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: String| {
    let Ok(mut history) = MemoryHistory::new("https://blog.test/search/?page=2") else {
        return;
    };
    sync_query(&mut history, "q", &query).expect("same-origin replace");

    let url = url::Url::parse(history.href()).expect("valid href");
    assert_eq!(url.path(), "/search/");
    if query.is_empty() {
        assert_eq!(url.query(), None);
    } else {
        assert_eq!(query_param(&url, "q").as_deref(), Some(query.as_str()));
        assert_eq!(query_param(&url, "page").as_deref(), Some("2"));
    }
});
