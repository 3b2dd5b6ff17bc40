// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: where the rubber meets the road.
//!
//! A query shorter than `min_query_chars` never reaches the index; two-letter
//! minimums keep single keystrokes from lighting up half the blog. Anything
//! longer is normalized the same way the fields were, scored against every
//! indexed field, and sorted best-first.
//!
//! Evaluation is synchronous and allocation-light. Each keystroke simply
//! evaluates again; there is nothing in flight to cancel.

use crate::config::DEFAULT_MIN_QUERY_CHARS;
use crate::index::SearchIndex;
use crate::scoring::ranking::{compare_hits, Hit};
use crate::scoring::{combine_field_scores, score_field};
use crate::types::{MatchResult, SearchMatch};
use crate::utils::{char_len, normalize};

/// Does this query clear the minimum length? Counted in chars of the raw input.
/// The minimum never drops below `DEFAULT_MIN_QUERY_CHARS`.
pub fn is_searchable(query: &str, min_query_chars: usize) -> bool {
    char_len(query) >= min_query_chars.max(DEFAULT_MIN_QUERY_CHARS)
}

/// Rank every item against `query`, best first.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> MatchResult<'a> {
    resolve(index, &search_hits(index, query))
}

/// Like `search`, but returns bare `(ref_index, score)` pairs.
///
/// Callers that outlive a borrow of the index (the session) keep these and
/// resolve them on demand.
pub fn search_hits(index: &SearchIndex, query: &str) -> Vec<Hit> {
    let options = index.options();
    if !is_searchable(query, options.min_query_chars) {
        return Vec::new();
    }

    let pattern: Vec<char> = normalize(query).chars().collect();
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<Hit> = index
        .records()
        .iter()
        .filter_map(|record| {
            let matched: Vec<(f64, f64, f64)> = record
                .fields
                .iter()
                .filter_map(|field| {
                    score_field(&pattern, &field.chars, options)
                        .map(|score| (score, field.weight, field.norm))
                })
                .collect();
            if matched.is_empty() {
                return None;
            }
            Some(Hit {
                ref_index: record.ref_index,
                score: combine_field_scores(&matched),
            })
        })
        .collect();

    hits.sort_by(compare_hits);
    log::trace!("query {:?}: {} hits", query, hits.len());
    hits
}

/// Attach items to hits. Hits pointing past the item set are dropped.
pub fn resolve<'a>(index: &'a SearchIndex, hits: &[Hit]) -> MatchResult<'a> {
    let items = index.items();
    MatchResult::from_sorted(
        hits.iter()
            .filter_map(|hit| {
                items.get(hit.ref_index).map(|item| SearchMatch {
                    item,
                    ref_index: hit.ref_index,
                    score: hit.score,
                })
            })
            .collect(),
    )
}
