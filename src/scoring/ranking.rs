// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order:
//! 1. **Score** ascending (0.0 is perfect)
//! 2. **Index position** ascending, so equal scores keep content order
//!
//! `total_cmp` keeps the order total even if a NaN ever sneaks in, which makes
//! repeated evaluation of the same query byte-for-byte identical.

use std::cmp::Ordering;

/// Ranking key for one item: where it sits in the content list and how well it matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub ref_index: usize,
    pub score: f64,
}

/// Compare two hits for ranking. `Less` means `a` ranks first.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.ref_index.cmp(&b.ref_index))
}
