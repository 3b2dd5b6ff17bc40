// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The matcher here only answers "where could this pattern sit, and at what
//! cost". Turning costs into scores is the job of `scoring`.

mod levenshtein;

pub use levenshtein::*;
