// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Scores run the "wrong" way round: 0.0 is a perfect match, 1.0 is hopeless.
//! A field score is an accuracy term (edits per pattern character) plus a
//! proximity term (how far from `location` the match starts). Field scores
//! combine multiplicatively per item, each raised to `weight × norm`, so
//!
//! - matching in more fields drives the product down (better),
//! - short fields (high norm) pull harder than long ones.
//!
//! # Constants
//!
//! | Name              | Value | Why this value |
//! |-------------------|-------|----------------|
//! | `MIN_FIELD_SCORE` | 0.001 | Fuzzy hits never tie with exact whole-field hits |
//! | `NORM_MANTISSA`   | 3     | Norms rounded so equal token counts compare equal |

use crate::config::SearchOptions;
use crate::fuzzy::{alignments_within, Alignment};

/// Floor for any non-exact field score.
pub const MIN_FIELD_SCORE: f64 = 0.001;

/// Decimal places kept in field-length norms.
pub const NORM_MANTISSA: i32 = 3;

/// Field-length norm: `1 / sqrt(tokens)`, rounded to three decimals.
///
/// A one-word title has norm 1.0; a forty-word description about 0.158.
pub fn field_norm(tokens: usize) -> f64 {
    if tokens == 0 {
        return 1.0;
    }
    let scale = 10f64.powi(NORM_MANTISSA);
    ((1.0 / (tokens as f64).sqrt()) * scale).round() / scale
}

/// Score one alignment: accuracy plus displacement from `location`.
pub fn alignment_score(alignment: &Alignment, pattern_len: usize, options: &SearchOptions) -> f64 {
    let accuracy = alignment.errors as f64 / pattern_len as f64;
    if options.ignore_location {
        return accuracy;
    }
    let proximity = alignment.start.abs_diff(options.location);
    if options.distance == 0 {
        return if proximity == 0 { accuracy } else { 1.0 };
    }
    accuracy + proximity as f64 / options.distance as f64
}

/// Best score of `pattern` against one field, or `None` if nothing passes.
///
/// Whole-field equality short-circuits to 0.0. Otherwise an alignment must
/// stay within the threshold and contain a run of at least
/// `min_match_char_length` exactly matched characters.
pub fn score_field(pattern: &[char], text: &[char], options: &SearchOptions) -> Option<f64> {
    if pattern.is_empty() || text.is_empty() {
        return None;
    }
    if pattern == text {
        return Some(0.0);
    }
    let max_errors = (options.threshold * pattern.len() as f64).floor() as usize;

    alignments_within(pattern, text, max_errors)
        .iter()
        .filter(|a| a.longest_run >= options.min_match_char_length)
        .map(|a| alignment_score(a, pattern.len(), options))
        .filter(|score| *score <= options.threshold)
        .min_by(|a, b| a.total_cmp(b))
        .map(|score| score.max(MIN_FIELD_SCORE))
}

/// Combine per-field scores into an item score.
///
/// Each entry is `(field_score, weight, norm)`. Exact hits (0.0) are nudged to
/// `f64::EPSILON` so the exponent still distinguishes weights.
pub fn combine_field_scores(fields: &[(f64, f64, f64)]) -> f64 {
    fields
        .iter()
        .map(|&(score, weight, norm)| {
            let base = if score == 0.0 { f64::EPSILON } else { score };
            base.powf(weight * norm)
        })
        .product()
}
