// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching: where could the pattern sit inside the text?
//!
//! Classic edit distance compares two whole strings. Search wants something
//! looser: the pattern may start and end anywhere in the text. Seeding the
//! first DP row with zeros makes leading text free, and reading the last row
//! at every column makes trailing text free. Each column whose last-row value
//! fits the error budget is one candidate alignment; a traceback recovers where
//! it starts and how long its longest exactly-matched run is.
//!
//! Field values are titles and one-paragraph descriptions, so the full
//! `(m + 1) × (n + 1)` table is a few thousand cells at worst.

/// One way of laying the pattern over a stretch of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Edits needed to turn `text[start..end]` into the pattern.
    pub errors: usize,
    /// First text position covered (in chars).
    pub start: usize,
    /// One past the last text position covered (in chars).
    pub end: usize,
    /// Longest run of consecutive exactly-matched characters.
    pub longest_run: usize,
}

/// Every alignment of `pattern` inside `text` with at most `max_errors` edits.
///
/// One alignment per end column, in increasing `end` order. An empty pattern
/// aligns nowhere.
pub fn alignments_within(pattern: &[char], text: &[char], max_errors: usize) -> Vec<Alignment> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return Vec::new();
    }
    // Length lower bound: even a perfect overlap leaves m - n pattern chars unmatched
    if m > n && m - n > max_errors {
        return Vec::new();
    }

    let width = n + 1;
    let mut dp = vec![0usize; (m + 1) * width];
    for i in 1..=m {
        dp[i * width] = i;
        for j in 1..=n {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            let diag = dp[(i - 1) * width + (j - 1)] + cost;
            let up = dp[(i - 1) * width + j] + 1;
            let left = dp[i * width + (j - 1)] + 1;
            dp[i * width + j] = diag.min(up).min(left);
        }
    }

    (1..=n)
        .filter(|&j| dp[m * width + j] <= max_errors)
        .map(|j| trace_back(&dp, width, pattern, text, j))
        .collect()
}

/// Walk from `(m, end)` back to row zero, preferring diagonal moves.
fn trace_back(dp: &[usize], width: usize, pattern: &[char], text: &[char], end: usize) -> Alignment {
    let mut i = pattern.len();
    let mut j = end;
    let mut run = 0;
    let mut longest_run = 0;

    while i > 0 {
        let here = dp[i * width + j];
        if j > 0 {
            let same = pattern[i - 1] == text[j - 1];
            let cost = usize::from(!same);
            if here == dp[(i - 1) * width + (j - 1)] + cost {
                if same {
                    run += 1;
                    longest_run = longest_run.max(run);
                } else {
                    run = 0;
                }
                i -= 1;
                j -= 1;
                continue;
            }
        }
        run = 0;
        if here == dp[(i - 1) * width + j] + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    Alignment {
        errors: dp[pattern.len() * width + end],
        start: j,
        end,
        longest_run,
    }
}
