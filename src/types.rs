// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of search: what goes in, what comes out.
//!
//! A `ContentItem` is one published post as the page-rendering side hands it
//! over. A `MatchResult` is the ranked answer to one query. Neither is ever
//! mutated after construction; the item set arrives once per page view and is
//! shared behind an `Arc<[ContentItem]>`.
//!
//! # Invariants
//!
//! - **SearchMatch**: `ref_index < items.len()` and `items[ref_index]` is `item`.
//!   The index position exists for stable list keys, never for ranking.
//!
//! - **MatchResult**: sorted by `score` ascending (0.0 is a perfect match),
//!   ties broken by `ref_index`. Empty for queries under two characters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;

// =============================================================================
// CONTENT TYPES
// =============================================================================

/// Frontmatter of a post, as produced by the content pipeline.
///
/// Only the fields the search surface and the summary card read are typed.
/// Everything else the pipeline attaches survives in `extra` so summaries can
/// hand it back to the card renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub pub_datetime: DateTime<Utc>,
    #[serde(default)]
    pub mod_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One published entry, keyed by its slug.
///
/// `title` and `description` are duplicated out of `data` by the pipeline;
/// those two top-level copies are what the index reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub data: PostMeta,
}

impl ContentItem {
    /// Parse a JSON array of items (the shape the page embeds for search).
    pub fn list_from_json(raw: &str) -> crate::Result<Vec<ContentItem>> {
        Ok(serde_json::from_str(raw)?)
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// One ranked hit.
///
/// Lower `score` is better: 0.0 means every matched field matched exactly.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch<'a> {
    pub item: &'a ContentItem,
    pub ref_index: usize,
    pub score: f64,
}

/// Ranked matches for a single query, best first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MatchResult<'a> {
    matches: Vec<SearchMatch<'a>>,
}

impl<'a> MatchResult<'a> {
    /// The result for a query that was never evaluated.
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    pub(crate) fn from_sorted(matches: Vec<SearchMatch<'a>>) -> Self {
        Self { matches }
    }

    /// Slugs in rank order. Handy for assertions and logs.
    pub fn slugs(&self) -> Vec<&'a str> {
        self.matches.iter().map(|m| m.item.slug.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<SearchMatch<'a>> {
        self.matches
    }
}

impl<'a> Deref for MatchResult<'a> {
    type Target = [SearchMatch<'a>];

    fn deref(&self) -> &Self::Target {
        &self.matches
    }
}

impl<'a> IntoIterator for MatchResult<'a> {
    type Item = SearchMatch<'a>;
    type IntoIter = std::vec::IntoIter<SearchMatch<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}
