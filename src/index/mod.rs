// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: everything search needs, computed once per item set.
//!
//! For every item and every configured key the index keeps the normalized
//! field text (as chars, ready for the DP) and its field-length norm. Blank
//! fields are skipped entirely, they can never match.
//!
//! Construction is pure and deterministic: same items and options in, same
//! index out. Nothing here is mutated after `build` returns.

mod cache;

pub use cache::IndexCache;

use crate::config::{SearchKey, SearchOptions};
use crate::error::Result;
use crate::scoring::field_norm;
use crate::types::ContentItem;
use crate::utils::{normalize, token_count};
use std::sync::Arc;

/// One normalized, searchable field value.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedField {
    pub key: SearchKey,
    /// Normalized weight of `key` (all weights sum to 1).
    pub weight: f64,
    pub norm: f64,
    pub chars: Vec<char>,
}

/// The searchable fields of one item, in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRecord {
    pub ref_index: usize,
    pub fields: Vec<IndexedField>,
}

/// Read-only fuzzy index over a fixed item set.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Arc<[ContentItem]>,
    records: Vec<IndexedRecord>,
    options: SearchOptions,
}

impl SearchIndex {
    /// Build with the default options.
    pub fn new(items: Arc<[ContentItem]>) -> Self {
        Self::build_unchecked(items, SearchOptions::default())
    }

    /// Build with custom options, rejecting options the scorer can't use.
    pub fn build(items: Arc<[ContentItem]>, options: SearchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build_unchecked(items, options))
    }

    fn build_unchecked(items: Arc<[ContentItem]>, options: SearchOptions) -> Self {
        let keys = options.normalized_keys();
        let records: Vec<IndexedRecord> = items
            .iter()
            .enumerate()
            .map(|(ref_index, item)| IndexedRecord {
                ref_index,
                fields: keys
                    .iter()
                    .filter_map(|k| {
                        let normalized = normalize(field_value(item, k.key));
                        if normalized.is_empty() {
                            return None;
                        }
                        Some(IndexedField {
                            key: k.key,
                            weight: k.weight,
                            norm: field_norm(token_count(&normalized)),
                            chars: normalized.chars().collect(),
                        })
                    })
                    .collect(),
            })
            .collect();

        log::debug!(
            "built search index: {} items, {} fields",
            records.len(),
            records.iter().map(|r| r.fields.len()).sum::<usize>()
        );

        Self {
            items,
            records,
            options,
        }
    }

    pub fn items(&self) -> &Arc<[ContentItem]> {
        &self.items
    }

    pub fn records(&self) -> &[IndexedRecord] {
        &self.records
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Was this index built from exactly this item set (same allocation)?
    pub fn is_built_from(&self, items: &Arc<[ContentItem]>) -> bool {
        Arc::ptr_eq(&self.items, items)
    }
}

/// Raw text of a key on an item.
pub fn field_value(item: &ContentItem, key: SearchKey) -> &str {
    match key {
        SearchKey::Title => &item.title,
        SearchKey::Description => &item.description,
    }
}
