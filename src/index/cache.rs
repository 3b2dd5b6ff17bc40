// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized index construction.
//!
//! The item set is static per page view, so the index is built on first use
//! and reused until a *different* item set shows up. "Different" means a
//! different allocation (`Arc::ptr_eq`), never a deep comparison: two equal
//! lists behind two `Arc`s still trigger a rebuild.

use super::SearchIndex;
use crate::config::SearchOptions;
use crate::error::Result;
use crate::types::ContentItem;
use std::sync::Arc;

/// Lazily built, identity-keyed search index.
#[derive(Debug, Default)]
pub struct IndexCache {
    options: SearchOptions,
    current: Option<Arc<SearchIndex>>,
    builds: usize,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SearchOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            current: None,
            builds: 0,
        })
    }

    /// The index for `items`, building it only if `items` is a new allocation.
    pub fn get_or_build(&mut self, items: &Arc<[ContentItem]>) -> Arc<SearchIndex> {
        if let Some(index) = &self.current {
            if index.is_built_from(items) {
                return Arc::clone(index);
            }
            log::debug!("item set changed identity; rebuilding search index");
        }

        let index = Arc::new(SearchIndex::build_unchecked(
            Arc::clone(items),
            self.options.clone(),
        ));
        self.builds += 1;
        self.current = Some(Arc::clone(&index));
        index
    }

    /// How many times an index has been built. Useful for asserting memoization.
    pub fn builds(&self) -> usize {
        self.builds
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
