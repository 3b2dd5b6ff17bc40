// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search bar as a state machine.
//!
//! A `SearchSession` owns the current query and glues three things together:
//! the index (read-only), the page address (`History`), and the text input
//! (`SearchInput`). Every query change runs the same three steps in order:
//!
//! 1. evaluate the query against the index,
//! 2. mirror it into the URL (or strip the URL to its path when empty),
//! 3. hand focus back to the input so the next keystroke isn't lost when
//!    the result list re-renders.
//!
//! Mounting seeds the query from the URL, which is what makes a search
//! result page deep-linkable.

use crate::config::DEFAULT_QUERY_PARAM;
use crate::error::Result;
use crate::index::SearchIndex;
use crate::location::{query_param, sync_query, History};
use crate::scoring::ranking::Hit;
use crate::search::{is_searchable, resolve, search_hits};
use crate::summary::ItemSummary;
use crate::types::MatchResult;
use crate::utils::utf16_len;
use std::sync::Arc;

/// The text box the user types into.
pub trait SearchInput {
    /// Replace the displayed text (seeding from the URL, queries set from code).
    fn set_value(&mut self, value: &str);

    /// Collapse the selection to `position`, in UTF-16 code units.
    fn set_caret(&mut self, position: usize);

    fn focus(&mut self);
}

/// Headless input that records what the session asked of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryInput {
    pub value: String,
    pub caret: Option<usize>,
    pub focus_count: usize,
}

impl SearchInput for MemoryInput {
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_caret(&mut self, position: usize) {
        self.caret = Some(position);
    }

    fn focus(&mut self) {
        self.focus_count += 1;
    }
}

/// Query owner for one mounted search bar.
pub struct SearchSession<H: History, I: SearchInput> {
    index: Arc<SearchIndex>,
    history: H,
    input: I,
    param: String,
    query: String,
    hits: Vec<Hit>,
}

impl<H: History, I: SearchInput> SearchSession<H, I> {
    /// Mount using the default `q` parameter.
    pub fn mount(index: Arc<SearchIndex>, history: H, input: I) -> Result<Self> {
        Self::mount_with_param(index, history, input, DEFAULT_QUERY_PARAM)
    }

    /// Mount, seeding the query from `param` if the URL carries it.
    pub fn mount_with_param(
        index: Arc<SearchIndex>,
        history: H,
        input: I,
        param: &str,
    ) -> Result<Self> {
        let seed = query_param(&history.location()?, param).unwrap_or_default();

        let mut session = Self {
            index,
            history,
            input,
            param: param.to_string(),
            query: seed,
            hits: Vec::new(),
        };

        if !session.query.is_empty() {
            log::debug!("seeding search from URL: {:?}", session.query);
            session.input.set_value(&session.query);
        }
        session.refresh()?;
        session.input.set_caret(utf16_len(&session.query));
        Ok(session)
    }

    /// Apply a new query. Returns `false` (and does nothing) if it is unchanged.
    pub fn set_query(&mut self, value: impl Into<String>) -> Result<bool> {
        let value = value.into();
        if value == self.query {
            return Ok(false);
        }
        self.query = value;
        self.refresh()?;
        Ok(true)
    }

    /// Set the query from code rather than from the input's own edit. The
    /// input is rewritten first so its next edit starts from this text.
    pub fn replace_query(&mut self, value: impl Into<String>) -> Result<bool> {
        let value = value.into();
        self.input.set_value(&value);
        self.input.set_caret(utf16_len(&value));
        self.set_query(value)
    }

    pub fn clear(&mut self) -> Result<bool> {
        self.replace_query(String::new())
    }

    /// Swap in an index built from a new item set and re-evaluate.
    pub fn replace_index(&mut self, index: Arc<SearchIndex>) -> Result<()> {
        if Arc::ptr_eq(&self.index, &index) {
            return Ok(());
        }
        self.index = index;
        self.refresh()
    }

    fn refresh(&mut self) -> Result<()> {
        self.hits = search_hits(&self.index, &self.query);
        sync_query(&mut self.history, &self.param, &self.query)?;
        self.input.focus();
        Ok(())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> MatchResult<'_> {
        resolve(&self.index, &self.hits)
    }

    /// Card views for the current results, in rank order.
    pub fn summaries(&self) -> Vec<ItemSummary<'_>> {
        self.results()
            .iter()
            .map(|m| ItemSummary::from_match(m))
            .collect()
    }

    /// `Found 3 results for "astro"`, or `None` below the minimum query length.
    pub fn status_line(&self) -> Option<String> {
        if !is_searchable(&self.query, self.index.options().min_query_chars) {
            return None;
        }
        let count = self.hits.len();
        let plural = if count == 1 { "" } else { "s" };
        Some(format!(
            "Found {} result{} for \"{}\"",
            count, plural, self.query
        ))
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Tear down, handing the adapters back.
    pub fn into_parts(self) -> (H, I) {
        (self.history, self.input)
    }
}
