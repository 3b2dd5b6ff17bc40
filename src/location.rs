// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shareable search URLs.
//!
//! The current query lives in one query-string parameter (`q` by default) so
//! a result set can be linked to. Writes go through `History::replace`, never
//! a push: typing "astro" must not leave five history entries behind.
//!
//! Serialization follows `application/x-www-form-urlencoded`, the same rules
//! the browser's `URLSearchParams` uses (`a b` becomes `a+b`).
//!
//! Clearing the query replaces the URL with its bare path. Other parameters
//! and the fragment go with it.

use crate::error::{Error, Result};
use url::form_urlencoded;
use url::Url;

/// First value of `name` in the URL's query string, if any.
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Relative `path?query` with `name` set to `value`.
///
/// Mirrors `URLSearchParams::set`: the first occurrence is replaced in place,
/// later duplicates are removed, and a missing key is appended. An empty
/// `value` yields the bare path instead.
pub fn with_query_param(url: &Url, name: &str, value: &str) -> String {
    if value.is_empty() {
        return url.path().to_string();
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, existing) in url.query_pairs() {
        if key == name {
            if !replaced {
                pairs.push((key.into_owned(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), existing.into_owned()));
        }
    }
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("{}?{}", url.path(), query)
}

/// Non-navigating access to the page's address.
pub trait History {
    /// The current absolute location.
    fn location(&self) -> Result<Url>;

    /// Replace the current entry with `relative` (resolved against the
    /// current location). Must not create a new entry.
    fn replace(&mut self, relative: &str) -> Result<()>;
}

/// Write `value` into the `name` parameter of the current location.
///
/// An empty value strips the URL back to its path.
pub fn sync_query<H: History + ?Sized>(history: &mut H, name: &str, value: &str) -> Result<()> {
    let current = history.location()?;
    let target = with_query_param(&current, name, value);
    history.replace(&target)
}

/// In-memory history: one entry, replaced in place.
///
/// Used natively and in tests. `replacements()` counts writes so callers can
/// check that keystrokes never push.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    current: Url,
    replacements: usize,
}

impl MemoryHistory {
    pub fn new(href: &str) -> Result<Self> {
        Ok(Self {
            current: Url::parse(href)?,
            replacements: 0,
        })
    }

    pub fn href(&self) -> &str {
        self.current.as_str()
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// Entry count. Always one: replace never grows the stack.
    pub fn len(&self) -> usize {
        1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Result<Url> {
        Ok(self.current.clone())
    }

    fn replace(&mut self, relative: &str) -> Result<()> {
        let next = self.current.join(relative)?;
        if next.origin() != self.current.origin() {
            return Err(Error::History(format!(
                "refusing cross-origin replace to {}",
                next
            )));
        }
        self.current = next;
        self.replacements += 1;
        Ok(())
    }
}
