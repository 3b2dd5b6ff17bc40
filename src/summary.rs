// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the result list hands to the card renderer.
//!
//! The card takes `{href, frontmatter}`; the list additionally needs a key that
//! stays stable while results reorder, and the card shows one date: the
//! modification date when it is newer than the publish date.

use crate::types::{PostMeta, SearchMatch};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Href of a post page.
pub fn post_href(slug: &str) -> String {
    format!("/posts/{}/", slug)
}

/// The date a card should show.
pub fn display_datetime(meta: &PostMeta) -> DateTime<Utc> {
    match meta.mod_datetime {
        Some(modified) if modified > meta.pub_datetime => modified,
        _ => meta.pub_datetime,
    }
}

/// One result card's input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary<'a> {
    pub href: String,
    pub frontmatter: &'a PostMeta,
    /// List key: `{ref_index}-{slug}`.
    pub key: String,
    pub datetime: DateTime<Utc>,
}

impl<'a> ItemSummary<'a> {
    pub fn from_match(m: &SearchMatch<'a>) -> Self {
        Self {
            href: post_href(&m.item.slug),
            frontmatter: &m.item.data,
            key: format!("{}-{}", m.ref_index, m.item.slug),
            datetime: display_datetime(&m.item.data),
        }
    }
}
