// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for a blog, plus the small stateful bits around it.
//!
//! Everything runs in the reader's browser against a list of posts baked into
//! the page. No server, no network. The crate builds natively too, which is how
//! it gets tested and how the `codelog` CLI works.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│   index/     │────▶│   search/   │
//! │(ContentItem,│     │ (SearchIndex,│     │  (search,   │
//! │  PostMeta)  │     │  IndexCache) │     │ search_hits)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌─────────────┐
//!                     │  scoring/    │     │ session.rs  │──▶ location.rs
//!                     │  fuzzy/      │     │(SearchSession)   (History, ?q=)
//!                     └──────────────┘     └─────────────┘
//!
//!   theme.rs ◀── widgets.rs ──▶ events.rs     runtime/ (wasm feature)
//! ```
//!
//! # Usage
//!
//! ```
//! use codelog::{search, ContentItem, SearchIndex};
//! use std::sync::Arc;
//!
//! let items: Arc<[ContentItem]> = ContentItem::list_from_json(r#"[
//!     {"slug": "dark-mode", "title": "Dark mode done right",
//!      "data": {"title": "Dark mode done right", "pubDatetime": "2024-03-01T00:00:00Z"}}
//! ]"#).unwrap().into();
//!
//! let index = SearchIndex::new(items);
//! let results = search(&index, "dark");
//! assert_eq!(results.slugs(), vec!["dark-mode"]);
//!
//! // Below two characters nothing is searched.
//! assert!(search(&index, "d").is_empty());
//! ```

pub mod config;
mod error;
pub mod events;
pub mod fuzzy;
mod index;
pub mod location;
pub mod runtime;
pub mod scoring;
mod search;
pub mod session;
pub mod summary;
pub mod theme;
mod types;
mod utils;
pub mod widgets;

#[doc(hidden)]
pub mod testing;

pub use config::{SearchConfig, SearchKey, SearchOptions, SiteConfig, WeightedKey};
pub use error::{Error, Result};
pub use events::{EventHub, EventScope, Subscription};
pub use index::{field_value, IndexCache, IndexedField, IndexedRecord, SearchIndex};
pub use location::{History, MemoryHistory};
pub use scoring::ranking::Hit;
pub use search::{is_searchable, resolve, search, search_hits};
pub use session::{MemoryInput, SearchInput, SearchSession};
pub use summary::ItemSummary;
pub use theme::{Theme, ThemePresenter, ThemeState, ThemeStore};
pub use types::{ContentItem, MatchResult, PostMeta, SearchMatch};
pub use utils::{char_len, normalize, token_count, utf16_len};
pub use widgets::PageEvent;
