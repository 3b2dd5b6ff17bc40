//! Shared test utilities and fixtures.

#![allow(dead_code)]

use codelog::{ContentItem, MemoryHistory, MemoryInput, SearchIndex, SearchSession};
use std::sync::Arc;

pub use codelog::testing::{make_item, make_items};

/// A small blog, in the JSON shape the page embeds.
pub const BLOG_JSON: &str = r#"[
  {
    "slug": "dark-mode-done-right",
    "title": "Dark mode done right",
    "description": "Persisting a theme toggle with localStorage",
    "data": {
      "title": "Dark mode done right",
      "description": "Persisting a theme toggle with localStorage",
      "pubDatetime": "2024-02-10T08:00:00Z",
      "modDatetime": "2024-05-01T12:00:00Z",
      "tags": ["css", "astro"],
      "featured": true
    }
  },
  {
    "slug": "rust-ownership",
    "title": "Rust ownership",
    "description": "Borrowing without tears",
    "data": {
      "title": "Rust ownership",
      "description": "Borrowing without tears",
      "pubDatetime": "2024-03-03T10:15:00Z",
      "tags": ["rust"]
    }
  },
  {
    "slug": "astro-islands-explained",
    "title": "Astro islands explained",
    "description": "Partial hydration in practice",
    "data": {
      "title": "Astro islands explained",
      "description": "Partial hydration in practice",
      "pubDatetime": "2023-11-20T09:00:00Z",
      "tags": ["astro"]
    }
  },
  {
    "slug": "writing-a-tokenizer",
    "title": "Writing a tokenizer",
    "description": "Hand-rolled lexing for a tiny language",
    "data": {
      "title": "Writing a tokenizer",
      "description": "Hand-rolled lexing for a tiny language",
      "pubDatetime": "2023-08-14T18:45:00Z",
      "draft": false,
      "tags": ["compilers", "rust"]
    }
  },
  {
    "slug": "cafe-culture-in-lisbon",
    "title": "Café culture in Lisbon",
    "description": "Notes from a week of espresso",
    "data": {
      "title": "Café culture in Lisbon",
      "description": "Notes from a week of espresso",
      "pubDatetime": "2023-06-02T07:30:00Z",
      "ogImage": "/assets/lisbon.jpg"
    }
  },
  {
    "slug": "understanding-css-grid",
    "title": "Understanding CSS grid",
    "description": "Tracks, areas and the fr unit",
    "data": {
      "title": "Understanding CSS grid",
      "description": "Tracks, areas and the fr unit",
      "pubDatetime": "2022-12-12T12:00:00Z",
      "tags": ["css"]
    }
  }
]"#;

pub const SEARCH_PAGE: &str = "https://blog.test/search/";

pub fn blog_items() -> Arc<[ContentItem]> {
    ContentItem::list_from_json(BLOG_JSON)
        .expect("fixture parses")
        .into()
}

pub fn blog_index() -> Arc<SearchIndex> {
    Arc::new(SearchIndex::new(blog_items()))
}

/// Mount a search bar at `href` over the fixture blog.
pub fn mount(href: &str) -> SearchSession<MemoryHistory, MemoryInput> {
    SearchSession::mount(
        blog_index(),
        MemoryHistory::new(href).expect("valid href"),
        MemoryInput::default(),
    )
    .expect("mount succeeds")
}

/// Results must be sorted by score, ties by original position.
pub fn assert_ranked(results: &[codelog::SearchMatch<'_>]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score < b.score || (a.score == b.score && a.ref_index < b.ref_index),
            "out of order: {} ({}) before {} ({})",
            a.item.slug,
            a.score,
            b.item.slug,
            b.score
        );
    }
}
