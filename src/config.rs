// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site and search configuration.
//!
//! Everything has a default, so an empty `{}` is a valid config. The defaults
//! are the values the blog ships with: fuzzy matching over title and
//! description at a permissive 0.5 threshold, two-character minimum, and the
//! query mirrored into `?q=`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default URL query-string parameter carrying the search term.
pub const DEFAULT_QUERY_PARAM: &str = "q";

/// Queries shorter than this (in chars) produce no results. Options may raise
/// the minimum, never lower it.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

// =============================================================================
// SEARCH OPTIONS
// =============================================================================

/// A searchable field of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKey {
    Title,
    Description,
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKey::Title => write!(f, "title"),
            SearchKey::Description => write!(f, "description"),
        }
    }
}

/// A field plus its relative weight. Weights are normalized to sum to 1.
///
/// Deserializes from `{"key": "title", "weight": 2}` or a bare `"title"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "KeySpec")]
pub struct WeightedKey {
    pub key: SearchKey,
    pub weight: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeySpec {
    Bare(SearchKey),
    Weighted {
        key: SearchKey,
        #[serde(default = "default_weight")]
        weight: f64,
    },
}

impl From<KeySpec> for WeightedKey {
    fn from(raw: KeySpec) -> Self {
        match raw {
            KeySpec::Bare(key) => key.into(),
            KeySpec::Weighted { key, weight } => WeightedKey { key, weight },
        }
    }
}

impl From<SearchKey> for WeightedKey {
    fn from(key: SearchKey) -> Self {
        WeightedKey {
            key,
            weight: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

/// Matching tolerance and scope.
///
/// `threshold` bounds the combined score of a field match:
/// `errors / pattern_len + |start - location| / distance`. At 0.0 only
/// perfect matches at `location` pass; at 1.0 nearly anything does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub keys: Vec<WeightedKey>,
    pub threshold: f64,
    pub min_match_char_length: usize,
    pub location: usize,
    pub distance: usize,
    pub ignore_location: bool,
    pub min_query_chars: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: vec![SearchKey::Title.into(), SearchKey::Description.into()],
            threshold: 0.5,
            min_match_char_length: 2,
            location: 0,
            distance: 100,
            ignore_location: false,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

impl SearchOptions {
    /// Reject options the scorer cannot give a meaning to.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidOptions(format!(
                "threshold {} outside [0, 1]",
                self.threshold
            )));
        }
        if self.keys.is_empty() {
            return Err(Error::InvalidOptions("no search keys".to_string()));
        }
        for key in &self.keys {
            if !key.weight.is_finite() || key.weight <= 0.0 {
                return Err(Error::InvalidOptions(format!(
                    "weight {} for key '{}' must be positive",
                    key.weight, key.key
                )));
            }
        }
        for (i, key) in self.keys.iter().enumerate() {
            if self.keys[..i].iter().any(|k| k.key == key.key) {
                return Err(Error::InvalidOptions(format!(
                    "key '{}' listed twice",
                    key.key
                )));
            }
        }
        if self.min_match_char_length == 0 {
            return Err(Error::InvalidOptions(
                "minMatchCharLength must be at least 1".to_string(),
            ));
        }
        if self.min_query_chars < DEFAULT_MIN_QUERY_CHARS {
            return Err(Error::InvalidOptions(format!(
                "minQueryChars {} below the minimum of {}",
                self.min_query_chars, DEFAULT_MIN_QUERY_CHARS
            )));
        }
        Ok(())
    }

    /// Keys with weights scaled to sum to 1.
    pub(crate) fn normalized_keys(&self) -> Vec<WeightedKey> {
        let total: f64 = self.keys.iter().map(|k| k.weight).sum();
        self.keys
            .iter()
            .map(|k| WeightedKey {
                key: k.key,
                weight: k.weight / total,
            })
            .collect()
    }
}

// =============================================================================
// SITE CONFIG
// =============================================================================

/// Search surface settings: matcher options plus the URL parameter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(flatten)]
    pub options: SearchOptions,
    pub param: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            options: SearchOptions::default(),
            param: DEFAULT_QUERY_PARAM.to_string(),
        }
    }
}

/// Site-wide settings. Mirrors the blog's `SITE` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub website: String,
    pub author: String,
    pub title: String,
    pub desc: String,
    pub post_per_page: usize,
    pub light_and_dark_mode: bool,
    pub search: SearchConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            website: "https://codelog.yy-dev.top".to_string(),
            author: "Eugene Yakhnenko".to_string(),
            title: "CodeLog".to_string(),
            desc: String::new(),
            post_per_page: 10,
            light_and_dark_mode: true,
            search: SearchConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.search.options.validate()?;
        if self.search.param.is_empty() {
            return Err(Error::Config("search.param must not be empty".to_string()));
        }
        if self.post_per_page == 0 {
            return Err(Error::Config("postPerPage must be at least 1".to_string()));
        }
        Ok(())
    }
}
