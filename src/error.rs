// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the library, the CLI and the browser bindings.
//!
//! Searching itself never fails. Everything here comes from the edges:
//! loading config, parsing content exports, and talking to the browser.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Search options that would make the scorer meaningless.
    #[error("invalid search options: {0}")]
    InvalidOptions(String),

    /// A config file that parsed but carries values we refuse.
    #[error("invalid config: {0}")]
    Config(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The history adapter refused a replace (e.g. a cross-origin URL).
    #[error("history update failed: {0}")]
    History(String),

    /// The theme storage adapter failed to read or write.
    #[error("theme storage failed: {0}")]
    Storage(String),
}
