// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Per-field scores come from edit distance and match position; per-item
//! scores multiply the field scores together. Ranking then sorts ascending.

mod core;
pub mod ranking;

pub use core::*;
