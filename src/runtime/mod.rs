// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser runtime.
//!
//! Natively the crate runs against the in-memory adapters (`MemoryHistory`,
//! `MemoryInput`, `MemoryStore`). With the `wasm` feature, `browser` supplies
//! the DOM-backed ones and `wasm` exposes the page bindings.

#[cfg(feature = "wasm")]
pub mod browser;

#[cfg(feature = "wasm")]
pub mod wasm;
