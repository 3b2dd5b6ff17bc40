// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Light/dark theme as an explicit two-state value.
//!
//! The state holder owns the value; where it is stored (`ThemeStore`) and how
//! it is shown (`ThemePresenter`) are adapters handed in from outside. Every
//! operation ends by re-applying the value to the presenter, so the page can
//! never drift from the state after a view transition.
//!
//! # Load order
//!
//! 1. A valid value in the store
//! 2. The system color-scheme preference
//!
//! `load` never writes to the store: an untouched toggle keeps following the
//! system. `set`, `toggle` and `system_changed` persist.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Storage key the preference is kept under.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::Storage(format!("unknown theme '{}'", other))),
        }
    }
}

/// Where the preference persists between page loads.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reflects the current theme onto the page.
pub trait ThemePresenter {
    fn apply(&mut self, theme: Theme);
}

/// A `HashMap`-backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records every applied theme, newest last.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub applied: Vec<Theme>,
}

impl ThemePresenter for RecordingPresenter {
    fn apply(&mut self, theme: Theme) {
        self.applied.push(theme);
    }
}

/// Owner of the current theme.
pub struct ThemeState<S: ThemeStore, P: ThemePresenter> {
    theme: Theme,
    store: S,
    presenter: P,
}

impl<S: ThemeStore, P: ThemePresenter> ThemeState<S, P> {
    /// Resolve the initial theme and apply it.
    pub fn load(store: S, presenter: P, prefers_dark: bool) -> Result<Self> {
        let stored = match store.get(THEME_STORAGE_KEY)? {
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::warn!("ignoring stored theme: {}", err);
                    None
                }
            },
            None => None,
        };
        let theme = stored.unwrap_or_else(|| Theme::from_preference(prefers_dark));

        let mut state = Self {
            theme,
            store,
            presenter,
        };
        state.presenter.apply(theme);
        Ok(state)
    }

    /// Apply and persist. A storage failure is returned after the page has
    /// already switched; only persistence is lost.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.presenter.apply(theme);
        self.store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// The OS switched color scheme; follow it.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Result<()> {
        self.set(Theme::from_preference(prefers_dark))
    }

    /// Re-apply without changing anything (after a view transition).
    pub fn reapply(&mut self) {
        self.presenter.apply(self.theme);
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}
