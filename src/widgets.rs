// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small page behaviors: reading progress, heading anchors, code copy buttons,
//! the mobile menu toggle, and scroll-to-top after a view transition.
//!
//! Each is a pure state type plus a `PageEvent` handler, so a page wires them
//! with `EventScope::bind` and re-running setup never stacks handlers.

use crate::error::Result;
use crate::events::{EventHub, EventScope};
use crate::theme::{ThemePresenter, ThemeState, ThemeStore};
use std::cell::RefCell;
use std::rc::Rc;

/// Events the page forwards from the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    Scroll {
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
    },
    /// A client-side navigation finished swapping in the new document.
    AfterSwap,
    ThemeButtonClick,
    MenuButtonClick,
    ColorSchemeChange {
        dark: bool,
    },
}

// ============================================================================
// READING PROGRESS
// ============================================================================

/// The bar is injected by the page code; article markup doesn't carry it.
pub const PROGRESS_CONTAINER_CLASS: &str = "progress-container";
pub const PROGRESS_BAR_CLASS: &str = "progress-bar";
pub const PROGRESS_BAR_ID: &str = "myBar";

/// Percent of the page scrolled past, in `[0, 100]`.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if !(scrollable > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

// ============================================================================
// HEADING ANCHORS
// ============================================================================

pub const HEADING_LINK_CLASS: &str = "heading-link";
/// Added to the heading so its anchor can show on hover.
pub const HEADING_GROUP_CLASS: &str = "group";

/// `<a class="heading-link" href="#id"><span aria-hidden="true">#</span></a>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingAnchor {
    pub href: String,
    /// Text of the inner span, hidden from screen readers.
    pub label: &'static str,
}

/// Anchor for an `h{level}` heading, or `None` for `h1` and id-less headings.
pub fn heading_anchor(level: u8, id: Option<&str>) -> Option<HeadingAnchor> {
    if !(2..=6).contains(&level) {
        return None;
    }
    match id {
        Some(id) if !id.is_empty() => Some(HeadingAnchor {
            href: format!("#{}", id),
            label: "#",
        }),
        _ => None,
    }
}

// ============================================================================
// COPY BUTTON
// ============================================================================

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied";
/// How long `Copied` stays up, in milliseconds.
pub const COPIED_RESET_MS: f64 = 450.0;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Label state of one code block's copy button.
///
/// Each successful click starts a new generation; the page's revert timer
/// hands its generation back to `expire`, so a timer left over from an
/// earlier click never cuts a newer "Copied" short.
#[derive(Debug, Clone, Default)]
pub struct CopyButton {
    copied: bool,
    generation: u64,
}

impl CopyButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `code` and flip the label. Returns the generation the revert
    /// timer should expire after `COPIED_RESET_MS`. On clipboard failure
    /// the label stays.
    pub fn click<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, code: &str) -> Result<u64> {
        clipboard.write_text(code)?;
        self.copied = true;
        self.generation += 1;
        Ok(self.generation)
    }

    /// Revert to `Copy` if `generation` is still the latest click.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    pub fn label(&self) -> &'static str {
        if self.copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

// ============================================================================
// MENU TOGGLE
// ============================================================================

pub const MENU_BUTTON_ID: &str = "menu-btn";
/// The list the button shows and hides.
pub const MENU_ID: &str = "menu";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// `(aria-expanded, aria-hidden)` attribute values.
    pub fn aria(&self) -> (&'static str, &'static str) {
        if self.expanded {
            ("true", "false")
        } else {
            ("false", "true")
        }
    }
}

// ============================================================================
// WIRING
// ============================================================================

/// Page-level widget state, updated from `PageEvent`s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub progress: f64,
    pub menu: MenuState,
    /// Number of scroll-to-top requests issued.
    pub scroll_resets: usize,
}

/// Bind the page widgets under fixed keys. Calling again rebinds, never stacks.
pub fn bind_page(
    scope: &mut EventScope,
    hub: &EventHub<PageEvent>,
    state: Rc<RefCell<PageState>>,
) {
    let s = Rc::clone(&state);
    scope.bind(
        "progress-bar",
        hub.subscribe(move |event| {
            if let PageEvent::Scroll {
                scroll_top,
                scroll_height,
                client_height,
            } = *event
            {
                s.borrow_mut().progress = scroll_progress(scroll_top, scroll_height, client_height);
            }
        }),
    );

    let s = Rc::clone(&state);
    scope.bind(
        "menu-btn",
        hub.subscribe(move |event| {
            if *event == PageEvent::MenuButtonClick {
                s.borrow_mut().menu.toggle();
            }
        }),
    );

    scope.bind(
        "after-swap",
        hub.subscribe(move |event| {
            if *event == PageEvent::AfterSwap {
                let mut st = state.borrow_mut();
                st.scroll_resets += 1;
                st.progress = 0.0;
            }
        }),
    );
}

/// Bind the theme button and the OS color-scheme listener.
pub fn bind_theme<S, P>(
    scope: &mut EventScope,
    hub: &EventHub<PageEvent>,
    theme: Rc<RefCell<ThemeState<S, P>>>,
) where
    S: ThemeStore + 'static,
    P: ThemePresenter + 'static,
{
    let t = Rc::clone(&theme);
    scope.bind(
        "theme-btn",
        hub.subscribe(move |event| {
            if *event == PageEvent::ThemeButtonClick {
                if let Err(err) = t.borrow_mut().toggle() {
                    log::warn!("theme toggle failed: {}", err);
                }
            }
        }),
    );

    let t = Rc::clone(&theme);
    scope.bind(
        "color-scheme",
        hub.subscribe(move |event| {
            if let PageEvent::ColorSchemeChange { dark } = *event {
                if let Err(err) = t.borrow_mut().system_changed(dark) {
                    log::warn!("following system theme failed: {}", err);
                }
            }
        }),
    );

    scope.bind(
        "theme-after-swap",
        hub.subscribe(move |event| {
            if *event == PageEvent::AfterSwap {
                theme.borrow_mut().reapply();
            }
        }),
    );
}
