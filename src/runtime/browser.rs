// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The real page behind the adapter traits.
//!
//! Each type here is a thin `web-sys` wrapper: `BrowserHistory` for the
//! address bar, `InputElement` for the search box, `LocalStorageStore` and
//! `DocumentPresenter` for the theme, `BrowserClipboard` for copy buttons.
//! `listen` turns a DOM listener into a `Subscription` that removes itself.

use crate::error::{Error, Result};
use crate::events::Subscription;
use crate::location::History;
use crate::session::SearchInput;
use crate::theme::{Theme, ThemePresenter, ThemeStore};
use crate::widgets::Clipboard;
use js_sys::{Function, Reflect};
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlInputElement, MediaQueryList, Storage, Window,
};

/// Media query for the OS dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub(crate) fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::History("no window".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::History("no document".into()))
}

/// Attach `handler` for `event_type` on `target`. Dropping the returned
/// subscription removes the listener and frees the closure.
pub fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Subscription> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        .map_err(|e| Error::History(format!("addEventListener({}): {}", event_type, describe(&e))))?;

    let target = target.clone();
    let event_type = event_type.to_string();
    Ok(Subscription::from_teardown(move || {
        let _ = target
            .remove_event_listener_with_callback(&event_type, closure.as_ref().unchecked_ref());
        drop(closure);
    }))
}

/// `matchMedia("(prefers-color-scheme: dark)")`, if the browser supports it.
pub fn dark_scheme_query() -> Option<MediaQueryList> {
    window().ok()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

pub fn prefers_dark() -> bool {
    dark_scheme_query().map(|mql| mql.matches()).unwrap_or(false)
}

// ============================================================================
// HISTORY
// ============================================================================

/// `window.location` + `history.replaceState`.
pub struct BrowserHistory {
    window: Window,
}

impl BrowserHistory {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

impl History for BrowserHistory {
    fn location(&self) -> Result<Url> {
        let href = self
            .window
            .location()
            .href()
            .map_err(|e| Error::History(describe(&e)))?;
        Ok(Url::parse(&href)?)
    }

    fn replace(&mut self, relative: &str) -> Result<()> {
        self.window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(relative)))
            .map_err(|e| Error::History(describe(&e)))
    }
}

// ============================================================================
// INPUT
// ============================================================================

pub struct InputElement {
    element: HtmlInputElement,
}

impl InputElement {
    pub fn new(element: HtmlInputElement) -> Self {
        Self { element }
    }

    pub fn by_id(id: &str) -> Result<Self> {
        let element = document()?
            .get_element_by_id(id)
            .ok_or_else(|| Error::Config(format!("no element #{}", id)))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| Error::Config(format!("#{} is not an <input>", id)))?;
        Ok(Self::new(element))
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.element
    }

    pub fn value(&self) -> String {
        self.element.value()
    }
}

impl SearchInput for InputElement {
    fn set_value(&mut self, value: &str) {
        self.element.set_value(value);
    }

    fn set_caret(&mut self, position: usize) {
        let position = position as u32;
        if let Err(e) = self.element.set_selection_range(position, position) {
            log::debug!("setSelectionRange failed: {}", describe(&e));
        }
    }

    fn focus(&mut self) {
        if let Err(e) = self.element.focus() {
            log::debug!("focus failed: {}", describe(&e));
        }
    }
}

// ============================================================================
// THEME
// ============================================================================

/// `localStorage`. Private browsing may deny access; reads then see nothing
/// and writes fail with `Error::Storage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = window().ok().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, theme choice won't persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| Error::Storage(describe(&e))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(describe(&e)))
    }
}

/// Writes the theme onto the document.
///
/// - `data-theme` on the root element
/// - `aria-label` on `#theme-btn`
/// - `<meta name="theme-color">` set to the body's computed background
pub struct DocumentPresenter {
    window: Window,
}

impl DocumentPresenter {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }

    fn try_apply(&self, theme: Theme) -> Option<()> {
        let document = self.window.document()?;
        document
            .document_element()?
            .set_attribute("data-theme", theme.as_str())
            .ok()?;

        if let Some(button) = document.get_element_by_id("theme-btn") {
            let _ = button.set_attribute("aria-label", theme.as_str());
        }

        let body = document.body()?;
        let background = self
            .window
            .get_computed_style(&body)
            .ok()
            .flatten()?
            .get_property_value("background-color")
            .ok()?;
        if let Ok(Some(meta)) = document.query_selector("meta[name='theme-color']") {
            let _ = meta.set_attribute("content", &background);
        }
        Some(())
    }
}

impl ThemePresenter for DocumentPresenter {
    fn apply(&mut self, theme: Theme) {
        if self.try_apply(theme).is_none() {
            log::debug!("document not ready, theme {} applied partially", theme);
        }
    }
}

// ============================================================================
// CLIPBOARD
// ============================================================================

/// `navigator.clipboard.writeText`. The returned promise isn't awaited.
pub struct BrowserClipboard {
    window: Window,
}

impl BrowserClipboard {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

impl Clipboard for BrowserClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let navigator = self.window.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|e| Error::Storage(describe(&e)))?;
        if clipboard.is_undefined() {
            return Err(Error::Storage("clipboard API unavailable".into()));
        }
        let write = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| Error::Storage(describe(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| Error::Storage("clipboard.writeText is not a function".into()))?;
        write
            .call1(&clipboard, &JsValue::from_str(text))
            .map(|_| ())
            .map_err(|e| Error::Storage(describe(&e)))
    }
}

/// Scroll the window back to the top (after a view transition).
pub fn scroll_to_top() {
    if let Ok(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

