// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! Four entry points for the page:
//!
//! ```js
//! const index = new CodelogSearch(items);        // headless ranking
//! index.search("astro");                          // [{href, frontmatter, ...}]
//!
//! const bar = new SearchBar("search-input", items);
//! bar.onChange(results => render(results));       // live search box, ?q= synced
//!
//! const theme = new ThemeToggle();                // #theme-btn, localStorage
//! const page = new PageWidgets();                 // progress bar, menu, anchors, copy
//! ```
//!
//! Every binding owns its DOM listeners through an `EventScope`; `teardown()`
//! (or dropping the JS object with `free()`) detaches them all.

use super::browser::{
    dark_scheme_query, document, listen, prefers_dark, scroll_to_top, to_js, window,
    BrowserClipboard, BrowserHistory, DocumentPresenter, InputElement, LocalStorageStore,
};
use crate::config::SearchOptions;
use crate::error::Error;
use crate::events::{EventHub, EventScope};
use crate::index::{IndexCache, SearchIndex};
use crate::session::SearchSession;
use crate::summary::ItemSummary;
use crate::theme::ThemeState;
use crate::types::ContentItem;
use crate::widgets::{
    bind_page, bind_theme, heading_anchor, CopyButton, PageEvent, PageState, COPIED_RESET_MS,
    COPY_LABEL, HEADING_GROUP_CLASS, HEADING_LINK_CLASS, MENU_BUTTON_ID, MENU_ID,
    PROGRESS_BAR_CLASS, PROGRESS_BAR_ID, PROGRESS_CONTAINER_CLASS,
};
use js_sys::{Function, Object};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// View-transition event fired by the site's router.
const AFTER_SWAP_EVENT: &str = "astro:after-swap";

fn to_js_value<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    // Objects, not `Map`s, for the flattened frontmatter.
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn parse_items(items: JsValue) -> Result<Arc<[ContentItem]>, JsValue> {
    let items: Vec<ContentItem> = from_value(items)?;
    Ok(items.into())
}

// ============================================================================
// HEADLESS INDEX
// ============================================================================

#[wasm_bindgen]
pub struct CodelogSearch {
    index: SearchIndex,
}

#[wasm_bindgen]
impl CodelogSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(items: JsValue) -> Result<CodelogSearch, JsValue> {
        Ok(Self {
            index: SearchIndex::new(parse_items(items)?),
        })
    }

    /// Build with custom fuzzy options (`{threshold, keys, ...}`).
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(items: JsValue, options: JsValue) -> Result<CodelogSearch, JsValue> {
        let options: SearchOptions = from_value(options)?;
        let index = SearchIndex::build(parse_items(items)?, options).map_err(to_js)?;
        Ok(Self { index })
    }

    /// Ranked result cards, best first. Empty below two characters.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let summaries: Vec<ItemSummary<'_>> = crate::search::search(&self.index, query)
            .iter()
            .map(ItemSummary::from_match)
            .collect();
        to_js_value(&summaries)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

// ============================================================================
// SEARCH BAR
// ============================================================================

type BrowserSession = SearchSession<BrowserHistory, InputElement>;

#[wasm_bindgen]
pub struct SearchBar {
    session: Rc<RefCell<BrowserSession>>,
    on_change: Rc<RefCell<Option<Function>>>,
    cache: IndexCache,
    items: JsValue,
    scope: EventScope,
}

#[wasm_bindgen]
impl SearchBar {
    /// Mount on `<input id={input_id}>`, seeding from `?q=`.
    #[wasm_bindgen(constructor)]
    pub fn new(input_id: &str, items: JsValue) -> Result<SearchBar, JsValue> {
        let mut cache = IndexCache::new();
        let index = cache.get_or_build(&parse_items(items.clone())?);
        let input = InputElement::by_id(input_id).map_err(to_js)?;
        let target = input.element().clone();

        let session = SearchSession::mount(index, BrowserHistory::new().map_err(to_js)?, input)
            .map_err(to_js)?;
        let session = Rc::new(RefCell::new(session));
        let on_change: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));

        let mut scope = EventScope::new();
        let (s, cb) = (Rc::downgrade(&session), Rc::clone(&on_change));
        scope.bind(
            "input",
            listen(&target, "input", move |_| {
                if let Some(session) = s.upgrade() {
                    on_input(&session, &cb);
                }
            })
            .map_err(to_js)?,
        );

        Ok(Self {
            session,
            on_change,
            cache,
            items,
            scope,
        })
    }

    /// Called with the result cards after every query change.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, callback: Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    pub fn query(&self) -> String {
        self.session.borrow().query().to_string()
    }

    /// `Found N results for "q"`, or undefined below two characters.
    pub fn status(&self) -> Option<String> {
        self.session.borrow().status_line()
    }

    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.session.borrow().summaries())
    }

    /// Set the query from script; the input box shows it too.
    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&self, query: &str) -> Result<(), JsValue> {
        let changed = self
            .session
            .borrow_mut()
            .replace_query(query)
            .map_err(to_js)?;
        if changed {
            notify(&self.session, &self.on_change);
        }
        Ok(())
    }

    /// Swap the item set. Passing the same array again is free.
    #[wasm_bindgen(js_name = setItems)]
    pub fn set_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        if Object::is(&self.items, &items) {
            return Ok(());
        }
        let index = self.cache.get_or_build(&parse_items(items.clone())?);
        self.items = items;
        self.session
            .borrow_mut()
            .replace_index(index)
            .map_err(to_js)?;
        notify(&self.session, &self.on_change);
        Ok(())
    }

    pub fn teardown(&mut self) {
        self.scope.teardown();
    }
}

fn on_input(session: &Rc<RefCell<BrowserSession>>, on_change: &Rc<RefCell<Option<Function>>>) {
    let value = session.borrow().input().value();
    let changed = session.borrow_mut().set_query(value);
    match changed {
        Ok(true) => notify(session, on_change),
        Ok(false) => {}
        Err(err) => log::warn!("search update failed: {}", err),
    }
}

fn notify(session: &Rc<RefCell<BrowserSession>>, on_change: &Rc<RefCell<Option<Function>>>) {
    let callback = on_change.borrow().clone();
    let Some(callback) = callback else {
        return;
    };
    let results = match to_js_value(&session.borrow().summaries()) {
        Ok(results) => results,
        Err(err) => {
            log::warn!("serializing results failed: {:?}", err);
            return;
        }
    };
    if let Err(err) = callback.call1(&JsValue::NULL, &results) {
        log::warn!("onChange threw: {:?}", err);
    }
}

// ============================================================================
// THEME TOGGLE
// ============================================================================

type BrowserTheme = ThemeState<LocalStorageStore, DocumentPresenter>;

#[wasm_bindgen]
pub struct ThemeToggle {
    state: Rc<RefCell<BrowserTheme>>,
    scope: Rc<RefCell<EventScope>>,
    _hub: Rc<EventHub<PageEvent>>,
}

#[wasm_bindgen]
impl ThemeToggle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ThemeToggle, JsValue> {
        let state = ThemeState::load(
            LocalStorageStore::new(),
            DocumentPresenter::new().map_err(to_js)?,
            prefers_dark(),
        )
        .map_err(to_js)?;
        let state = Rc::new(RefCell::new(state));
        let hub = Rc::new(EventHub::new());
        let scope = Rc::new(RefCell::new(EventScope::new()));

        bind_theme(&mut scope.borrow_mut(), &hub, Rc::clone(&state));
        bind_theme_button(&scope, &hub).map_err(to_js)?;

        if let Some(mql) = dark_scheme_query() {
            let (h, query) = (Rc::clone(&hub), mql.clone());
            let sub = listen(&mql, "change", move |_| {
                h.emit(&PageEvent::ColorSchemeChange {
                    dark: query.matches(),
                })
            })
            .map_err(to_js)?;
            scope.borrow_mut().bind("dom:color-scheme", sub);
        }

        let (h, weak_scope) = (Rc::clone(&hub), Rc::downgrade(&scope));
        let sub = listen(&document().map_err(to_js)?, AFTER_SWAP_EVENT, move |_| {
            h.emit(&PageEvent::AfterSwap);
            // The swap replaced #theme-btn.
            if let Some(scope) = weak_scope.upgrade() {
                if let Err(err) = bind_theme_button(&scope, &h) {
                    log::warn!("rebinding theme button failed: {}", err);
                }
            }
        })
        .map_err(to_js)?;
        scope.borrow_mut().bind("dom:after-swap", sub);

        Ok(Self {
            state,
            scope,
            _hub: hub,
        })
    }

    pub fn theme(&self) -> String {
        self.state.borrow().current().to_string()
    }

    pub fn toggle(&self) -> Result<String, JsValue> {
        let theme = self.state.borrow_mut().toggle().map_err(to_js)?;
        Ok(theme.to_string())
    }

    pub fn teardown(&self) {
        self.scope.borrow_mut().teardown();
    }
}

fn bind_theme_button(
    scope: &Rc<RefCell<EventScope>>,
    hub: &Rc<EventHub<PageEvent>>,
) -> crate::Result<()> {
    let Some(button) = document()?.get_element_by_id("theme-btn") else {
        scope.borrow_mut().unbind("dom:theme-btn");
        return Ok(());
    };
    let h = Rc::clone(hub);
    let sub = listen(&button, "click", move |_| h.emit(&PageEvent::ThemeButtonClick))?;
    scope.borrow_mut().bind("dom:theme-btn", sub);
    Ok(())
}

// ============================================================================
// PAGE WIDGETS
// ============================================================================

#[wasm_bindgen]
pub struct PageWidgets {
    scope: Rc<RefCell<EventScope>>,
    decorations: Rc<RefCell<EventScope>>,
    _hub: Rc<EventHub<PageEvent>>,
}

#[wasm_bindgen]
impl PageWidgets {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PageWidgets, JsValue> {
        let hub = Rc::new(EventHub::new());
        let state = Rc::new(RefCell::new(PageState::default()));
        let scope = Rc::new(RefCell::new(EventScope::new()));
        let decorations = Rc::new(RefCell::new(EventScope::new()));

        {
            let mut scope = scope.borrow_mut();
            bind_page(&mut scope, &hub, Rc::clone(&state));
            let s = Rc::clone(&state);
            scope.bind("render", hub.subscribe(move |event| render(event, &s.borrow())));
        }

        let h = Rc::clone(&hub);
        let sub = listen(&window().map_err(to_js)?, "scroll", move |_| {
            if let Some(event) = scroll_event() {
                h.emit(&event);
            }
        })
        .map_err(to_js)?;
        scope.borrow_mut().bind("dom:scroll", sub);

        ensure_progress_bar(&document().map_err(to_js)?).map_err(to_js)?;
        bind_menu_button(&scope, &hub).map_err(to_js)?;
        decorate(&decorations).map_err(to_js)?;

        let (h, weak_scope, weak_decorations) =
            (Rc::clone(&hub), Rc::downgrade(&scope), Rc::downgrade(&decorations));
        let sub = listen(&document().map_err(to_js)?, AFTER_SWAP_EVENT, move |_| {
            h.emit(&PageEvent::AfterSwap);
            after_swap(&h, &weak_scope, &weak_decorations);
        })
        .map_err(to_js)?;
        scope.borrow_mut().bind("dom:after-swap", sub);

        Ok(Self {
            scope,
            decorations,
            _hub: hub,
        })
    }

    pub fn teardown(&self) {
        self.decorations.borrow_mut().teardown();
        self.scope.borrow_mut().teardown();
    }
}

fn after_swap(
    hub: &Rc<EventHub<PageEvent>>,
    scope: &Weak<RefCell<EventScope>>,
    decorations: &Weak<RefCell<EventScope>>,
) {
    if let Err(err) = document().and_then(|d| ensure_progress_bar(&d)) {
        log::warn!("restoring progress bar failed: {}", err);
    }
    if let Some(scope) = scope.upgrade() {
        if let Err(err) = bind_menu_button(&scope, hub) {
            log::warn!("rebinding menu button failed: {}", err);
        }
    }
    if let Some(decorations) = decorations.upgrade() {
        if let Err(err) = decorate(&decorations) {
            log::warn!("decorating page failed: {}", err);
        }
    }
}

/// `<div class="progress-container"><div class="progress-bar" id="myBar">`
/// at the end of `<body>`, unless the page already has one.
fn ensure_progress_bar(document: &Document) -> crate::Result<()> {
    if document.get_element_by_id(PROGRESS_BAR_ID).is_some() {
        return Ok(());
    }
    let js = |e: JsValue| Error::Config(format!("{:?}", e));
    let Some(body) = document.body() else {
        return Ok(());
    };
    let container = document.create_element("div").map_err(js)?;
    container.set_class_name(PROGRESS_CONTAINER_CLASS);
    let bar = document.create_element("div").map_err(js)?;
    bar.set_class_name(PROGRESS_BAR_CLASS);
    bar.set_id(PROGRESS_BAR_ID);
    container.append_child(&bar).map_err(js)?;
    body.append_child(&container).map_err(js)?;
    Ok(())
}

fn scroll_event() -> Option<PageEvent> {
    let root = document().ok()?.document_element()?;
    Some(PageEvent::Scroll {
        scroll_top: f64::from(root.scroll_top()),
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

fn render(event: &PageEvent, state: &PageState) {
    let Ok(document) = document() else {
        return;
    };
    match event {
        PageEvent::Scroll { .. } => {
            if let Some(bar) = document
                .get_element_by_id(PROGRESS_BAR_ID)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let width = format!("{}%", state.progress);
                let _ = bar.style().set_property("width", &width);
            }
        }
        PageEvent::MenuButtonClick => {
            let (expanded, hidden) = state.menu.aria();
            if let Some(button) = document.get_element_by_id(MENU_BUTTON_ID) {
                let _ = button.set_attribute("aria-expanded", expanded);
            }
            if let Some(menu) = document.get_element_by_id(MENU_ID) {
                let _ = menu.set_attribute("aria-hidden", hidden);
            }
        }
        PageEvent::AfterSwap => scroll_to_top(),
        _ => {}
    }
}

fn bind_menu_button(
    scope: &Rc<RefCell<EventScope>>,
    hub: &Rc<EventHub<PageEvent>>,
) -> crate::Result<()> {
    let Some(button) = document()?.get_element_by_id(MENU_BUTTON_ID) else {
        scope.borrow_mut().unbind("dom:menu-btn");
        return Ok(());
    };
    let h = Rc::clone(hub);
    let sub = listen(&button, "click", move |_| h.emit(&PageEvent::MenuButtonClick))?;
    scope.borrow_mut().bind("dom:menu-btn", sub);
    Ok(())
}

/// Heading anchors and code copy buttons for whatever article is on the page.
fn decorate(decorations: &Rc<RefCell<EventScope>>) -> crate::Result<()> {
    let document = document()?;
    let js = |e: JsValue| Error::Config(format!("{:?}", e));

    let headings = document
        .query_selector_all("h2, h3, h4, h5, h6")
        .map_err(js)?;
    for i in 0..headings.length() {
        let Some(heading) = headings.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let existing = format!("a.{}", HEADING_LINK_CLASS);
        if heading.query_selector(&existing).ok().flatten().is_some() {
            continue;
        }
        let level = heading
            .tag_name()
            .get(1..)
            .and_then(|n| n.parse::<u8>().ok())
            .unwrap_or(0);
        let id = heading.id();
        if let Some(anchor) = heading_anchor(level, Some(&id)) {
            heading.class_list().add_1(HEADING_GROUP_CLASS).map_err(js)?;
            let link = document.create_element("a").map_err(js)?;
            link.set_attribute("href", &anchor.href).map_err(js)?;
            link.set_class_name(HEADING_LINK_CLASS);
            let label = document.create_element("span").map_err(js)?;
            label.set_attribute("aria-hidden", "true").map_err(js)?;
            label.set_text_content(Some(anchor.label));
            link.append_child(&label).map_err(js)?;
            heading.append_child(&link).map_err(js)?;
        }
    }

    let mut scope = decorations.borrow_mut();
    scope.teardown();
    let blocks = document.query_selector_all("pre").map_err(js)?;
    for i in 0..blocks.length() {
        let Some(pre) = blocks.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let button = match pre.next_element_sibling() {
            Some(el) if el.class_name() == "copy-code" => el,
            _ => {
                let el = document.create_element("button").map_err(js)?;
                el.set_class_name("copy-code");
                el.set_text_content(Some(COPY_LABEL));
                pre.insert_adjacent_element("afterend", &el).map_err(js)?;
                el
            }
        };
        scope.bind(format!("copy:{}", i), bind_copy_button(pre, button.clone())?);
    }
    Ok(())
}

/// Text of the block's `<code>`, or of the whole `<pre>` when there is none.
fn code_text(pre: &Element) -> String {
    pre.query_selector("code")
        .ok()
        .flatten()
        .unwrap_or_else(|| pre.clone())
        .text_content()
        .unwrap_or_default()
}

fn bind_copy_button(pre: Element, button: Element) -> crate::Result<crate::Subscription> {
    let state = Rc::new(RefCell::new(CopyButton::new()));
    let mut clipboard = BrowserClipboard::new()?;
    let target = button.clone();
    listen(&target, "click", move |_| {
        let generation = match state.borrow_mut().click(&mut clipboard, &code_text(&pre)) {
            Ok(generation) => generation,
            Err(err) => {
                log::warn!("copy failed: {}", err);
                return;
            }
        };
        button.set_text_content(Some(state.borrow().label()));

        let (b, s) = (button.clone(), Rc::clone(&state));
        let revert = Closure::once_into_js(move || {
            if s.borrow_mut().expire(generation) {
                b.set_text_content(Some(s.borrow().label()));
            }
        });
        if let Ok(w) = window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                revert.unchecked_ref(),
                COPIED_RESET_MS as i32,
            );
        }
    })
}
