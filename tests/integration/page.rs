//! Page event wiring across view transitions.

use codelog::theme::{MemoryStore, RecordingPresenter};
use codelog::widgets::{
    bind_page, bind_theme, heading_anchor, CopyButton, MemoryClipboard, PageState,
    HEADING_GROUP_CLASS, HEADING_LINK_CLASS, MENU_BUTTON_ID, MENU_ID, PROGRESS_BAR_CLASS,
    PROGRESS_BAR_ID, PROGRESS_CONTAINER_CLASS,
};
use codelog::{EventHub, EventScope, PageEvent, Theme, ThemeState};
use std::cell::RefCell;
use std::rc::Rc;

/// Runs setup the way a page does on every navigation.
fn setup(
    scope: &mut EventScope,
    hub: &EventHub<PageEvent>,
    page: &Rc<RefCell<PageState>>,
    theme: &Rc<RefCell<ThemeState<MemoryStore, RecordingPresenter>>>,
) {
    bind_page(scope, hub, Rc::clone(page));
    bind_theme(scope, hub, Rc::clone(theme));
}

#[test]
fn test_repeated_setup_never_doubles_handlers() {
    let hub = EventHub::new();
    let mut scope = EventScope::new();
    let page = Rc::new(RefCell::new(PageState::default()));
    let theme = Rc::new(RefCell::new(
        ThemeState::load(MemoryStore::default(), RecordingPresenter::default(), false).unwrap(),
    ));

    for _ in 0..5 {
        setup(&mut scope, &hub, &page, &theme);
        hub.emit(&PageEvent::AfterSwap);
    }
    let listeners = hub.listener_count();
    setup(&mut scope, &hub, &page, &theme);
    assert_eq!(hub.listener_count(), listeners);

    // One click, one flip. A doubled handler would flip back.
    hub.emit(&PageEvent::ThemeButtonClick);
    assert_eq!(theme.borrow().current(), Theme::Dark);

    hub.emit(&PageEvent::MenuButtonClick);
    assert_eq!(page.borrow().menu.aria(), ("true", "false"));
}

#[test]
fn test_teardown_silences_page() {
    let hub = EventHub::new();
    let mut scope = EventScope::new();
    let page = Rc::new(RefCell::new(PageState::default()));
    bind_page(&mut scope, &hub, Rc::clone(&page));

    scope.teardown();
    hub.emit(&PageEvent::Scroll {
        scroll_top: 100.0,
        scroll_height: 300.0,
        client_height: 100.0,
    });
    assert_eq!(page.borrow().progress, 0.0);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_dropping_scope_detaches() {
    let hub = EventHub::new();
    let page = Rc::new(RefCell::new(PageState::default()));
    {
        let mut scope = EventScope::new();
        bind_page(&mut scope, &hub, Rc::clone(&page));
        assert_eq!(hub.listener_count(), 3);
    }
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_widgets_target_the_site_markup() {
    // The header renders `#menu-btn` controlling `<ul id="menu">`.
    assert_eq!((MENU_BUTTON_ID, MENU_ID), ("menu-btn", "menu"));
    // The progress bar is injected, styled by these classes.
    assert_eq!(
        (PROGRESS_CONTAINER_CLASS, PROGRESS_BAR_CLASS, PROGRESS_BAR_ID),
        ("progress-container", "progress-bar", "myBar")
    );
    assert_eq!((HEADING_LINK_CLASS, HEADING_GROUP_CLASS), ("heading-link", "group"));
    let anchor = heading_anchor(3, Some("install")).unwrap();
    assert_eq!((anchor.href.as_str(), anchor.label), ("#install", "#"));
}

#[test]
fn test_copy_label_reverts_after_quick_double_click() {
    let mut clipboard = MemoryClipboard::default();
    let mut button = CopyButton::new();
    let first = button.click(&mut clipboard, "fn main() {}").unwrap();
    let second = button.click(&mut clipboard, "fn main() {}").unwrap();

    // Timers fire in click order
    assert!(!button.expire(first));
    assert_eq!(button.label(), "Copied");
    assert!(button.expire(second));
    assert_eq!(button.label(), "Copy");
}
