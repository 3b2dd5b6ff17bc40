//! Theme preference across page loads.

use codelog::theme::{MemoryStore, RecordingPresenter, THEME_STORAGE_KEY};
use codelog::{Error, Result, Theme, ThemeState, ThemeStore};

fn load(store: MemoryStore, prefers_dark: bool) -> ThemeState<MemoryStore, RecordingPresenter> {
    ThemeState::load(store, RecordingPresenter::default(), prefers_dark).unwrap()
}

#[test]
fn test_choice_survives_navigation() {
    let mut first = load(MemoryStore::default(), false);
    assert_eq!(first.current(), Theme::Light);
    first.toggle().unwrap();

    // Next page load: same storage, system still light
    let second = load(first.store().clone(), false);
    assert_eq!(second.current(), Theme::Dark);
    assert_eq!(second.presenter().applied, vec![Theme::Dark]);
}

#[test]
fn test_untouched_toggle_follows_system() {
    let first = load(MemoryStore::default(), false);
    let second = load(first.store().clone(), true);
    assert_eq!(second.current(), Theme::Dark);
}

#[test]
fn test_corrupt_storage_falls_back() {
    let state = load(MemoryStore::with_entry(THEME_STORAGE_KEY, "{}"), true);
    assert_eq!(state.current(), Theme::Dark);
}

#[test]
fn test_system_change_is_persisted() {
    let mut state = load(MemoryStore::default(), false);
    state.system_changed(true).unwrap();
    let next = load(state.store().clone(), false);
    assert_eq!(next.current(), Theme::Dark);
}

/// Storage that refuses writes, as in some private-browsing modes.
#[derive(Default)]
struct FullStore;

impl ThemeStore for FullStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::Storage("quota exceeded".into()))
    }
}

#[test]
fn test_storage_failure_still_switches_page() {
    let mut state = ThemeState::load(FullStore, RecordingPresenter::default(), false).unwrap();
    let err = state.toggle().unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(state.presenter().applied, vec![Theme::Light, Theme::Dark]);
}
