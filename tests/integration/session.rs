//! Search bar sessions: URL seeding, URL sync, focus and caret.

use crate::common::{blog_index, mount, SEARCH_PAGE};
use codelog::location::History;
use codelog::{Error, MemoryHistory, MemoryInput, Result, SearchSession};
use url::Url;

#[test]
fn test_deep_link_seeds_query_and_caret() {
    let session = mount("https://blog.test/search/?q=dark&page=2");
    assert_eq!(session.query(), "dark");
    assert_eq!(session.input().value, "dark");
    assert_eq!(session.input().caret, Some(4));
    assert_eq!(session.results()[0].item.slug, "dark-mode-done-right");
    assert_eq!(
        session.history().href(),
        "https://blog.test/search/?q=dark&page=2"
    );
}

#[test]
fn test_caret_counts_utf16_units() {
    let session = mount("https://blog.test/search/?q=%F0%9F%A6%80rust");
    assert_eq!(session.query(), "🦀rust");
    assert_eq!(session.input().caret, Some(6));
}

#[test]
fn test_typing_keeps_other_params() {
    let mut session = mount("https://blog.test/search/?q=dark&page=2");
    session.set_query("astro").unwrap();
    assert_eq!(
        session.history().href(),
        "https://blog.test/search/?q=astro&page=2"
    );
}

#[test]
fn test_spaces_are_form_encoded() {
    let mut session = mount(SEARCH_PAGE);
    session.set_query("css grid").unwrap();
    assert_eq!(session.history().href(), "https://blog.test/search/?q=css+grid");
}

#[test]
fn test_clearing_returns_to_bare_path() {
    let mut session = mount("https://blog.test/search/?q=dark&page=2#results");
    assert!(session.clear().unwrap());
    assert_eq!(session.history().href(), SEARCH_PAGE);
    assert_eq!(session.input().value, "");
    assert!(session.results().is_empty());
    assert_eq!(session.status_line(), None);
}

#[test]
fn test_every_keystroke_replaces_and_refocuses() {
    let mut session = mount(SEARCH_PAGE);
    let typed = ["r", "ru", "rus", "rust"];
    for prefix in typed {
        session.set_query(prefix).unwrap();
    }
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().replacements(), 1 + typed.len());
    assert_eq!(session.input().focus_count, 1 + typed.len());
    assert_eq!(session.results()[0].item.slug, "rust-ownership");
}

#[test]
fn test_shared_link_reproduces_results() {
    let mut author = mount(SEARCH_PAGE);
    author.set_query("tokenizer lexing").unwrap();
    let link = author.history().href().to_string();

    let reader = mount(&link);
    assert_eq!(reader.query(), "tokenizer lexing");
    assert_eq!(reader.results().slugs(), author.results().slugs());
}

#[test]
fn test_status_line_counts_results() {
    let mut session = mount(SEARCH_PAGE);
    session.set_query("astro").unwrap();
    let count = session.results().len();
    let expected = if count == 1 {
        "Found 1 result for \"astro\"".to_string()
    } else {
        format!("Found {} results for \"astro\"", count)
    };
    assert_eq!(session.status_line(), Some(expected));
}

#[test]
fn test_summaries_prefer_newer_modification_date() {
    let session = mount("https://blog.test/search/?q=dark");
    let top = &session.summaries()[0];
    assert_eq!(top.href, "/posts/dark-mode-done-right/");
    assert_eq!(top.key, "0-dark-mode-done-right");
    assert_eq!(top.datetime.to_rfc3339(), "2024-05-01T12:00:00+00:00");
}

#[test]
fn test_custom_param_name() {
    let mut session = SearchSession::mount_with_param(
        blog_index(),
        MemoryHistory::new("https://blog.test/search/?search=astro").unwrap(),
        MemoryInput::default(),
        "search",
    )
    .unwrap();
    assert_eq!(session.query(), "astro");
    session.set_query("rust").unwrap();
    assert_eq!(session.history().href(), "https://blog.test/search/?search=rust");
}

/// History whose writes always fail, like `replaceState` on a sandboxed page.
struct ReadOnlyHistory(Url);

impl History for ReadOnlyHistory {
    fn location(&self) -> Result<Url> {
        Ok(self.0.clone())
    }

    fn replace(&mut self, _relative: &str) -> Result<()> {
        Err(Error::History("replaceState denied".into()))
    }
}

#[test]
fn test_history_failures_propagate() {
    let history = ReadOnlyHistory(Url::parse(SEARCH_PAGE).unwrap());
    let err = SearchSession::mount(blog_index(), history, MemoryInput::default())
        .err()
        .expect("mount should fail");
    assert!(matches!(err, Error::History(_)));
}

#[test]
fn test_into_parts_hands_adapters_back() {
    let mut session = mount(SEARCH_PAGE);
    session.set_query("grid").unwrap();
    let (history, input) = session.into_parts();
    assert_eq!(history.href(), "https://blog.test/search/?q=grid");
    assert_eq!(input.focus_count, 2);
}

#[test]
fn test_query_set_from_code_shows_in_input() {
    let mut session = mount("https://blog.test/search/?q=dark");
    assert!(session.replace_query("tokenizer").unwrap());
    assert_eq!(session.input().value, "tokenizer");
    assert_eq!(session.input().caret, Some(9));
    assert_eq!(session.results().slugs()[0], "writing-a-tokenizer");
    assert_eq!(
        session.history().href(),
        "https://blog.test/search/?q=tokenizer"
    );

    // The next edit starts from the text the box now shows
    let typed = format!("{} ", session.input().value);
    session.set_query(typed).unwrap();
    assert_eq!(session.query(), "tokenizer ");
}
