//! Site config files.

use crate::common::blog_items;
use codelog::{search, Error, SearchIndex, SiteConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults_when_empty() {
    let file = write_config("{}");
    let config = SiteConfig::from_path(file.path()).unwrap();
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.search.param, "q");
    assert_eq!(config.search.options.threshold, 0.5);
}

#[test]
fn test_search_section_drives_the_index() {
    let file = write_config(
        r#"{
            "title": "My Blog",
            "postPerPage": 4,
            "search": {
                "param": "s",
                "threshold": 0.0,
                "keys": [{"key": "title", "weight": 2.0}, "description"]
            }
        }"#,
    );
    let config = SiteConfig::from_path(file.path()).unwrap();
    assert_eq!(config.title, "My Blog");
    assert_eq!(config.post_per_page, 4);
    assert_eq!(config.search.param, "s");
    assert_eq!(config.search.options.keys.len(), 2);

    let index = SearchIndex::build(blog_items(), config.search.options).unwrap();
    assert_eq!(search(&index, "dark").slugs(), vec!["dark-mode-done-right"]);
}

#[test]
fn test_invalid_threshold_rejected() {
    let file = write_config(r#"{"search": {"threshold": 2}}"#);
    let err = SiteConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions(_)));
}

#[test]
fn test_empty_param_rejected() {
    let err = SiteConfig::from_json_str(r#"{"search": {"param": ""}}"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_malformed_json() {
    let file = write_config("{ not json");
    assert!(matches!(
        SiteConfig::from_path(file.path()),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
