//! Does the right post come back for the obvious query?

use crate::common::{assert_ranked, blog_index};
use codelog::search;

#[test]
fn test_title_prefix_ranks_first() {
    let index = blog_index();
    for (query, slug) in [
        ("dark", "dark-mode-done-right"),
        ("astro", "astro-islands-explained"),
        ("rust", "rust-ownership"),
        ("cafe", "cafe-culture-in-lisbon"),
    ] {
        let results = search(&index, query);
        assert_eq!(
            results.first().map(|m| m.item.slug.as_str()),
            Some(slug),
            "query {:?} got {:?}",
            query,
            results.slugs()
        );
        assert_ranked(&results);
    }
}

#[test]
fn test_every_exact_title_finds_its_post() {
    let index = blog_index();
    for item in index.items().iter() {
        let results = search(&index, &item.title);
        assert_eq!(results[0].item.slug, item.slug, "title {:?}", item.title);
    }
}

#[test]
fn test_description_words_are_searchable() {
    let index = blog_index();
    assert!(search(&index, "borrowing").slugs().contains(&"rust-ownership"));
    assert!(search(&index, "lexing").slugs().contains(&"writing-a-tokenizer"));
    assert!(search(&index, "lisbon").slugs().contains(&"cafe-culture-in-lisbon"));
}

#[test]
fn test_typo_still_finds_post() {
    let index = blog_index();
    let results = search(&index, "drak mode");
    assert_eq!(results[0].item.slug, "dark-mode-done-right");
}

#[test]
fn test_case_insensitive() {
    let index = blog_index();
    assert_eq!(
        search(&index, "ASTRO Islands").slugs(),
        search(&index, "astro islands").slugs()
    );
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_fold() {
    let index = blog_index();
    assert_eq!(search(&index, "Café").slugs(), search(&index, "cafe").slugs());
}

#[test]
fn test_unrelated_query_finds_nothing() {
    let index = blog_index();
    assert!(search(&index, "zzzz").is_empty());
    assert!(search(&index, "qqqqqqqq").is_empty());
}

#[test]
fn test_results_carry_frontmatter() {
    let index = blog_index();
    let results = search(&index, "dark");
    let top = &results[0];
    assert_eq!(top.ref_index, 0);
    assert!(top.item.data.featured);
    assert_eq!(top.item.data.tags, vec!["css", "astro"]);
}
