// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use codelog::location::with_query_param;
use codelog::{search, ContentItem, ItemSummary, SearchIndex, SiteConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use url::Url;

mod cli;
use cli::display::{boxed, paint, result_lines, Tone};
use cli::{Cli, Commands};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    rank: usize,
    score: f64,
    #[serde(flatten)]
    summary: ItemSummary<'a>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn load(items: &Path, config: Option<&Path>) -> codelog::Result<(SiteConfig, SearchIndex)> {
    let site = match config {
        Some(path) => SiteConfig::from_path(path)?,
        None => SiteConfig::default(),
    };
    let raw = std::fs::read_to_string(items)?;
    let items: Arc<[ContentItem]> = ContentItem::list_from_json(&raw)?.into();
    log::info!("loaded {} items from {}", items.len(), items_label(&items));
    let index = SearchIndex::build(items, site.search.options.clone())?;
    Ok((site, index))
}

fn items_label(items: &[ContentItem]) -> String {
    match items {
        [] => "an empty file".to_string(),
        [only] => format!("'{}'", only.slug),
        [first, ..] => format!("'{}' and others", first.slug),
    }
}

/// Absolute `/search/?q=...` link on the configured site, if it parses.
fn share_link(site: &SiteConfig, query: &str) -> Option<String> {
    let page = Url::parse(&site.website).ok()?.join("/search/").ok()?;
    let relative = with_query_param(&page, &site.search.param, query);
    page.join(&relative).ok().map(String::from)
}

fn run_search(
    items: &Path,
    query: &str,
    limit: usize,
    config: Option<&Path>,
    json: bool,
) -> codelog::Result<()> {
    let (site, index) = load(items, config)?;
    let results = search(&index, query);
    let shown: Vec<_> = results.iter().take(limit).copied().collect();

    if json {
        let hits: Vec<JsonHit<'_>> = shown
            .iter()
            .enumerate()
            .map(|(i, m)| JsonHit {
                rank: i + 1,
                score: m.score,
                summary: ItemSummary::from_match(m),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if !codelog::is_searchable(query, index.options().min_query_chars) {
        println!(
            "{}",
            paint(
                Tone::Muted,
                false,
                &format!(
                    "Query must be at least {} characters.",
                    index.options().min_query_chars
                )
            )
        );
        return Ok(());
    }

    let mut lines = Vec::new();
    for (i, m) in shown.iter().enumerate() {
        lines.extend(result_lines(i + 1, m.score, &ItemSummary::from_match(m)));
    }
    if lines.is_empty() {
        lines.push(paint(Tone::Muted, false, "No results."));
    }
    let plural = if results.len() == 1 { "" } else { "s" };
    let label = format!("Found {} result{} for \"{}\"", results.len(), plural, query);
    println!("{}", boxed(&label, &lines));
    if let Some(link) = share_link(&site, query) {
        println!("{}", paint(Tone::Muted, false, &link));
    }
    Ok(())
}

fn run_inspect(items: &Path, config: Option<&Path>) -> codelog::Result<()> {
    let (site, index) = load(items, config)?;
    let all = index.items();

    let mut tags: BTreeMap<&str, usize> = BTreeMap::new();
    for item in all.iter() {
        for tag in &item.data.tags {
            *tags.entry(tag.as_str()).or_default() += 1;
        }
    }
    let fields: usize = index.records().iter().map(|r| r.fields.len()).sum();
    let no_description = all.iter().filter(|i| i.description.trim().is_empty()).count();

    let options = index.options();
    let keys: Vec<String> = options
        .keys
        .iter()
        .map(|k| format!("{}×{}", k.key, k.weight))
        .collect();

    let mut lines = vec![
        format!("items            {}", all.len()),
        format!(
            "drafts           {}",
            all.iter().filter(|i| i.data.draft).count()
        ),
        format!(
            "featured         {}",
            all.iter().filter(|i| i.data.featured).count()
        ),
        format!("no description   {}", no_description),
        format!("indexed fields   {}", fields),
        format!("keys             {}", keys.join(", ")),
        format!(
            "threshold        {}  (min query {} chars, param '{}')",
            options.threshold, options.min_query_chars, site.search.param
        ),
    ];
    if !tags.is_empty() {
        let mut by_count: Vec<_> = tags.into_iter().collect();
        by_count.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        let top: Vec<String> = by_count
            .iter()
            .take(8)
            .map(|(tag, n)| format!("{} ({})", tag, n))
            .collect();
        lines.push(format!("top tags         {}", top.join(", ")));
    }
    println!("{}", boxed(&site.title, &lines));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            items,
            query,
            limit,
            config,
            json,
        } => run_search(&items, &query, limit, config.as_deref(), json),
        Commands::Inspect { items, config } => run_inspect(&items, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", paint(Tone::Poor, true, "error:"), err);
            ExitCode::FAILURE
        }
    }
}
