// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the codelog command-line interface.
//!
//! Two subcommands over a content JSON file (the same array the blog embeds
//! for search): `search` ranks it against a query exactly as the browser
//! would, `inspect` summarizes what the index sees.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codelog",
    about = "Query a blog's search content the way the browser does",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank content items against a query
    Search {
        /// JSON array of `{slug, title, description, data}`
        #[arg(short, long)]
        items: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Site config JSON with a `search` section
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a content file and the index built from it
    Inspect {
        /// JSON array of `{slug, title, description, data}`
        #[arg(short, long)]
        items: PathBuf,

        /// Site config JSON with a `search` section
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
