//! Custom cargo commands for codelog.
//!
//! Usage:
//!   cargo xtask check     - cargo check + test + clippy, native and wasm32
//!   cargo xtask test      - Run all tests
//!   cargo xtask wasm      - Build the browser package with wasm-pack
//!   cargo xtask smoke     - Run the CLI against the sample posts
//!   cargo xtask fuzz [s]  - Fuzz search queries for `s` seconds (nightly)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const SAMPLE_POSTS: &str = "data/sample-posts.json";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("wasm") => wasm()?,
        Some("smoke") => smoke()?,
        Some("fuzz") => fuzz(args.next().as_deref().unwrap_or("60"))?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check     cargo check + test + clippy, plus a wasm32 check of the bindings
  test      Run all Rust tests
  wasm      Build pkg/ with wasm-pack (--target web)
  smoke     Run `codelog search` and `codelog inspect` on {SAMPLE_POSTS}
  fuzz [s]  Fuzz the search_queries target for s seconds (default 60)
  bench     Run benchmarks
"#
    );
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("[4/4] cargo check (wasm32)...");
    run_cargo(&[
        "check",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--no-default-features",
        "--features",
        "wasm,unicode-normalization",
    ])?;

    println!("\n✓ Checks passed");
    Ok(())
}

fn wasm() -> Result<()> {
    let root = project_root()?;
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--",
            "--no-default-features",
            "--features",
            "wasm,unicode-normalization",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;
    if !status.success() {
        bail!("wasm-pack build failed");
    }
    println!("✓ Package written to {}", root.join("pkg").display());
    Ok(())
}

fn smoke() -> Result<()> {
    run_cargo(&["run", "--quiet", "--", "inspect", "--items", SAMPLE_POSTS])?;
    run_cargo(&[
        "run", "--quiet", "--", "search", "--items", SAMPLE_POSTS, "astro",
    ])?;
    run_cargo(&[
        "run", "--quiet", "--", "search", "--items", SAMPLE_POSTS, "--json", "--limit", "2",
        "drak mode",
    ])
}

fn fuzz(seconds: &str) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);
    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", "search_queries", "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
    if !status.success() {
        bail!("fuzzing found a failure");
    }
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
