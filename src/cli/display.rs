// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the codelog CLI.
//!
//! Result lists render as a boxed table, colored for the terminal's
//! background. Gruvbox dark or light, picked by:
//!
//! 1. `CODELOG_THEME` env var (`dark` / `light`)
//! 2. `COLORFGBG` (background palette index; 7 and up except 8 is light)
//! 3. dark
//!
//! Colors are dropped entirely under `NO_COLOR` or when stdout is not a TTY.
//! Renderers return `String`s; the command decides where they go.

use codelog::{ItemSummary, Theme};
use std::sync::OnceLock;

/// Inner width of boxes, between the borders.
pub const BOX_WIDTH: usize = 72;

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(value) = std::env::var("CODELOG_THEME") {
        if let Ok(theme) = value.to_lowercase().parse::<Theme>() {
            return theme;
        }
    }

    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.rsplit(';').next().map(str::parse::<u8>) {
            return Theme::from_preference(!(bg >= 7 && bg != 8));
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Good,
    Fair,
    Poor,
    Muted,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Tone::Accent) => (131, 165, 152),
            (Theme::Dark, Tone::Good) => (184, 187, 38),
            (Theme::Dark, Tone::Fair) => (250, 189, 47),
            (Theme::Dark, Tone::Poor) => (251, 73, 52),
            (Theme::Dark, Tone::Muted) => (146, 131, 116),
            (Theme::Light, Tone::Accent) => (7, 102, 120),
            (Theme::Light, Tone::Good) => (121, 116, 14),
            (Theme::Light, Tone::Fair) => (181, 118, 20),
            (Theme::Light, Tone::Poor) => (157, 0, 6),
            (Theme::Light, Tone::Muted) => (124, 111, 100),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// `text` in `tone`, or plain when colors are off.
pub fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, tone.escape(), text, RESET)
}

/// Display width, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

/// Cut to `max` chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Lower is better; 0 is a perfect match.
pub fn score_badge(score: f64) -> String {
    let tone = if score < 0.01 {
        Tone::Good
    } else if score < 0.2 {
        Tone::Fair
    } else {
        Tone::Poor
    };
    paint(tone, false, &format!("{:.3}", score))
}

fn boxed_line(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = paint(Tone::Muted, false, "│");
    format!("{} {}{}{}", border, content, " ".repeat(pad.saturating_sub(1)), border)
}

/// A titled box around `lines`.
pub fn boxed(label: &str, lines: &[String]) -> String {
    let head = format!("─ {} ", paint(Tone::Accent, true, label));
    let fill = BOX_WIDTH.saturating_sub(visible_len(&head));
    let mut out = vec![format!(
        "{}{}{}",
        paint(Tone::Muted, false, "┌"),
        head,
        paint(Tone::Muted, false, &format!("{}┐", "─".repeat(fill)))
    )];
    out.extend(lines.iter().map(|l| boxed_line(l)));
    out.push(paint(
        Tone::Muted,
        false,
        &format!("└{}┘", "─".repeat(BOX_WIDTH)),
    ));
    out.join("\n")
}

/// One result: rank, score, title, href and date.
pub fn result_lines(rank: usize, score: f64, summary: &ItemSummary<'_>) -> Vec<String> {
    let title = truncate(&summary.frontmatter.title, BOX_WIDTH - 16);
    vec![
        format!(
            "{:>2}. {}  {}",
            rank,
            score_badge(score),
            paint(Tone::Accent, true, &title)
        ),
        format!(
            "           {}  {}",
            paint(Tone::Muted, false, &summary.href),
            paint(Tone::Muted, false, &summary.datetime.format("%Y-%m-%d").to_string())
        ),
    ]
}
