// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the glean CLI.
//!
//! Highlights show as bold yellow on dark terminals and bold blue on light
//! ones. The theme comes from `GLEAN_THEME` ("dark" or "light"), then the
//! `COLORFGBG` hint some terminals set, then defaults to dark. `NO_COLOR` and
//! non-TTY stdout turn styling off entirely, so piped output stays plain.

use std::sync::OnceLock;

use glean::{FieldStats, Highlighted, RenderedResult, SegmentKind};

pub const BOX_WIDTH: usize = 72;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("GLEAN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Highlight color for the current theme.
pub fn accent() -> String {
    match theme() {
        Theme::Dark => rgb((229, 192, 123)),
        Theme::Light => rgb((64, 120, 242)),
    }
}

/// Secondary text (urls, dates, borders).
pub fn muted() -> String {
    match theme() {
        Theme::Dark => rgb((92, 99, 112)),
        Theme::Light => rgb((160, 161, 167)),
    }
}

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap text in styles when colors are on.
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.concat(), text, RESET)
    } else {
        text.to_string()
    }
}

/// A highlighted field for the terminal. Without colors, highlights are
/// bracketed so they still stand out.
pub fn highlighted(field: &Highlighted) -> String {
    let colors = use_colors();
    let accent = accent();
    field
        .segments
        .iter()
        .map(|segment| match segment.kind {
            SegmentKind::Plain => segment.text.clone(),
            SegmentKind::Highlight if colors => {
                format!("{}{}{}{}", BOLD, accent, segment.text, RESET)
            }
            SegmentKind::Highlight => format!("[{}]", segment.text),
        })
        .collect()
}

pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        styled(&[&muted()], "┌"),
        label_part,
        styled(&[&muted()], &"─".repeat(remaining))
    );
}

pub fn section_bot() {
    println!("{}", styled(&[&muted()], &format!("└{}", "─".repeat(BOX_WIDTH))));
}

/// Length of a string as displayed, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// One result: title and date, url, description, snippet.
pub fn print_result(rank: usize, result: &RenderedResult) {
    let bar = styled(&[&muted()], "│");
    println!(
        "{} {}. {}  {}",
        bar,
        rank,
        styled(&[BOLD], &highlighted(&result.title)),
        styled(&[DIM], &result.date)
    );
    println!("{}    {}", bar, styled(&[&muted()], &result.url));
    if !result.description.text().is_empty() {
        println!("{}    {}", bar, highlighted(&result.description));
    }
    if !result.content.text().is_empty() {
        println!("{}    {}", bar, styled(&[DIM], &highlighted(&result.content)));
    }
}

pub fn print_field_stats(stats: &[FieldStats]) {
    let bar = styled(&[&muted()], "│");
    println!(
        "{} {:<12} {:>10} {:>10} {:>12}",
        bar, "field", "documents", "terms", "avg tokens"
    );
    for s in stats {
        println!(
            "{} {:<12} {:>10} {:>10} {:>12.1}",
            bar,
            s.field.as_str(),
            s.documents,
            s.terms,
            s.average_length
        );
    }
}
