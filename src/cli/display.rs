// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the swapwise CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Theme detection tries
//! `SWAPWISE_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops all escapes when stdout is not a TTY.
//!
//! Each case prints as a pair of lines, original then result, with zeros
//! dimmed so the zero push is easy to see at a glance.

use std::io::{self, Write};
use std::sync::OnceLock;

use swapwise::Operation;

use super::cases::CaseOutcome;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is a light terminal
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("SWAPWISE_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Render values as `[a, b, c]`, dimming zeros.
pub fn format_values(values: &[i64]) -> String {
    let colors = use_colors();
    let items: Vec<String> = values
        .iter()
        .map(|&v| {
            if colors && v == 0 {
                format!("{}{}{}", DIM, v, RESET)
            } else {
                v.to_string()
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}

/// Label for the result line, matching the operation's verb.
fn result_label(operation: Operation) -> &'static str {
    match operation {
        Operation::Reverse => "Reversed:",
        Operation::PushZeros => "Result:  ",
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Write a heading for a group of cases.
pub fn heading<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", themed(CYAN, &[BOLD], text))
}

/// Write one case: original, result, and the verification verdict if any.
pub fn print_case<W: Write>(out: &mut W, outcome: &CaseOutcome) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        themed(GRAY, &[], "Original:"),
        format_values(&outcome.original)
    )?;
    writeln!(
        out,
        "{} {}",
        themed(BLUE, &[BOLD], result_label(outcome.operation)),
        format_values(&outcome.result)
    )?;
    match outcome.verified {
        Some(true) => writeln!(out, "{}", themed(GREEN, &[], "✓ verified"))?,
        Some(false) => {
            writeln!(out, "{}", themed(RED, &[BOLD], "✗ verification failed"))?;
            for violation in &outcome.violations {
                writeln!(out, "  {}", themed(RED, &[], violation))?;
            }
        }
        None => {}
    }
    writeln!(out)
}

/// Write every case, grouping consecutive cases under their operation name.
pub fn print_cases<W: Write>(out: &mut W, outcomes: &[CaseOutcome]) -> io::Result<()> {
    let mut current: Option<Operation> = None;
    for outcome in outcomes {
        if current != Some(outcome.operation) {
            heading(out, &format!("── {} ──", outcome.operation))?;
            current = Some(outcome.operation);
        }
        print_case(out, outcome)?;
    }
    Ok(())
}
