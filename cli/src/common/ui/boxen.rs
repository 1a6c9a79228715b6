//! # flexutils Boxed Messages (`common::ui::boxen`)
//!
//! File: cli/src/common/ui/boxen.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Banner messages drawn inside a rounded box, used for notices that should
//! stand out from regular log lines (deprecations, failed installs, ...):
//!
//! ```text
//! ╭─────────────────────────╮
//! │                         │
//! │   Run npm install first │
//! │                         │
//! ╰─────────────────────────╯
//! ```
//!
//! The message goes through the logger's inline markup first; the box itself
//! is printed verbatim so its borders are never mistaken for markup.
//!
//! | Function  | Stream | Border |
//! |-----------|--------|--------|
//! | `error`   | stderr | red    |
//! | `warning` | stderr | yellow |
//! | `info`    | stdout | green  |
//! | `print`   | stdout | none   |
//!
use crate::common::ui::logger::{self, Level, Logger};
use console::{measure_text_width, pad_str, Alignment, Style};

/// Blank columns between the border and the text.
const PADDING_X: usize = 3;
/// Blank lines above and below the text.
const PADDING_Y: usize = 1;

/// Border colors available to [`print_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxColor {
    Red,
    Yellow,
    Green,
}

impl BoxColor {
    fn style(self) -> Style {
        match self {
            BoxColor::Red => Style::new().red(),
            BoxColor::Yellow => Style::new().yellow(),
            BoxColor::Green => Style::new().green(),
        }
    }
}

/// # Draw Box (`format_box`)
///
/// Draws `message` inside a rounded box. Every line of the message is padded
/// to the widest one; widths ignore ANSI escape sequences.
///
/// ## Arguments
///
/// * `message` - Text to box; may span several lines.
/// * `border` - Style applied to the border characters.
///
/// ## Returns
///
/// * `String` - The box, lines joined by `\n`, without a trailing newline.
pub fn format_box(message: &str, border: &Style) -> String {
    let lines: Vec<&str> = if message.is_empty() {
        vec![""]
    } else {
        message.lines().collect()
    };
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let inner = width + 2 * PADDING_X;

    let side = border.apply_to("│").to_string();
    let gap = " ".repeat(PADDING_X);
    let blank = format!("{}{}{}", side, " ".repeat(inner), side);

    let mut out = Vec::with_capacity(lines.len() + 2 + 2 * PADDING_Y);
    out.push(border.apply_to(format!("╭{}╮", "─".repeat(inner))).to_string());
    out.extend(std::iter::repeat(blank.clone()).take(PADDING_Y));
    for line in lines {
        out.push(format!(
            "{}{}{}{}{}",
            side,
            gap,
            pad_str(line, width, Alignment::Left, None),
            gap,
            side
        ));
    }
    out.extend(std::iter::repeat(blank).take(PADDING_Y));
    out.push(border.apply_to(format!("╰{}╯", "─".repeat(inner))).to_string());
    out.join("\n")
}

/// # Print Boxed Message (`print_with`)
///
/// Renders the markup of `message`, boxes it and writes the box through
/// `logger` at `level`. Quiet mode drops it unless `level` is `Level::Error`.
pub fn print_with(logger: &Logger, level: Level, color: Option<BoxColor>, message: &str) {
    let colors = logger.colors_enabled(level);
    let border = color
        .map_or_else(Style::new, BoxColor::style)
        .force_styling(colors);
    let rendered = logger.markdown_for(level, message);
    logger.plain(level, format_box(&rendered, &border));
}

pub fn error_with(logger: &Logger, message: &str) {
    print_with(logger, Level::Error, Some(BoxColor::Red), message);
}

pub fn warning_with(logger: &Logger, message: &str) {
    print_with(logger, Level::Warn, Some(BoxColor::Yellow), message);
}

pub fn info_with(logger: &Logger, message: &str) {
    print_with(logger, Level::Info, Some(BoxColor::Green), message);
}

/// Boxed error through the default logger.
pub fn error(message: &str) {
    error_with(logger::logger(), message);
}

/// Boxed warning through the default logger.
pub fn warning(message: &str) {
    warning_with(logger::logger(), message);
}

/// Boxed info through the default logger.
pub fn info(message: &str) {
    info_with(logger::logger(), message);
}

/// Uncolored box at info level through the default logger.
pub fn print(message: &str) {
    print_with(logger::logger(), Level::Info, None, message);
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::logger::{LoggerOptions, MemoryConsole};
    use std::sync::Arc;

    fn capture(quiet: bool) -> (Logger, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::default());
        let options = LoggerOptions {
            quiet: Some(quiet),
            color: Some(false),
            ..Default::default()
        };
        (Logger::with_console(options, console.clone()), console)
    }

    #[test]
    fn test_format_box_single_line() {
        let boxed = format_box("hi", &Style::new().force_styling(false));
        assert_eq!(
            boxed,
            [
                "╭────────╮",
                "│        │",
                "│   hi   │",
                "│        │",
                "╰────────╯",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_format_box_pads_to_widest_line() {
        let boxed = format_box("a\nlonger", &Style::new().force_styling(false));
        let lines: Vec<&str> = boxed.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "│   a        │");
        assert_eq!(lines[3], "│   longer   │");
    }

    #[test]
    fn test_format_box_ignores_ansi_width() {
        let bold = Style::new().bold().force_styling(true);
        let text = bold.apply_to("ab").to_string();
        let boxed = format_box(&text, &Style::new().force_styling(false));
        assert!(boxed.starts_with("╭────────╮"));
        assert!(boxed.contains(&format!("│   {}   │", text)));
    }

    #[test]
    fn test_format_box_empty_message() {
        let boxed = format_box("", &Style::new().force_styling(false));
        assert_eq!(boxed.lines().nth(2), Some("│      │"));
    }

    #[test]
    fn test_boxes_go_to_level_streams() {
        let (logger, console) = capture(false);
        error_with(&logger, "boom");
        warning_with(&logger, "careful");
        info_with(&logger, "Run {{npm install}} first");

        assert!(console.lines_at(Level::Error)[0].contains("│   boom   │"));
        assert!(console.lines_at(Level::Warn)[0].contains("│   careful   │"));
        assert!(console.lines_at(Level::Info)[0].contains("│   Run npm install first   │"));
    }

    #[test]
    fn test_border_colored_when_enabled() {
        let console = Arc::new(MemoryConsole::default());
        let logger = Logger::with_console(
            LoggerOptions {
                quiet: Some(false),
                color: Some(true),
                ..Default::default()
            },
            console.clone(),
        );
        error_with(&logger, "x");

        let red = Style::new().red().force_styling(true);
        let boxed = &console.lines_at(Level::Error)[0];
        assert!(boxed.starts_with(&red.apply_to("╭───────╮").to_string()));
    }

    #[test]
    fn test_quiet_keeps_only_error_boxes() {
        let (logger, console) = capture(true);
        info_with(&logger, "hidden");
        warning_with(&logger, "hidden");
        error_with(&logger, "shown");

        assert_eq!(console.lines().len(), 1);
        assert_eq!(console.lines()[0].0, Level::Error);
    }
}
