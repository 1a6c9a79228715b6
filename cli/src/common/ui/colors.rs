//! # flexutils Colored Strings (`common::ui::colors`)
//!
//! File: cli/src/common/ui/colors.rs
//! Author: Christi Mahu
//!
//! Named colorings for recurring kinds of console text. Colors are emitted only
//! when `console` detects a color-capable stdout (honouring `CLICOLOR`,
//! `CLICOLOR_FORCE` and `NO_COLOR`).
//!
use console::style;

/// URLs and documentation links (blue).
pub fn link(text: &str) -> String {
    style(text).blue().to_string()
}

/// Section headlines (bold green).
pub fn headline(text: &str) -> String {
    style(text).bold().green().to_string()
}

/// Plugin and package names (bold magenta).
pub fn name(text: &str) -> String {
    style(text).bold().magenta().to_string()
}

/// Versions, counts and other numbers (cyan).
pub fn digit(text: &str) -> String {
    style(text).cyan().to_string()
}
