//! # flexutils ANSI-Aware Word Wrapping (`common::ui::wrap`)
//!
//! File: cli/src/common/ui/wrap.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Wraps console text to a column limit. Widths are measured on the visible
//! text only: ANSI escape sequences produced by the logger's colors and the
//! markup renderer do not count towards the limit.
//!
//! Existing line breaks are kept, and each line is wrapped at spaces. A word
//! wider than the limit is broken across lines when `hard` is set (the
//! default) and left to overflow otherwise.
//!
//! ```rust
//! use flexutils::common::ui::wrap::{wrap, WrapOptions};
//!
//! assert_eq!(wrap("the quick brown fox", 10, WrapOptions::default()), "the quick\nbrown fox");
//! assert_eq!(wrap("abcdefgh", 3, WrapOptions { hard: true }), "abc\ndef\ngh");
//! assert_eq!(wrap("abcdefgh", 3, WrapOptions { hard: false }), "abcdefgh");
//! ```
//!
use console::{measure_text_width, AnsiCodeIterator};

/// Options for [`wrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapOptions {
    /// Break words that are wider than the column limit.
    pub hard: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self { hard: true }
    }
}

/// Accumulates wrapped rows for a single input line.
struct Rows {
    rows: Vec<String>,
    width: usize,
}

impl Rows {
    fn new() -> Self {
        Self {
            rows: vec![String::new()],
            width: 0,
        }
    }

    fn current(&mut self) -> &mut String {
        // `rows` always holds at least one row.
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    fn break_row(&mut self) {
        self.rows.push(String::new());
        self.width = 0;
    }

    fn push_visible(&mut self, text: &str, width: usize) {
        self.current().push_str(text);
        self.width += width;
    }

    fn push_escape(&mut self, escape: &str) {
        self.current().push_str(escape);
    }

    /// Pushes `word` one character at a time, breaking whenever the row is full.
    fn push_broken(&mut self, word: &str, columns: usize) {
        for (segment, is_ansi) in AnsiCodeIterator::new(word) {
            if is_ansi {
                self.push_escape(segment);
                continue;
            }
            let mut buf = [0u8; 4];
            for ch in segment.chars() {
                let ch = ch.encode_utf8(&mut buf);
                let ch_width = measure_text_width(ch);
                if self.width > 0 && self.width + ch_width > columns {
                    self.break_row();
                }
                self.push_visible(ch, ch_width);
            }
        }
    }

    fn finish(self) -> String {
        self.rows.join("\n")
    }
}

/// # Wrap Text (`wrap`)
///
/// Wraps `input` so no line is wider than `columns` visible columns (see
/// the module docs for how long words are handled). A `columns` value of `0`
/// disables wrapping.
pub fn wrap(input: &str, columns: usize, options: WrapOptions) -> String {
    if columns == 0 {
        return input.to_string();
    }
    input
        .split('\n')
        .map(|line| wrap_line(line, columns, options.hard))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, columns: usize, hard: bool) -> String {
    let mut rows = Rows::new();

    for (index, word) in line.split(' ').enumerate() {
        let word_width = measure_text_width(word);

        if index > 0 {
            if rows.width > 0 && rows.width + 1 + word_width > columns {
                rows.break_row();
            } else {
                rows.push_visible(" ", 1);
            }
        }

        if hard && word_width > columns {
            if rows.width > 0 && rows.width + word_width > columns {
                rows.break_row();
            }
            rows.push_broken(word, columns);
        } else {
            rows.push_visible(word, word_width);
        }
    }

    rows.finish()
}
