//! # flexutils Inline Markup Renderer (`common::ui::markup`)
//!
//! File: cli/src/common/ui/markup.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Console messages may carry lightweight inline markup. Each span is bracketed
//! by a pair of delimiters and gets replaced by its content passed through a
//! style-specific transform (usually an ANSI color):
//!
//! | Style     | Markup          |
//! |-----------|-----------------|
//! | `bold`    | `**text**`      |
//! | `italic`  | `*text*`        |
//! | `code`    | `{{text}}`      |
//! | `link`    | `[[text]]`      |
//! | `success` | `++text++`      |
//! | `warning` | `!!text!!`      |
//! | `error`   | `--text--`      |
//! | `dim`     | `..text..`      |
//!
//! ## Resolution Order
//!
//! Resolution works style by style, not position by position. The table is
//! scanned in declaration order; the first rule with a span in the message has
//! its leftmost span substituted, then scanning restarts from the first rule
//! against the updated message. Rendering stops when no rule matches.
//!
//! The order of the standard table therefore decides how nested markup
//! resolves: `**a *b* c**` resolves the bold span first (outside-in), while
//! `*a **b** c*` also resolves the bold span first (inside-out). Keep the
//! restart-from-the-top loop; a single left-to-right pass changes the output
//! for nested and mixed markup.
//!
//! A span's content is at least one character and never crosses a line break
//! (`\n`, `\r`, U+2028 or U+2029).
//! Delimiters without a partner are left in the output verbatim.
//!
//! ## Usage
//!
//! ```rust
//! use flexutils::common::ui::markup::{StyleRule, StyleTable};
//!
//! let table = StyleTable::new(vec![
//!     StyleRule::new("bold", "**", "**", |s| format!("<b>{s}</b>")),
//!     StyleRule::new("italic", "*", "*", |s| format!("<i>{s}</i>")),
//! ]);
//!
//! assert_eq!(table.render("a **b** *c*"), "a <b>b</b> <i>c</i>");
//! assert_eq!(table.render("unmatched ** stays"), "unmatched ** stays");
//! assert_eq!(table.render_optional(None), None);
//! ```
//!
use console::Style;
use std::{fmt, ops::Range, sync::Arc};

/// Transform applied to the inner text of a matched span.
pub type RenderFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// # Style Rule (`StyleRule`)
///
/// One markup style: a name, the literal delimiters that bracket a span, and
/// the transform for the span's content. The delimiters may be identical
/// (`**` … `**`). Render functions must not emit delimiter literals of any
/// rule in the same table, otherwise rendering would not terminate.
#[derive(Clone)]
pub struct StyleRule {
    name: String,
    open: String,
    close: String,
    render: RenderFn,
}

impl StyleRule {
    pub fn new(
        name: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
        render: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            open: open.into(),
            close: close.into(),
            render: Arc::new(render),
        }
    }

    /// Builds a rule whose transform is a `console` style.
    pub fn styled(name: &str, open: &str, close: &str, style: Style) -> Self {
        Self::new(name, open, close, move |text| style.apply_to(text).to_string())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// # Find First Span (`find_span`)
    ///
    /// Locates the first span of this style: the leftmost position where the
    /// open delimiter is followed, on the same line, by at least one character
    /// and then the close delimiter. The shortest such span wins.
    ///
    /// Returns the byte range of the whole span (delimiters included) and the
    /// byte range of its content.
    fn find_span(&self, message: &str) -> Option<(Range<usize>, Range<usize>)> {
        if self.open.is_empty() || self.close.is_empty() {
            return None;
        }

        let mut search_from = 0;
        while let Some(offset) = message[search_from..].find(self.open.as_str()) {
            let start = search_from + offset;
            let inner_start = start + self.open.len();
            let line_end = message[inner_start..]
                .find(is_line_break)
                .map_or(message.len(), |i| inner_start + i);

            // Content must hold at least one character before the close delimiter.
            if let Some(first) = message[inner_start..line_end].chars().next() {
                let close_from = inner_start + first.len_utf8();
                if let Some(close_offset) = message[close_from..line_end].find(self.close.as_str())
                {
                    let inner_end = close_from + close_offset;
                    return Some((start..inner_end + self.close.len(), inner_start..inner_end));
                }
            }

            // Retry one character further so overlapping opens (e.g. `***`) are considered.
            search_from = start + message[start..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

impl fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRule")
            .field("name", &self.name)
            .field("open", &self.open)
            .field("close", &self.close)
            .finish_non_exhaustive()
    }
}

/// # Style Table (`StyleTable`)
///
/// Ordered, immutable list of style rules. The order is fixed when the table is
/// built and is the precedence used by [`StyleTable::render`].
#[derive(Clone, Debug)]
pub struct StyleTable {
    rules: Vec<StyleRule>,
}

impl StyleTable {
    pub fn new(rules: Vec<StyleRule>) -> Self {
        Self { rules }
    }

    /// # Standard Style Table (`standard`)
    ///
    /// The eight console styles in their precedence order:
    /// bold, italic, code, link, success, warning, error, dim.
    ///
    /// `colors` forces styling on or off; `None` follows terminal detection
    /// for stdout.
    pub fn standard(colors: Option<bool>) -> Self {
        let style = |s: Style| match colors {
            Some(enabled) => s.force_styling(enabled),
            None => s,
        };
        Self::new(vec![
            StyleRule::styled("bold", "**", "**", style(Style::new().bold())),
            StyleRule::styled("italic", "*", "*", style(Style::new().italic())),
            StyleRule::styled("code", "{{", "}}", style(Style::new().cyan())),
            StyleRule::styled("link", "[[", "]]", style(Style::new().blue().underlined())),
            StyleRule::styled("success", "++", "++", style(Style::new().green())),
            StyleRule::styled("warning", "!!", "!!", style(Style::new().yellow())),
            StyleRule::styled("error", "--", "--", style(Style::new().red())),
            StyleRule::styled("dim", "..", "..", style(Style::new().dim())),
        ])
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// # Render Markup (`render`)
    ///
    /// Resolves every span in `message` and returns the result. An empty
    /// message, or one with no spans, comes back unchanged.
    pub fn render(&self, message: &str) -> String {
        let mut current = message.to_string();
        // Each substitution restarts the scan from the first rule.
        while let Some((rule, span, inner)) = self.first_match(&current) {
            let replacement = (rule.render)(&current[inner]);
            tracing::trace!(style = rule.name(), "Resolved markup span");
            current.replace_range(span, &replacement);
        }
        current
    }

    /// Like [`StyleTable::render`], passing an absent message through as `None`.
    pub fn render_optional(&self, message: Option<&str>) -> Option<String> {
        message.map(|m| self.render(m))
    }

    fn first_match(&self, message: &str) -> Option<(&StyleRule, Range<usize>, Range<usize>)> {
        self.rules.iter().find_map(|rule| {
            rule.find_span(message)
                .map(|(span, inner)| (rule, span, inner))
        })
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::standard(None)
    }
}
