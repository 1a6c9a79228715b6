//! # flexutils Console Logger (`common::ui::logger`)
//!
//! File: cli/src/common/ui/logger.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! The user-facing console logger of the plugin tooling. Unlike the `tracing`
//! diagnostics used internally, everything written here is meant for the user:
//! progress notes, warnings, install hints and errors.
//!
//! ## Architecture
//!
//! - `Logger`: Holds `LoggerOptions`, the markup style tables and a `ConsoleWriter`.
//! - `LoggerOptions`: Explicit quiet/debug/trace/color overrides. A field left as
//!   `None` defers to the environment flags in `common::env` (or, for color, to
//!   terminal detection).
//! - `ConsoleWriter`: Where lines end up. `StdConsole` writes info lines to
//!   stdout and warnings/errors to stderr; `MemoryConsole` keeps them in memory.
//!
//! Every message goes through the same steps:
//! 1. Dropped when quiet mode is on, unless it is an error.
//! 2. Inline markup (`**bold**`, `{{code}}`, ...) is rendered (see `markup`).
//! 3. The level color, if any, is applied to the whole line.
//!
//! `Logger::plain` skips steps 2 and 3 for text that is not markup (child
//! process output, command lines, tables).
//!
//! | Method      | Stream | Color  | Shown when          |
//! |-------------|--------|--------|---------------------|
//! | `debug`     | stdout | -      | debug or trace mode |
//! | `trace`     | stdout | -      | trace mode          |
//! | `info`      | stdout | -      | not quiet           |
//! | `success`   | stdout | green  | not quiet           |
//! | `notice`    | stdout | cyan   | not quiet           |
//! | `warning`   | stderr | yellow | not quiet           |
//! | `error`     | stderr | red    | always              |
//!
//! ## Usage
//!
//! ```rust
//! use flexutils::common::ui::logger::{Level, Logger, LoggerOptions, MemoryConsole};
//! use std::sync::Arc;
//!
//! let console = Arc::new(MemoryConsole::default());
//! let logger = Logger::with_console(
//!     LoggerOptions { color: Some(false), quiet: Some(false), ..Default::default() },
//!     console.clone(),
//! );
//!
//! logger.info("Run {{npm install}} first");
//! logger.error("**Build failed**");
//!
//! assert_eq!(
//!     console.lines(),
//!     vec![
//!         (Level::Info, "Run npm install first".to_string()),
//!         (Level::Error, "Build failed".to_string()),
//!     ]
//! );
//! ```
//!
//! The module-level functions (`info`, `warning`, ...) log through a shared,
//! environment-driven default logger.
//!
use crate::common::{env, strings::single_line_string, ui::markup::StyleTable};
use console::{Style, Term};
use once_cell::sync::Lazy;
use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// Console stream selector for a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Whole-line colors used by the level methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineColor {
    Red,
    Yellow,
    Green,
    Cyan,
}

impl LineColor {
    fn style(self) -> Style {
        match self {
            LineColor::Red => Style::new().red(),
            LineColor::Yellow => Style::new().yellow(),
            LineColor::Green => Style::new().green(),
            LineColor::Cyan => Style::new().cyan(),
        }
    }
}

/// # Console Writer (`ConsoleWriter`)
///
/// Destination of the logger's output.
pub trait ConsoleWriter: Send + Sync {
    /// Writes one complete line for the given level.
    fn write_line(&self, level: Level, line: &str);

    /// Writes raw text (control sequences) to the primary output.
    fn write_raw(&self, text: &str);

    /// Whether the stream used for `level` supports colors.
    fn colors_enabled(&self, level: Level) -> bool;
}

/// The process console: info lines on stdout, warnings and errors on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl StdConsole {
    fn term(level: Level) -> Term {
        match level {
            Level::Info => Term::stdout(),
            Level::Warn | Level::Error => Term::stderr(),
        }
    }
}

impl ConsoleWriter for StdConsole {
    fn write_line(&self, level: Level, line: &str) {
        // A closed pipe must not take the tool down with it.
        if let Err(e) = Self::term(level).write_line(line) {
            tracing::debug!("Failed to write console line: {}", e);
        }
    }

    fn write_raw(&self, text: &str) {
        if let Err(e) = Term::stdout().write_str(text) {
            tracing::debug!("Failed to write to console: {}", e);
        }
    }

    fn colors_enabled(&self, level: Level) -> bool {
        match level {
            Level::Info => console::colors_enabled(),
            Level::Warn | Level::Error => console::colors_enabled_stderr(),
        }
    }
}

/// Keeps everything written in memory. Never reports color support.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<(Level, String)>>,
    raw: Mutex<String>,
}

impl MemoryConsole {
    /// All lines written so far, in order.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Lines written at `level`, without the level tag.
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line)
            .collect()
    }

    /// Raw text written through `write_raw`.
    pub fn raw(&self) -> String {
        self.raw.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ConsoleWriter for MemoryConsole {
    fn write_line(&self, level: Level, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, line.to_string()));
        }
    }

    fn write_raw(&self, text: &str) {
        if let Ok(mut raw) = self.raw.lock() {
            raw.push_str(text);
        }
    }

    fn colors_enabled(&self, _level: Level) -> bool {
        false
    }
}

/// Explicit overrides for a `Logger`. `None` defers to the environment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoggerOptions {
    pub quiet: Option<bool>,
    pub debug: Option<bool>,
    pub trace: Option<bool>,
    /// Force colors on or off; `None` follows terminal detection per stream.
    pub color: Option<bool>,
}

/// Control sequence clearing the screen and scrollback.
const CLEAR_UNIX: &str = "\x1B[2J\x1B[3J\x1B[H";
const CLEAR_WIN32: &str = "\x1B[2J\x1B[0f";

/// # Logger (`Logger`)
///
/// See the module documentation for the logging pipeline.
pub struct Logger {
    options: LoggerOptions,
    plain_markup: StyleTable,
    styled_markup: StyleTable,
    console: Arc<dyn ConsoleWriter>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl Logger {
    /// Creates a logger writing to the process console.
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_console(options, Arc::new(StdConsole))
    }

    pub fn with_console(options: LoggerOptions, console: Arc<dyn ConsoleWriter>) -> Self {
        Self {
            options,
            plain_markup: StyleTable::standard(Some(false)),
            styled_markup: StyleTable::standard(Some(true)),
            console,
        }
    }

    /// Replaces the markup style table used for every message.
    pub fn with_markup(mut self, table: StyleTable) -> Self {
        self.plain_markup = table.clone();
        self.styled_markup = table;
        self
    }

    pub fn options(&self) -> LoggerOptions {
        self.options
    }

    /// Logged at info level, only in debug mode.
    pub fn debug(&self, msg: impl fmt::Display) {
        if self.is_debug() {
            self.log(Level::Info, None, &msg.to_string());
        }
    }

    /// Logged at info level, only in trace mode.
    pub fn trace(&self, msg: impl fmt::Display) {
        if self.is_trace() {
            self.log(Level::Info, None, &msg.to_string());
        }
    }

    pub fn info(&self, msg: impl fmt::Display) {
        self.log(Level::Info, None, &msg.to_string());
    }

    pub fn success(&self, msg: impl fmt::Display) {
        self.log(Level::Info, Some(LineColor::Green), &msg.to_string());
    }

    pub fn error(&self, msg: impl fmt::Display) {
        self.log(Level::Error, Some(LineColor::Red), &msg.to_string());
    }

    pub fn warning(&self, msg: impl fmt::Display) {
        self.log(Level::Warn, Some(LineColor::Yellow), &msg.to_string());
    }

    /// Info level in cyan.
    pub fn notice(&self, msg: impl fmt::Display) {
        self.log(Level::Info, Some(LineColor::Cyan), &msg.to_string());
    }

    /// # Append Empty Lines (`newline`)
    ///
    /// Logs `lines` empty info lines.
    pub fn newline(&self, lines: usize) {
        for _ in 0..lines {
            self.info("");
        }
    }

    /// # Show Shell Command (`install_info`)
    ///
    /// Shows a shell command the user is expected to run, e.g.
    /// `install_info("npm", &["install", "foo"])` logs a tab-indented
    /// `npm install foo` with the command in cyan.
    pub fn install_info(&self, command: &str, args: &[&str]) {
        let colors = self.colors_enabled(Level::Info);
        let command = Style::new()
            .cyan()
            .force_styling(colors)
            .apply_to(command)
            .to_string();

        let mut parts = vec!["\t".to_string(), command];
        parts.extend(args.iter().map(|a| a.to_string()));
        self.plain(Level::Info, single_line_string(&parts));
    }

    /// # Log Verbatim (`plain`)
    ///
    /// Writes `text` at `level` as is: no markup rendering and no level color.
    /// Meant for text that is not markup, such as child process output, command
    /// lines and pre-drawn tables. Quiet mode still drops it unless `level` is
    /// `Level::Error`.
    pub fn plain(&self, level: Level, text: impl fmt::Display) {
        if self.suppressed(level) {
            return;
        }
        self.console.write_line(level, &text.to_string());
    }

    /// # Clear Terminal (`clear_terminal`)
    ///
    /// Clears the screen unless the terminal is persisted (`PERSIST_TERMINAL`).
    /// `forced` clears regardless.
    pub fn clear_terminal(&self, forced: bool) {
        if forced || !env::is_terminal_persisted() {
            let sequence = if env::is_win32() {
                CLEAR_WIN32
            } else {
                CLEAR_UNIX
            };
            self.console.write_raw(sequence);
        }
    }

    /// Trace mode implies debug mode.
    pub fn is_debug(&self) -> bool {
        self.is_trace() || self.options.debug.unwrap_or_else(env::is_debug)
    }

    pub fn is_trace(&self) -> bool {
        self.options.trace.unwrap_or_else(env::is_trace)
    }

    pub fn is_quiet(&self) -> bool {
        self.options.quiet.unwrap_or_else(env::is_quiet)
    }

    /// Renders the inline markup of `msg` the way this logger would for info lines.
    pub fn markdown(&self, msg: &str) -> String {
        self.markdown_for(Level::Info, msg)
    }

    /// Renders the inline markup of `msg` with the colors of the `level` stream.
    pub fn markdown_for(&self, level: Level, msg: &str) -> String {
        self.markup_for(self.colors_enabled(level)).render(msg)
    }

    /// Whether output at `level` is colored: the `color` option when set,
    /// otherwise the console's detection for that stream.
    pub fn colors_enabled(&self, level: Level) -> bool {
        self.options
            .color
            .unwrap_or_else(|| self.console.colors_enabled(level))
    }

    fn markup_for(&self, colors: bool) -> &StyleTable {
        if colors {
            &self.styled_markup
        } else {
            &self.plain_markup
        }
    }

    fn suppressed(&self, level: Level) -> bool {
        self.is_quiet() && level != Level::Error
    }

    fn log(&self, level: Level, color: Option<LineColor>, msg: &str) {
        if self.suppressed(level) {
            return;
        }

        let colors = self.colors_enabled(level);
        let rendered = self.markup_for(colors).render(msg);
        let line = match color {
            Some(color) => color
                .style()
                .force_styling(colors)
                .apply_to(rendered)
                .to_string(),
            None => rendered,
        };
        self.console.write_line(level, &line);
    }
}

/// The environment-driven default logger.
static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::default);

/// Shared default logger; quiet/debug/trace follow the environment flags.
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

pub fn debug(msg: impl fmt::Display) {
    logger().debug(msg);
}

pub fn trace(msg: impl fmt::Display) {
    logger().trace(msg);
}

pub fn info(msg: impl fmt::Display) {
    logger().info(msg);
}

pub fn success(msg: impl fmt::Display) {
    logger().success(msg);
}

pub fn warning(msg: impl fmt::Display) {
    logger().warning(msg);
}

pub fn error(msg: impl fmt::Display) {
    logger().error(msg);
}

pub fn notice(msg: impl fmt::Display) {
    logger().notice(msg);
}

pub fn newline(lines: usize) {
    logger().newline(lines);
}

pub fn install_info(command: &str, args: &[&str]) {
    logger().install_info(command, args);
}

pub fn clear_terminal(forced: bool) {
    logger().clear_terminal(forced);
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [env::QUIET, env::DEBUG, env::TRACE, env::PERSIST_TERMINAL] {
            std::env::remove_var(name);
        }
    }

    /// Logger with colors off and quiet mode pinned off, plus its console.
    fn capture(options: LoggerOptions) -> (Logger, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::default());
        let options = LoggerOptions {
            color: Some(false),
            quiet: options.quiet.or(Some(false)),
            ..options
        };
        (Logger::with_console(options, console.clone()), console)
    }

    #[test]
    fn test_info_goes_to_info_stream() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.info(single_line_string(&["var1", "var2"]));
        assert_eq!(console.lines(), vec![(Level::Info, "var1 var2".to_string())]);
    }

    #[test]
    fn test_levels_and_streams() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.warning("warn");
        logger.error("err");
        logger.success("ok");
        logger.notice("note");

        assert_eq!(
            console.lines(),
            vec![
                (Level::Warn, "warn".to_string()),
                (Level::Error, "err".to_string()),
                (Level::Info, "ok".to_string()),
                (Level::Info, "note".to_string()),
            ]
        );
    }

    #[test]
    fn test_level_colors_applied_when_enabled() {
        let console = Arc::new(MemoryConsole::default());
        let logger = Logger::with_console(
            LoggerOptions {
                color: Some(true),
                quiet: Some(false),
                ..Default::default()
            },
            console.clone(),
        );

        logger.error("var1 var2");
        logger.info("plain");

        let lines = console.lines();
        let red = Style::new().red().force_styling(true);
        assert_eq!(lines[0].1, red.apply_to("var1 var2").to_string());
        assert_eq!(lines[1].1, "plain");
    }

    #[test]
    fn test_markup_rendered() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.info("text with **bold word** and {{code}}");
        assert_eq!(console.lines_at(Level::Info), vec!["text with bold word and code"]);
    }

    #[test]
    fn test_markdown_helper_matches_logged_output() {
        let (logger, _console) = capture(LoggerOptions::default());
        assert_eq!(logger.markdown("[[https://example.com]]"), "https://example.com");
    }

    #[test]
    fn test_newline() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.newline(1);
        assert_eq!(console.lines().len(), 1);
        logger.newline(3);
        assert_eq!(console.lines_at(Level::Info), vec!["", "", "", ""]);
    }

    #[test]
    fn test_install_info() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.install_info("cmd", &["arg1", "arg2"]);
        assert_eq!(console.lines_at(Level::Info), vec!["\t cmd arg1 arg2"]);
    }

    #[test]
    fn test_install_info_keeps_flags_verbatim() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.install_info("npm", &["install", "--save-dev", "--force", "*.js"]);
        assert_eq!(
            console.lines_at(Level::Info),
            vec!["\t npm install --save-dev --force *.js"]
        );
    }

    #[test]
    fn test_plain_skips_markup_but_honours_quiet() {
        let (logger, console) = capture(LoggerOptions::default());
        logger.plain(Level::Info, "copied ../src to ../dist");
        logger.plain(Level::Warn, "npm WARN --legacy-peer-deps--");
        assert_eq!(
            console.lines(),
            vec![
                (Level::Info, "copied ../src to ../dist".to_string()),
                (Level::Warn, "npm WARN --legacy-peer-deps--".to_string()),
            ]
        );

        let (logger, console) = capture(LoggerOptions {
            quiet: Some(true),
            ..Default::default()
        });
        logger.plain(Level::Info, "hidden");
        logger.plain(Level::Error, "**shown**");
        assert_eq!(console.lines(), vec![(Level::Error, "**shown**".to_string())]);
    }

    #[test]
    fn test_trace_option_implies_debug() {
        let (logger, console) = capture(LoggerOptions {
            debug: Some(false),
            trace: Some(true),
            ..Default::default()
        });
        assert!(logger.is_debug());
        logger.debug("d");
        assert_eq!(console.lines_at(Level::Info), vec!["d"]);
    }

    #[test]
    fn test_quiet_suppresses_all_but_errors() {
        let (logger, console) = capture(LoggerOptions {
            quiet: Some(true),
            debug: Some(true),
            ..Default::default()
        });
        logger.info("blah");
        logger.warning("blah");
        logger.debug("blah");
        logger.error("blah");
        assert_eq!(console.lines(), vec![(Level::Error, "blah".to_string())]);
    }

    #[test]
    fn test_debug_option_overrides_env() {
        let (logger, console) = capture(LoggerOptions {
            debug: Some(true),
            trace: Some(false),
            ..Default::default()
        });
        logger.debug("var1 var2");
        assert_eq!(console.lines_at(Level::Info), vec!["var1 var2"]);

        let (logger, console) = capture(LoggerOptions {
            debug: Some(false),
            trace: Some(false),
            ..Default::default()
        });
        logger.debug("var1 var2");
        assert!(console.lines().is_empty());
    }

    #[test]
    #[serial]
    fn test_debug_from_env() {
        clear_env();
        let (logger, console) = capture(LoggerOptions::default());
        logger.debug("hidden");
        assert!(console.lines().is_empty());

        std::env::set_var(env::DEBUG, "true");
        logger.debug("shown");
        assert_eq!(console.lines_at(Level::Info), vec!["shown"]);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_trace_env_enables_debug_and_trace() {
        clear_env();
        std::env::set_var(env::TRACE, "true");
        let (logger, console) = capture(LoggerOptions::default());
        logger.debug("d");
        logger.trace("t");
        assert_eq!(console.lines_at(Level::Info), vec!["d", "t"]);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_trace_option_overrides_env() {
        clear_env();
        std::env::set_var(env::TRACE, "true");
        let (logger, console) = capture(LoggerOptions {
            trace: Some(false),
            ..Default::default()
        });
        assert!(!logger.is_trace());
        logger.trace("t");
        assert!(console.lines().is_empty());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_quiet_from_env() {
        clear_env();
        let logger =
            Logger::with_console(LoggerOptions::default(), Arc::new(MemoryConsole::default()));
        assert!(!logger.is_quiet());
        std::env::set_var(env::QUIET, "true");
        assert!(logger.is_quiet());

        let pinned = Logger::with_console(
            LoggerOptions {
                quiet: Some(false),
                ..Default::default()
            },
            Arc::new(MemoryConsole::default()),
        );
        assert!(!pinned.is_quiet());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_clear_terminal_respects_persisted_terminal() {
        clear_env();
        let (logger, console) = capture(LoggerOptions::default());
        logger.clear_terminal(false);
        assert!(!console.raw().is_empty());

        let (logger, console) = capture(LoggerOptions::default());
        env::persist_terminal();
        logger.clear_terminal(false);
        assert!(console.raw().is_empty());

        logger.clear_terminal(true);
        assert!(console.raw().starts_with("\x1B[2J"));
        clear_env();
    }

    #[test]
    fn test_custom_markup_table() {
        use crate::common::ui::markup::StyleRule;

        let (logger, console) = capture(LoggerOptions::default());
        let logger = logger.with_markup(StyleTable::new(vec![StyleRule::new(
            "shout",
            "<<",
            ">>",
            |s| s.to_uppercase(),
        )]));
        logger.info("say <<hello>> **there**");
        assert_eq!(console.lines_at(Level::Info), vec!["say HELLO **there**"]);
    }
}
