//! # flexutils Progress Spinner (`common::ui::progress`)
//!
//! File: cli/src/common/ui/progress.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Wraps a long-running async action in a terminal spinner (`indicatif`). The
//! spinner starts before the action runs, turns into a green `✔ <title>` line
//! when it succeeds, and into a red `✖ <error>` line when it fails. The
//! action's own result, success or error, is handed back untouched.
//!
//! ## Spinner Modes
//!
//! - **Hidden**: Nothing is drawn. Used when progress is disabled, which is the
//!   default in quiet mode (`QUIET=true`).
//! - **Static**: No animation, only the final `✔`/`✖` line. Used in debug or
//!   trace mode so spinner frames do not interleave with debug output, and
//!   when stderr is not a terminal.
//! - **Animated**: A ticking spinner on stderr.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flexutils::common::ui::progress::{progress, ProgressOptions};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let version = progress(
//!     "Resolving plugin version",
//!     |spinner| async move {
//!         spinner.set_text("Contacting registry");
//!         Ok::<_, anyhow::Error>("1.2.3".to_string())
//!     },
//!     ProgressOptions::default(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::env;
use crate::core::error::Result;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    future::Future,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing::debug;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Options for [`progress`] and [`Spinner::for_options`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOptions {
    /// Draw nothing at all. Defaults to quiet mode.
    pub disabled: Option<bool>,
    /// Force the animation on or off. Defaults to off in debug/trace mode.
    pub enabled: Option<bool>,
}

/// Lifecycle of a spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    Idle,
    Spinning,
    Succeeded,
    Failed,
}

#[derive(Clone)]
enum Mode {
    Hidden,
    Static,
    Animated(ProgressBar),
}

/// # Spinner (`Spinner`)
///
/// Handle to a progress spinner. Cheap to clone; all clones drive the same
/// spinner, so the handle given to a `progress` action can update the text
/// while the wrapper still owns the final state.
#[derive(Clone)]
pub struct Spinner {
    mode: Mode,
    text: Arc<Mutex<String>>,
    state: Arc<Mutex<SpinnerState>>,
}

impl Spinner {
    /// A spinner that never draws anything.
    pub fn hidden(text: &str) -> Self {
        Self::with_mode(text, Mode::Hidden)
    }

    /// # Spinner From Options (`for_options`)
    ///
    /// Picks the spinner mode for `text` from the options and the environment
    /// (see the module docs).
    pub fn for_options(text: &str, options: ProgressOptions) -> Self {
        if options.disabled.unwrap_or_else(env::is_quiet) {
            debug!("Progress disabled for '{}'", text);
            return Self::hidden(text);
        }

        let animate = match options.enabled {
            Some(enabled) => enabled,
            None => !(env::is_debug() || env::is_trace()) && Term::stderr().is_term(),
        };
        if !animate {
            return Self::with_mode(text, Mode::Static);
        }

        let bar = ProgressBar::new_spinner();
        let bar_style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(bar_style);
        bar.set_message(text.to_string());
        Self::with_mode(text, Mode::Animated(bar))
    }

    fn with_mode(text: &str, mode: Mode) -> Self {
        Self {
            mode,
            text: Arc::new(Mutex::new(text.to_string())),
            state: Arc::new(Mutex::new(SpinnerState::Idle)),
        }
    }

    pub fn text(&self) -> String {
        self.text.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn state(&self) -> SpinnerState {
        self.state.lock().map(|s| *s).unwrap_or(SpinnerState::Idle)
    }

    fn set_state(&self, state: SpinnerState) {
        if let Ok(mut current) = self.state.lock() {
            *current = state;
        }
    }

    pub fn set_text(&self, text: &str) {
        if let Ok(mut current) = self.text.lock() {
            *current = text.to_string();
        }
        if let Mode::Animated(bar) = &self.mode {
            bar.set_message(text.to_string());
        }
    }

    pub fn start(&self) {
        if let Mode::Animated(bar) = &self.mode {
            bar.enable_steady_tick(TICK_INTERVAL);
        }
        self.set_state(SpinnerState::Spinning);
    }

    /// Stops the spinner with a green `✔ <text>` line.
    pub fn succeed(&self) {
        let line = format!("{} {}", style("✔").green(), self.text());
        self.persist(&line);
        self.set_state(SpinnerState::Succeeded);
    }

    /// Stops the spinner with a red `✖ <text>` line. An empty `text` keeps
    /// the current spinner text.
    pub fn fail(&self, text: &str) {
        let text = if text.is_empty() {
            self.text()
        } else {
            text.to_string()
        };
        let line = format!("{} {}", style("✖").red(), text);
        self.persist(&line);
        self.set_state(SpinnerState::Failed);
    }

    fn persist(&self, line: &str) {
        match &self.mode {
            Mode::Hidden => {}
            Mode::Static => {
                if let Err(e) = Term::stderr().write_line(line) {
                    debug!("Failed to write spinner line: {}", e);
                }
            }
            Mode::Animated(bar) => {
                if let Ok(plain) = ProgressStyle::with_template("{msg}") {
                    bar.set_style(plain);
                }
                bar.finish_with_message(line.to_string());
            }
        }
    }
}

/// # Run With Progress (`progress`)
///
/// Runs `action` behind a spinner titled `title`.
///
/// ## Arguments
///
/// * `title` - Spinner text; also the text of the success line.
/// * `action` - Receives a `Spinner` handle and returns the future to await.
/// * `options` - See [`ProgressOptions`].
///
/// ## Returns
///
/// * `Result<R>` - Exactly what the action returned. On error the spinner has
///   already been failed with the error's message.
pub async fn progress<R, F, Fut>(title: &str, action: F, options: ProgressOptions) -> Result<R>
where
    F: FnOnce(Spinner) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    let spinner = Spinner::for_options(title, options);
    spinner.start();

    match action(spinner.clone()).await {
        Ok(response) => {
            spinner.succeed();
            Ok(response)
        }
        Err(e) => {
            spinner.fail(&e.to_string());
            Err(e)
        }
    }
}
