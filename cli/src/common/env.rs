//! # flexutils Environment Flags (`common::env`)
//!
//! File: cli/src/common/env.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Detection of the environment flags that change how the plugin tooling
//! behaves. A flag counts as set only when its value is exactly `true`.
//!
//! | Variable           | Accessor                  |
//! |--------------------|---------------------------|
//! | `QUIET`            | [`is_quiet`]              |
//! | `DEBUG`            | [`is_debug`]              |
//! | `TRACE`            | [`is_trace`] (implies debug) |
//! | `PERSIST_TERMINAL` | [`is_terminal_persisted`] |
//! | `CI`               | [`is_ci`]                 |
//! | `REALM`            | [`get_realm`]             |
//!
use std::{env, fmt, str::FromStr};

pub const QUIET: &str = "QUIET";
pub const DEBUG: &str = "DEBUG";
pub const TRACE: &str = "TRACE";
pub const PERSIST_TERMINAL: &str = "PERSIST_TERMINAL";
pub const CI: &str = "CI";
pub const REALM: &str = "REALM";

/// Deployment realm the tooling talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realm {
    Dev,
    Stage,
}

impl FromStr for Realm {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Realm::Dev),
            "stage" => Ok(Realm::Stage),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Realm::Dev => write!(f, "dev"),
            Realm::Stage => write!(f, "stage"),
        }
    }
}

/// # Read Flag (`flag`)
///
/// Returns `None` when `name` is absent from the environment, otherwise
/// `Some(true)` only for the exact value `true`. Used where an unset variable
/// has to fall through to a lower-precedence source.
pub fn flag(name: &str) -> Option<bool> {
    env::var(name).ok().map(|v| v == "true")
}

fn is_set(name: &str) -> bool {
    flag(name).unwrap_or(false)
}

/// Whether the tooling runs on Windows.
pub fn is_win32() -> bool {
    cfg!(windows)
}

pub fn is_ci() -> bool {
    is_set(CI)
}

/// # Persist Terminal (`persist_terminal`)
///
/// Marks the terminal as persisted for the rest of the process (and any
/// children spawned afterwards), which stops `Logger::clear_terminal` from
/// wiping the screen unless forced.
pub fn persist_terminal() {
    tracing::debug!("Setting {}=true", PERSIST_TERMINAL);
    env::set_var(PERSIST_TERMINAL, "true");
}

pub fn is_terminal_persisted() -> bool {
    is_set(PERSIST_TERMINAL)
}

pub fn is_quiet() -> bool {
    is_set(QUIET)
}

pub fn is_trace() -> bool {
    is_set(TRACE)
}

/// Debug mode. Trace mode always implies debug mode.
pub fn is_debug() -> bool {
    is_trace() || is_set(DEBUG)
}

/// # Get Realm (`get_realm`)
///
/// Parses `REALM`. Anything other than `dev` or `stage` (including an unset
/// variable) means the production realm and yields `None`.
pub fn get_realm() -> Option<Realm> {
    env::var(REALM).ok().and_then(|v| v.parse().ok())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_all() {
        for name in [QUIET, DEBUG, TRACE, PERSIST_TERMINAL, CI, REALM] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_persist_terminal() {
        clear_all();
        assert!(!is_terminal_persisted());
        persist_terminal();
        assert_eq!(env::var(PERSIST_TERMINAL).as_deref(), Ok("true"));
        assert!(is_terminal_persisted());
        clear_all();
    }

    #[test]
    #[serial]
    fn test_debug_flags() {
        clear_all();
        assert!(!is_debug());

        env::set_var(DEBUG, "true");
        assert!(is_debug());
        assert!(!is_trace());

        env::set_var(DEBUG, "1");
        assert!(!is_debug(), "only the literal 'true' enables a flag");
        clear_all();
    }

    #[test]
    #[serial]
    fn test_trace_implies_debug() {
        clear_all();
        env::set_var(TRACE, "true");
        assert!(is_trace());
        assert!(is_debug());
        clear_all();
    }

    #[test]
    #[serial]
    fn test_quiet_and_ci() {
        clear_all();
        assert!(!is_quiet());
        assert!(!is_ci());
        env::set_var(QUIET, "true");
        env::set_var(CI, "true");
        assert!(is_quiet());
        assert!(is_ci());
        clear_all();
    }

    #[test]
    #[serial]
    fn test_flag_distinguishes_unset() {
        clear_all();
        assert_eq!(flag(QUIET), None);
        env::set_var(QUIET, "false");
        assert_eq!(flag(QUIET), Some(false));
        env::set_var(QUIET, "true");
        assert_eq!(flag(QUIET), Some(true));
        clear_all();
    }

    #[test]
    #[serial]
    fn test_get_realm() {
        clear_all();
        assert_eq!(get_realm(), None);
        env::set_var(REALM, "stage");
        assert_eq!(get_realm(), Some(Realm::Stage));
        env::set_var(REALM, "dev");
        assert_eq!(get_realm(), Some(Realm::Dev));
        env::set_var(REALM, "prod");
        assert_eq!(get_realm(), None);
        clear_all();
    }
}
