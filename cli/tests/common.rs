//! # flexutils CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and builds its commands with [`flexutils_cmd`].
//!

#![allow(dead_code)]

pub use assert_cmd::Command;

/// Environment flags the binary reacts to; cleared so the host shell cannot
/// change test output.
const FLAG_VARS: &[&str] = &[
    "QUIET",
    "DEBUG",
    "TRACE",
    "CI",
    "PERSIST_TERMINAL",
    "REALM",
    "RUST_LOG",
];

/// # Get flexutils Command (`flexutils_cmd`)
///
/// An `assert_cmd::Command` for the compiled `flexutils` binary with the
/// environment flags cleared and the user config directory pointed at a
/// location that does not exist.
///
/// ## Panics
/// Panics if the `flexutils` binary cannot be found via `Command::cargo_bin`.
pub fn flexutils_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("flexutils").expect("Failed to find flexutils binary for testing");
    for var in FLAG_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/flexutils-test-config");
    cmd
}
