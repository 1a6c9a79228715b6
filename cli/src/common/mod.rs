//! # flexutils Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module is the root for the shared utilities used by plugin tooling
//! and by the `flexutils` commands.
//!
//! ## Architecture
//!
//! - **`env`**: Environment flag detection (`QUIET`, `DEBUG`, `TRACE`, `CI`, ...).
//! - **`process`**: Running `node`, `yarn` and `npm` and reporting how they exited.
//! - **`strings`**: Small helpers for building multi-part messages.
//! - **`ui`**: Console output: the logger, inline markup, colors, wrapping,
//!   spinners and tables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flexutils::common::{env, ui::logger};
//!
//! if !env::is_ci() {
//!     logger::info("Installing **dependencies**");
//! }
//! ```
//!

/// Environment flag detection.
pub mod env;
/// Spawning toolchain processes.
pub mod process;
/// String joining helpers.
pub mod strings;
/// Terminal output utilities (logger, markup, progress, tables).
pub mod ui;
