//! # flexutils Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module aggregates the `flexutils` subcommands. Each command defines
//! its own `clap` arguments structure and a `handle_*` function that receives
//! the shared [`Context`].
//!
//! ## Commands
//!
//! - `env`: Show the detected environment flags
//! - `render`: Log a message with inline markup
//! - `spawn`: Run `node`, `yarn` or `npm`
//! - `table`: Print tables from arguments or JSON
//! - `wrap`: Wrap text to a column limit
//!
use flexutils::{common::ui::logger::Logger, core::config::Config};

pub mod env;
pub mod render;
pub mod spawn;
pub mod table;
pub mod wrap;

/// State shared by every command handler.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    /// Console logger configured from flags, environment and config files.
    pub logger: Logger,
}
