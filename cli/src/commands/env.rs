//! # flexutils Env Command
//!
//! File: cli/src/commands/env.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! `flexutils env` prints the environment flags the utilities react to, as
//! detected for the current process, in a table.
//!
use super::Context;
use clap::Parser;
use flexutils::{common::env, core::error::Result};

/// # Env Arguments (`EnvArgs`)
#[derive(Parser, Debug)]
#[command(about = "Show the detected environment flags")]
pub struct EnvArgs {}

/// Flag name and detected value, in display order.
fn detected_flags() -> Vec<Vec<String>> {
    let realm = env::get_realm().map_or_else(|| "-".to_string(), |r| r.to_string());
    vec![
        vec![env::QUIET.to_string(), env::is_quiet().to_string()],
        vec![env::DEBUG.to_string(), env::is_debug().to_string()],
        vec![env::TRACE.to_string(), env::is_trace().to_string()],
        vec![env::CI.to_string(), env::is_ci().to_string()],
        vec![
            env::PERSIST_TERMINAL.to_string(),
            env::is_terminal_persisted().to_string(),
        ],
        vec![env::REALM.to_string(), realm],
        vec!["WIN32".to_string(), env::is_win32().to_string()],
    ]
}

pub fn handle_env(ctx: &Context, _args: EnvArgs) -> Result<()> {
    flexutils::common::ui::table::print_array_with(
        &ctx.logger,
        &["flag", "value"],
        &detected_flags(),
    );
    Ok(())
}
