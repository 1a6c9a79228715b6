//! # flexutils Render Command
//!
//! File: cli/src/commands/render.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! `flexutils render` logs its arguments, joined by spaces, through the console
//! logger so the inline markup is rendered exactly as plugin tooling would
//! render it. `--level` picks the logger method; `--boxed` draws the message
//! inside a banner box instead (red for errors, yellow for warnings, green
//! otherwise).
//!
//! ```bash
//! flexutils render "Deploying {{my-plugin}} to **dev**"
//! flexutils render --level error "--Build failed--"
//! flexutils render --boxed --level warning "**Node 14** is deprecated"
//! ```
//!
use super::Context;
use clap::{Parser, ValueEnum};
use flexutils::{
    common::{strings::single_line_string, ui::boxen},
    core::error::Result,
};
use tracing::debug;

/// Logger method used to print the message.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderLevel {
    #[default]
    Info,
    Success,
    Notice,
    Warning,
    Error,
    Debug,
    Trace,
}

/// # Render Arguments (`RenderArgs`)
#[derive(Parser, Debug)]
#[command(about = "Log a message with inline markup rendered")]
pub struct RenderArgs {
    /// Message parts; joined with single spaces.
    #[arg(required = true, allow_hyphen_values = true)]
    message: Vec<String>,

    /// Logger level to print the message at.
    #[arg(long, short, value_enum, default_value_t = RenderLevel::Info)]
    level: RenderLevel,

    /// Draw the message inside a box.
    #[arg(long, short)]
    boxed: bool,
}

/// # Handle Render Command (`handle_render`)
///
/// Joins the message parts and hands them to the logger at the requested level.
pub fn handle_render(ctx: &Context, args: RenderArgs) -> Result<()> {
    debug!("Render args: {:?}", args);
    let message = single_line_string(&args.message);
    let logger = &ctx.logger;
    if args.boxed {
        match args.level {
            RenderLevel::Error => boxen::error_with(logger, &message),
            RenderLevel::Warning => boxen::warning_with(logger, &message),
            RenderLevel::Debug if !logger.is_debug() => {}
            RenderLevel::Trace if !logger.is_trace() => {}
            _ => boxen::info_with(logger, &message),
        }
        return Ok(());
    }
    match args.level {
        RenderLevel::Info => logger.info(message),
        RenderLevel::Success => logger.success(message),
        RenderLevel::Notice => logger.notice(message),
        RenderLevel::Warning => logger.warning(message),
        RenderLevel::Error => logger.error(message),
        RenderLevel::Debug => logger.debug(message),
        RenderLevel::Trace => logger.trace(message),
    }
    Ok(())
}
