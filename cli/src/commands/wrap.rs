//! # flexutils Wrap Command
//!
//! File: cli/src/commands/wrap.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! `flexutils wrap` renders the inline markup of its text and wraps the
//! result to a column limit. The limit comes from `--columns`, falling back
//! to `logger.wrap_columns` in the configuration (80 by default).
//!
use super::Context;
use clap::Parser;
use flexutils::{
    common::{
        strings::single_line_string,
        ui::{
            logger::Level,
            wrap::{wrap, WrapOptions},
        },
    },
    core::error::Result,
};
use tracing::debug;

/// # Wrap Arguments (`WrapArgs`)
#[derive(Parser, Debug)]
#[command(about = "Wrap text to a column limit")]
pub struct WrapArgs {
    /// Column limit; `0` disables wrapping.
    #[arg(long, short)]
    columns: Option<usize>,

    /// Let words longer than the limit overflow instead of breaking them.
    #[arg(long)]
    soft: bool,

    /// Text parts; joined with single spaces.
    #[arg(required = true)]
    text: Vec<String>,
}

pub fn handle_wrap(ctx: &Context, args: WrapArgs) -> Result<()> {
    let columns = args.columns.unwrap_or_else(|| ctx.config.logger.wrap_columns());
    debug!("Wrapping to {} columns (soft: {})", columns, args.soft);

    let rendered = ctx.logger.markdown(&single_line_string(&args.text));
    let wrapped = wrap(&rendered, columns, WrapOptions { hard: !args.soft });
    // Markup is already rendered; the wrapped text is printed as is.
    ctx.logger.plain(Level::Info, wrapped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;

    #[test]
    fn test_wrap_args_parsing() {
        let args = WrapArgs::try_parse_from(["wrap", "-c", "10", "--soft", "a", "b"]).unwrap();
        assert_eq!(args.columns, Some(10));
        assert!(args.soft);
        assert_eq!(args.text, vec!["a", "b"]);
    }

    #[test]
    fn test_handle_wrap_uses_columns() {
        let (ctx, console) = test_support::context();
        let args =
            WrapArgs::try_parse_from(["wrap", "--columns", "9", "the quick **brown** fox"]).unwrap();
        handle_wrap(&ctx, args).unwrap();
        assert_eq!(console.lines_at(Level::Info), vec!["the quick\nbrown fox"]);
    }

    #[test]
    fn test_handle_wrap_defaults_to_config_columns() {
        let (mut ctx, console) = test_support::context();
        ctx.config.logger.wrap_columns = Some(3);
        let args = WrapArgs::try_parse_from(["wrap", "abcdef"]).unwrap();
        handle_wrap(&ctx, args).unwrap();
        assert_eq!(console.lines_at(Level::Info), vec!["abc\ndef"]);
    }
}
