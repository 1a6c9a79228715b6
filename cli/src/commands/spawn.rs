//! # flexutils Spawn Command
//!
//! File: cli/src/commands/spawn.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! `flexutils spawn` runs `node`, `yarn` or `npm` through the process wrapper
//! and exits with the child's exit code.
//!
//! With `--capture` the child's output is collected while a spinner runs and
//! printed once it exits (stdout at info level, stderr as a warning). Without
//! it the child shares the terminal and no spinner is drawn.
//!
//! ```bash
//! flexutils spawn npm --capture -- --version
//! flexutils spawn node -- -e "console.log(1 + 1)"
//! ```
//!
use super::Context;
use clap::Parser;
use flexutils::{
    common::{
        process::{spawn_program_with, ShellCmd, SpawnOptions, SpawnReturn, Stdio},
        ui::{
            logger::Level,
            progress::{ProgressOptions, Spinner},
        },
    },
    core::error::Result,
};
use tracing::{debug, info};

/// # Spawn Arguments (`SpawnArgs`)
#[derive(Parser, Debug)]
#[command(about = "Run node, yarn or npm")]
pub struct SpawnArgs {
    /// Toolchain command to run.
    #[arg(value_enum)]
    cmd: ShellCmd,

    /// Capture the output and show a spinner while the command runs.
    #[arg(long)]
    capture: bool,

    /// Run the program directly instead of through the shell.
    #[arg(long)]
    no_shell: bool,

    /// Arguments passed to the command (after `--`).
    #[arg(last = true)]
    args: Vec<String>,
}

impl SpawnArgs {
    fn spawn_options(&self, base: SpawnOptions) -> SpawnOptions {
        SpawnOptions {
            stdio: if self.capture { Stdio::Pipe } else { base.stdio },
            shell: if self.no_shell { None } else { base.shell },
            ..base
        }
    }
}

/// # Handle Spawn Command (`handle_spawn`)
///
/// Runs the command and reports its exit code.
///
/// ## Returns
///
/// * `Result<i32>` - The child's exit code, which becomes the process exit
///   code of `flexutils`. Failing to start the child is not an error; it is
///   reported with exit code `1`.
pub async fn handle_spawn(ctx: &Context, args: SpawnArgs) -> Result<i32> {
    let options = args.spawn_options(ctx.config.spawn.spawn_options());
    let argv: Vec<&str> = args.args.iter().map(String::as_str).collect();
    debug!("Spawn options: {:?}", options);
    info!("Running {} {:?}", args.cmd, argv);

    let logger = &ctx.logger;
    logger.install_info(args.cmd.as_str(), &argv);

    let result = if options.stdio == Stdio::Pipe {
        let spinner = Spinner::for_options(
            &format!("Running {}", args.cmd),
            ProgressOptions {
                disabled: Some(logger.is_quiet()),
                enabled: if logger.is_debug() { Some(false) } else { None },
            },
        );
        spinner.start();
        let result = spawn_program_with(logger, args.cmd.as_str(), &argv, options).await;
        if result.exit_code == 0 {
            spinner.succeed();
        } else {
            spinner.fail(&format!("{} exited with code {}", args.cmd, result.exit_code));
        }
        print_captured(ctx, &result);
        result
    } else {
        spawn_program_with(logger, args.cmd.as_str(), &argv, options).await
    };

    logger.notice(format!(
        "{} exited with code {{{{{}}}}}",
        args.cmd, result.exit_code
    ));
    Ok(result.exit_code)
}

/// Child output is printed verbatim; it is not markup.
fn print_captured(ctx: &Context, result: &SpawnReturn) {
    if !result.stdout.is_empty() {
        ctx.logger.plain(Level::Info, &result.stdout);
    }
    if !result.stderr.is_empty() {
        ctx.logger.plain(Level::Warn, &result.stderr);
    }
}
