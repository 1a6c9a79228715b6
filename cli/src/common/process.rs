//! # flexutils Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! A thin async wrapper around `tokio::process::Command` for running the
//! JavaScript toolchain (`node`, `yarn`, `npm`) on behalf of the plugin tooling.
//!
//! The wrapper never fails: every outcome is reported as a `SpawnReturn`
//! record with an exit code and the captured output.
//!
//! - The child inherits stdio by default; with `Stdio::Pipe` its stdout/stderr
//!   are captured (one trailing newline stripped).
//! - When a shell is configured (default: `$SHELL`) the command line is run
//!   through `<shell> -c`.
//! - A child killed by `SIGKILL` logs an error explaining the likely
//!   out-of-memory or `kill -9` cause; `SIGTERM` logs a warning.
//! - If the child cannot be started at all, the result carries exit code `1`
//!   and the launch error as `stderr`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flexutils::common::process::{spawn, ShellCmd, SpawnOptions};
//!
//! # async fn example() {
//! let result = spawn(ShellCmd::Npm, &["install"], SpawnOptions::default()).await;
//! if result.exit_code != 0 {
//!     eprintln!("npm install failed: {}", result.stderr);
//! }
//! # }
//! ```
//!
use crate::common::{
    strings::single_line_string,
    ui::logger::{self, Logger},
};
use std::{
    fmt,
    path::PathBuf,
    process::{ExitStatus, Stdio as StdStdio},
};
use tokio::process::Command;
use tracing::{debug, info};

/// The toolchain commands the plugin tooling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellCmd {
    Node,
    Yarn,
    Npm,
}

impl ShellCmd {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellCmd::Node => "node",
            ShellCmd::Yarn => "yarn",
            ShellCmd::Npm => "npm",
        }
    }
}

impl fmt::Display for ShellCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the child's stdout/stderr are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stdio {
    /// Share the parent's streams; nothing is captured.
    #[default]
    Inherit,
    /// Capture stdout and stderr into the result.
    Pipe,
}

/// # Spawn Options (`SpawnOptions`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnOptions {
    pub stdio: Stdio,
    /// Shell used to run the command line; `None` runs the program directly.
    pub shell: Option<String>,
    /// Working directory for the child.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables for the child.
    pub env: Vec<(String, String)>,
}

impl Default for SpawnOptions {
    fn default() -> Self {
        Self {
            stdio: Stdio::Inherit,
            shell: std::env::var("SHELL").ok().filter(|s| !s.is_empty()),
            cwd: None,
            env: Vec::new(),
        }
    }
}

/// Outcome of a spawned process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpawnReturn {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Termination signals that get an explanation for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Termination {
    Killed,
    Terminated,
}

/// # Spawn Toolchain Command (`spawn`)
///
/// Runs `cmd` with `args`, reporting signal terminations on the default logger.
pub async fn spawn(cmd: ShellCmd, args: &[&str], options: SpawnOptions) -> SpawnReturn {
    spawn_program_with(logger::logger(), cmd.as_str(), args, options).await
}

/// Like [`spawn`] for an arbitrary program.
pub async fn spawn_program(program: &str, args: &[&str], options: SpawnOptions) -> SpawnReturn {
    spawn_program_with(logger::logger(), program, args, options).await
}

/// # Spawn Program (`spawn_program_with`)
///
/// Runs `program` with `args` and waits for it to exit.
///
/// ## Arguments
///
/// * `logger` - Receives the `SIGKILL`/`SIGTERM` explanations.
/// * `program` - Executable name or path.
/// * `args` - Arguments. When running through a shell they are joined with
///   spaces onto the command line as-is, so shell syntax in them is honoured.
/// * `options` - See [`SpawnOptions`].
///
/// ## Returns
///
/// * `SpawnReturn` - Exit code (`0` if the platform reports none) and the
///   captured output. A non-zero exit keeps the captured output as is.
///   Launch failures yield exit code `1`, empty `stdout` and the error
///   message as `stderr`.
pub async fn spawn_program_with(
    logger: &Logger,
    program: &str,
    args: &[&str],
    options: SpawnOptions,
) -> SpawnReturn {
    let mut command = build_command(program, args, &options);
    info!("Spawning '{}' with args {:?}", program, args);

    let outcome = match options.stdio {
        Stdio::Inherit => command
            .status()
            .await
            .map(|status| (status, String::new(), String::new())),
        Stdio::Pipe => command.output().await.map(|output| {
            (
                output.status,
                strip_final_newline(String::from_utf8_lossy(&output.stdout).into_owned()),
                strip_final_newline(String::from_utf8_lossy(&output.stderr).into_owned()),
            )
        }),
    };

    match outcome {
        Ok((status, stdout, stderr)) => {
            debug!("'{}' exited with {}", program, status);
            report_termination(logger, &status);
            SpawnReturn {
                exit_code: exit_code(&status),
                stdout,
                stderr,
            }
        }
        Err(e) => {
            debug!("Failed to spawn '{}': {}", program, e);
            SpawnReturn {
                exit_code: 1,
                stdout: String::new(),
                stderr: e.to_string(),
            }
        }
    }
}

fn build_command(program: &str, args: &[&str], options: &SpawnOptions) -> Command {
    let mut command = match &options.shell {
        Some(shell) => {
            let mut line = vec![program];
            line.extend_from_slice(args);
            let mut command = Command::new(shell);
            command.arg("-c").arg(single_line_string(&line));
            command
        }
        None => {
            let mut command = Command::new(program);
            command.args(args);
            command
        }
    };

    let (out, err) = match options.stdio {
        Stdio::Inherit => (StdStdio::inherit(), StdStdio::inherit()),
        Stdio::Pipe => (StdStdio::piped(), StdStdio::piped()),
    };
    command.stdout(out).stderr(err).stdin(StdStdio::inherit());

    if let Some(cwd) = &options.cwd {
        command.current_dir(cwd);
    }
    command.envs(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    command
}

fn strip_final_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Exit code of the child. Signal terminations count as `1`; a status with
/// neither code nor signal counts as `0`.
fn exit_code(status: &ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None if termination_signal(status).is_some() => 1,
        None => 0,
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<nix::sys::signal::Signal> {
    use std::os::unix::process::ExitStatusExt;
    status
        .signal()
        .and_then(|raw| nix::sys::signal::Signal::try_from(raw).ok())
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<()> {
    None
}

#[cfg(unix)]
fn classify(status: &ExitStatus) -> Option<Termination> {
    use nix::sys::signal::Signal;
    match termination_signal(status)? {
        Signal::SIGKILL => Some(Termination::Killed),
        Signal::SIGTERM => Some(Termination::Terminated),
        _ => None,
    }
}

#[cfg(not(unix))]
fn classify(_status: &ExitStatus) -> Option<Termination> {
    None
}

fn report_termination(logger: &Logger, status: &ExitStatus) {
    match classify(status) {
        Some(Termination::Killed) => logger.error(single_line_string(&[
            "The script has failed because the process exited too early.",
            "This probably means the system ran out of memory or someone called",
            "`kill -9` on the process.",
        ])),
        Some(Termination::Terminated) => logger.warning(single_line_string(&[
            "The script has failed because the process exited too early.",
            "Someone might have called `kill` or `killall`, or the system could",
            "be shutting down.",
        ])),
        None => {}
    }
}
