//! # flexutils Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module loads the optional TOML configuration for flexutils. Most
//! runtime behaviour is driven by environment variables (`QUIET`, `DEBUG`,
//! `TRACE`, ...); the configuration files only supply defaults for them and
//! for the process spawner.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.flexutils.toml` in the current directory or its
//!    ancestors (the search stops at the first directory containing `.git`)
//! 2. User-specific `config.toml` in the platform config directory
//!    (`~/.config/flexutils/config.toml` on Linux)
//! 3. Default values defined in the code
//!
//! Environment variables and command-line flags still win over anything
//! loaded here; see [`LoggerConfig::logger_options`].
//!
//! ## Example
//!
//! ```toml
//! [logger]
//! quiet = false
//! color = true
//! wrap_columns = 100
//!
//! [spawn]
//! shell = "~/bin/zsh"
//! capture = true
//! ```
//!
//! ```rust,no_run
//! use flexutils::core::config;
//!
//! # fn example() -> anyhow::Result<()> {
//! let cfg = config::load_config()?;
//! let options = cfg.logger.logger_options();
//! # Ok(())
//! # }
//! ```
//!
use crate::common::{
    env,
    process::{SpawnOptions, Stdio},
    ui::logger::LoggerOptions,
};
use crate::core::error::{FlexError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".flexutils.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub spawn: SpawnConfig,
}

/// Defaults for the console logger.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    pub quiet: Option<bool>,
    pub debug: Option<bool>,
    pub trace: Option<bool>,
    /// Force colors on or off; unset follows terminal detection.
    pub color: Option<bool>,
    /// Column limit used by `flexutils wrap` when `--columns` is not given.
    /// Unset means [`DEFAULT_WRAP_COLUMNS`]; see [`LoggerConfig::wrap_columns`].
    pub wrap_columns: Option<usize>,
}

/// Defaults for spawned toolchain processes.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SpawnConfig {
    /// Shell used to run commands (can use ~). Defaults to `$SHELL`.
    pub shell: Option<String>,
    /// Capture child output instead of inheriting the terminal.
    #[serde(default)]
    pub capture: bool,
}

/// Wrap column limit when none is configured.
pub const DEFAULT_WRAP_COLUMNS: usize = 80;

impl LoggerConfig {
    /// # Resolve Logger Options (`logger_options`)
    ///
    /// Combines the file values with the environment: a flag present in the
    /// environment (`QUIET`, `DEBUG`, `TRACE`) overrides the file, an absent
    /// one falls back to it. Trace is resolved first; when it ends up on,
    /// debug is forced on as well.
    pub fn logger_options(&self) -> LoggerOptions {
        let trace = env::flag(env::TRACE).or(self.trace);
        let debug = if trace == Some(true) {
            Some(true)
        } else {
            env::flag(env::DEBUG).or(self.debug)
        };
        LoggerOptions {
            quiet: env::flag(env::QUIET).or(self.quiet),
            debug,
            trace,
            color: self.color,
        }
    }

    /// The configured wrap column limit, or [`DEFAULT_WRAP_COLUMNS`].
    pub fn wrap_columns(&self) -> usize {
        self.wrap_columns.unwrap_or(DEFAULT_WRAP_COLUMNS)
    }
}

impl SpawnConfig {
    /// Spawn options carrying the configured shell and stdio mode.
    pub fn spawn_options(&self) -> SpawnOptions {
        let defaults = SpawnOptions::default();
        SpawnOptions {
            stdio: if self.capture {
                Stdio::Pipe
            } else {
                Stdio::Inherit
            },
            shell: self.shell.clone().or(defaults.shell),
            ..defaults
        }
    }
}

/// # Load Configuration (`load_config`)
///
/// Loads, merges, expands and validates the user and project configuration
/// files, starting the project search from the current directory.
///
/// ## Returns
///
/// * `Result<Config>` - The merged configuration, or defaults when no file
///   exists. Fails if a file cannot be read or parsed, or if validation fails.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(user_config_path().as_deref(), &current_dir)
}

/// Like [`load_config`] with an explicit user file and project search root.
pub fn load_config_from(user_path: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let user_config = match user_path {
        Some(path) if path.is_file() => {
            info!("Loading user configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        Some(path) => {
            debug!("User configuration file not found at {}", path.display());
            None
        }
        None => None,
    };
    let project_config = match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            Some(load_config_from_path(&path)?)
        }
        None => {
            debug!("No project configuration file ({}) found.", PROJECT_CONFIG_FILENAME);
            None
        }
    };

    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "Flexutils", "flexutils") {
        Some(dirs) => Some(dirs.config_dir().join("config.toml")),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn find_project_config_path(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        logger: LoggerConfig {
            quiet: project.logger.quiet.or(user.logger.quiet),
            debug: project.logger.debug.or(user.logger.debug),
            trace: project.logger.trace.or(user.logger.trace),
            color: project.logger.color.or(user.logger.color),
            wrap_columns: project.logger.wrap_columns.or(user.logger.wrap_columns),
        },
        spawn: SpawnConfig {
            shell: project.spawn.shell.or(user.spawn.shell),
            capture: project.spawn.capture || user.spawn.capture,
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(shell) = &mut config.spawn.shell {
        *shell = shellexpand::tilde(shell.as_str()).into_owned();
        debug!("Expanded spawn shell: {}", shell);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.logger.wrap_columns == Some(0) {
        return Err(anyhow!(FlexError::Config(
            "logger.wrap_columns must be greater than zero.".to_string()
        )));
    }
    if let Some(shell) = &config.spawn.shell {
        if shell.trim().is_empty() {
            return Err(anyhow!(FlexError::Config(
                "spawn.shell cannot be empty; remove it to use $SHELL.".to_string()
            )));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
