//! # flexutils Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! This module defines the error kinds shared by the plugin tooling utilities.
//! It mirrors the small error hierarchy used by the plugin CLI: a base plugin
//! error, an error that asks the user to take an action, and a validation error,
//! plus the configuration error raised while loading `.flexutils.toml`.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FlexError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use flexutils::core::error::{FlexError, Result};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(FlexError::Validation("Plugin name cannot be empty".into()).into());
//!     }
//!     Ok(())
//! }
//!
//! let err = FlexError::user_action("RUN_INSTALL", Some("Run `npm install` first"));
//! assert_eq!(err.reason(), Some("RUN_INSTALL"));
//! assert_eq!(err.to_string(), "Run `npm install` first");
//! assert!(check_name("").is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the plugin tooling utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlexError {
    /// Base error kind; carries only a message.
    #[error("{0}")]
    Plugin(String),

    /// An error the user can resolve by taking an action. `reason` is a stable
    /// identifier, `message` is what gets shown.
    #[error("{message}")]
    UserAction { reason: String, message: String },

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlexError {
    /// # Create User Action Error (`user_action`)
    ///
    /// Builds a `FlexError::UserAction`. When no message is supplied the reason
    /// doubles as the displayed message.
    pub fn user_action(reason: impl Into<String>, message: Option<&str>) -> Self {
        let reason = reason.into();
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => reason.clone(),
        };
        FlexError::UserAction { reason, message }
    }

    /// Returns the reason of a `UserAction` error, `None` for every other kind.
    pub fn reason(&self) -> Option<&str> {
        match self {
            FlexError::UserAction { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
