//! # flexutils Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Core infrastructure shared by the utilities and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error kinds and the crate-wide `Result` alias
//!
//! ```rust
//! use flexutils::core::config; // For loading configuration
//! use flexutils::core::error::{FlexError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
