//! # flexutils Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Shared console and process utilities for plugin tooling: environment
//! flags, a markup-aware console logger, spinners, tables and a wrapper for
//! spawning the JavaScript toolchain. The `flexutils` binary exposes the same
//! utilities from the command line.
//!
//! ```rust
//! use flexutils::common::ui::markup::StyleTable;
//!
//! let plain = StyleTable::standard(Some(false));
//! assert_eq!(plain.render("run {{npm install}}"), "run npm install");
//! ```
//!
pub mod common;
pub mod core;
