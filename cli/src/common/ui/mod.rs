//! # flexutils UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Everything that writes to the terminal on behalf of the plugin tooling
//! lives here. Messages flow through the `logger`, which renders inline
//! `markup`, applies a line color and writes to stdout or stderr.
//!
//! ## Architecture
//!
//! - **`boxen`**: Boxed banner messages for errors, warnings and notices.
//! - **`colors`**: Named color helpers for links, headlines, names and digits.
//! - **`logger`**: Level-based console logger honouring `QUIET`/`DEBUG`/`TRACE`.
//! - **`markup`**: The inline markup renderer (`**bold**`, `{{code}}`, ...).
//! - **`progress`**: Spinners around long-running async actions (`indicatif`).
//! - **`table`**: Boxed tables built with `comfy-table`.
//! - **`wrap`**: ANSI-aware word wrapping.
//!

pub mod boxen;
pub mod colors;
pub mod logger;
pub mod markup;
pub mod progress;
pub mod table;
pub mod wrap;
