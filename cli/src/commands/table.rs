//! # flexutils Table Commands
//!
//! File: cli/src/commands/table.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Two commands print boxed tables through the console logger:
//!
//! - `flexutils table` takes comma-separated `--header` and `--row` values.
//! - `flexutils table-json` reads a JSON array of objects from a file (or
//!   stdin) and uses the first object's keys as the header.
//!
//! ```bash
//! flexutils table --header name,version --row foo,1.0.0 --row bar,2.1.0
//! echo '[{"name":"foo","version":"1.0.0"}]' | flexutils table-json
//! ```
//!
use super::Context;
use anyhow::Context as _;
use clap::Parser;
use flexutils::{
    common::ui::table,
    core::error::{FlexError, Result},
};
use serde_json::Value;
use std::{fs, io::Read, path::PathBuf};
use tracing::{debug, info};

/// # Table Arguments (`TableArgs`)
#[derive(Parser, Debug)]
#[command(about = "Print rows as a table")]
pub struct TableArgs {
    /// Comma-separated column names.
    #[arg(long, value_delimiter = ',')]
    header: Vec<String>,

    /// Comma-separated cell values; repeat for each row.
    #[arg(long = "row", required = true)]
    rows: Vec<String>,
}

/// # Table JSON Arguments (`TableJsonArgs`)
#[derive(Parser, Debug)]
#[command(about = "Print a JSON array of objects as a table")]
pub struct TableJsonArgs {
    /// JSON file to read; stdin when omitted or `-`.
    file: Option<PathBuf>,
}

fn parse_rows(rows: &[String]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.split(',').map(str::to_string).collect())
        .collect()
}

/// Prints the `--header`/`--row` table.
pub fn handle_table(ctx: &Context, args: TableArgs) -> Result<()> {
    debug!("Table args: {:?}", args);
    let rows = parse_rows(&args.rows);
    table::print_array_with(&ctx.logger, &args.header, &rows);
    Ok(())
}

fn parse_records(content: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content).context("Failed to parse JSON input")?;
    match value {
        Value::Array(records) => Ok(records),
        other => Err(FlexError::Validation(format!(
            "Expected a JSON array of objects, found: {}",
            other
        ))
        .into()),
    }
}

/// # Handle Table JSON Command (`handle_table_json`)
///
/// Reads the JSON input and prints it with `table::print_object_array_with`.
///
/// ## Returns
///
/// * `Result<()>` - Fails if the input cannot be read, is not valid JSON, is
///   not an array, or contains a non-object element.
pub fn handle_table_json(ctx: &Context, args: TableJsonArgs) -> Result<()> {
    let content = match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            info!("Reading table records from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read JSON file: {}", path.display()))?
        }
        _ => {
            info!("Reading table records from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read JSON from stdin")?;
            buf
        }
    };

    let records = parse_records(&content)?;
    debug!("Parsed {} table records", records.len());
    table::print_object_array_with(&ctx.logger, &records)
}
