//! # flexutils Table Printer (`common::ui::table`)
//!
//! File: cli/src/common/ui/table.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of being rewritten
//! and is not suitable for production development yet.
//!
//! ## Overview
//!
//! Prints rows of strings as a boxed table through the console logger:
//!
//! ```text
//! ┌──────┬─────────┐
//! │ NAME │ VERSION │
//! ├──────┼─────────┤
//! │ foo  │ 1.0.0   │
//! └──────┴─────────┘
//! ```
//!
//! The header is upper-cased and only used when it has as many columns as the
//! first data row; otherwise a warning is logged and the table is printed
//! without it. Irregular data (rows of different lengths) is printed anyway,
//! after a warning.
//!
//! `print_object_array` accepts any serializable records and uses the field
//! names of the first record as the header.
//!
use crate::common::ui::logger::{self, Level, Logger};
use crate::core::error::{FlexError, Result};
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

/// Border characters in comfy-table preset order.
const BORDERS: &str = "││──├─┼┤│─┼├┤┬┴┌┐└┘";

const IRREGULAR_WARNING: &str =
    "Table rows are not all the same length; this may produce an irregular tabular view.";
const HEADER_WARNING: &str =
    "Header length does not match data row length; printing table without header.";

/// # Regular Matrix Check (`is_regular_matrix`)
///
/// True when the matrix has at least one row and every row is as long as the
/// first one.
pub fn is_regular_matrix<S: AsRef<str>>(matrix: &[Vec<S>]) -> bool {
    match matrix.first() {
        Some(first) => matrix.iter().all(|row| row.len() == first.len()),
        None => false,
    }
}

/// # Format Table (`format_array`)
///
/// Builds the table text for `header` and `data`, logging the irregularity
/// and header-mismatch warnings on `logger`.
pub fn format_array<H, S>(logger: &Logger, header: &[H], data: &[Vec<S>]) -> String
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    if !is_regular_matrix(data) {
        logger.warning(IRREGULAR_WARNING);
    }

    let mut table = Table::new();
    table.load_preset(BORDERS);

    let first_row_len = data.first().map_or(0, Vec::len);
    if header.len() == first_row_len {
        table.add_row(header.iter().map(|h| h.as_ref().to_uppercase()));
    } else {
        logger.warning(HEADER_WARNING);
    }

    for row in data {
        table.add_row(row.iter().map(|cell| cell.as_ref().to_string()));
    }

    table.to_string()
}

/// Prints a table through `logger` at info level. Cell text is printed
/// verbatim, without markup rendering.
pub fn print_array_with<H, S>(logger: &Logger, header: &[H], data: &[Vec<S>])
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    let table = format_array(logger, header, data);
    logger.plain(Level::Info, table);
}

/// Prints a table through the default logger.
pub fn print_array<H, S>(header: &[H], data: &[Vec<S>])
where
    H: AsRef<str>,
    S: AsRef<str>,
{
    print_array_with(logger::logger(), header, data);
}

/// # Records To Rows (`object_rows`)
///
/// Serializes each record and splits it into field names (taken from the
/// first record) and rows of field values.
///
/// ## Returns
///
/// * `Result<(Vec<String>, Vec<Vec<String>>)>` - Header and rows. Fails with
///   `FlexError::Validation` if a record does not serialize to a map.
pub fn object_rows<T: Serialize>(data: &[T]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut header = Vec::new();
    let mut rows = Vec::with_capacity(data.len());

    for (index, record) in data.iter().enumerate() {
        let map = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            other => {
                return Err(FlexError::Validation(format!(
                    "Table record {} is not an object: {}",
                    index, other
                ))
                .into())
            }
        };
        if index == 0 {
            header = map.keys().cloned().collect();
        }
        rows.push(map.values().map(cell_text).collect());
    }

    Ok((header, rows))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Prints serializable records as a table through `logger`. Nothing is
/// printed for an empty slice.
pub fn print_object_array_with<T: Serialize>(logger: &Logger, data: &[T]) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    let (header, rows) = object_rows(data)?;
    print_array_with(logger, &header, &rows);
    Ok(())
}

/// Prints serializable records as a table through the default logger.
pub fn print_object_array<T: Serialize>(data: &[T]) -> Result<()> {
    print_object_array_with(logger::logger(), data)
}
