//! # flexutils CLI Table Integration Tests
//!
//! File: cli/tests/table.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `flexutils table` and `flexutils table-json`.
//!

mod common;
use common::*;
use predicates::prelude::*;

const EXPECTED: &str = "\
┌──────┬─────────┐
│ NAME │ VERSION │
├──────┼─────────┤
│ foo  │ 1.0.0   │
└──────┴─────────┘
";

#[test]
fn test_table_with_header() {
    flexutils_cmd()
        .args(["table", "--header", "name,version", "--row", "foo,1.0.0"])
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_table_header_mismatch_warns() {
    flexutils_cmd()
        .args(["table", "--header", "name", "--row", "foo,1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME").not())
        .stderr(predicate::str::contains("printing table without header"));
}

#[test]
fn test_table_json_from_stdin() {
    flexutils_cmd()
        .arg("table-json")
        .write_stdin(r#"[{"name": "foo", "version": "1.0.0"}]"#)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_table_json_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugins.json");
    std::fs::write(&path, r#"[{"name": "foo", "version": "1.0.0"}]"#).unwrap();

    flexutils_cmd()
        .arg("table-json")
        .arg(&path)
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn test_table_json_rejects_non_objects() {
    flexutils_cmd()
        .arg("table-json")
        .write_stdin("[1, 2]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not an object"));
}

#[test]
fn test_table_json_rejects_invalid_json() {
    flexutils_cmd()
        .arg("table-json")
        .write_stdin("{nope")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse JSON input"));
}

#[test]
fn test_table_cells_keep_markup_characters() {
    flexutils_cmd()
        .args(["table", "--header", "x,y", "--row", "a*b,c*d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ a*b │ c*d │"));
}
