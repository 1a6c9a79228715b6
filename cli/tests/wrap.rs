//! # flexutils CLI Wrap Integration Tests
//!
//! File: cli/tests/wrap.rs
//! Author: Christi Mahu
//!

mod common;
use common::*;

#[test]
fn test_wrap_columns() {
    flexutils_cmd()
        .args(["wrap", "--columns", "10", "the quick brown fox"])
        .assert()
        .success()
        .stdout("the quick\nbrown fox\n");
}

#[test]
fn test_wrap_soft_keeps_long_words() {
    flexutils_cmd()
        .args(["wrap", "-c", "4", "--soft", "ab abcdefg"])
        .assert()
        .success()
        .stdout("ab\nabcdefg\n");
}

#[test]
fn test_wrap_uses_configured_columns() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(
        dir.path().join(".flexutils.toml"),
        "[logger]\nwrap_columns = 3\n",
    )
    .unwrap();

    flexutils_cmd()
        .current_dir(dir.path())
        .args(["wrap", "abcdef"])
        .assert()
        .success()
        .stdout("abc\ndef\n");
}
