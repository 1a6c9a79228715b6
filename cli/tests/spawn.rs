//! # flexutils CLI Spawn Integration Tests
//!
//! File: cli/tests/spawn.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `flexutils spawn`. The toolchain binaries are not
//! assumed to be installed: the tests point `PATH` at a directory holding a
//! fake `npm` script, or at an empty directory.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_spawn_rejects_unknown_command() {
    flexutils_cmd()
        .args(["spawn", "pnpm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[cfg(unix)]
fn fake_npm(dir: &std::path::Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join("npm");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_spawn_captures_output_and_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    fake_npm(dir.path(), "echo \"npm $*\"\nexit 3");

    flexutils_cmd()
        .env("PATH", dir.path())
        .args(["spawn", "npm", "--capture", "--no-shell", "--", "install", "foo"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("npm install foo"))
        .stdout(predicate::str::contains("npm exited with code 3"));
}

#[cfg(unix)]
#[test]
fn test_spawn_missing_program_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    flexutils_cmd()
        .env("PATH", dir.path())
        .args(["spawn", "node", "--capture", "--no-shell", "--", "--version"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("node exited with code 1"));
}

#[cfg(unix)]
#[test]
fn test_spawn_prints_command_line_and_output_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    fake_npm(dir.path(), "echo \"copied ../src to ../dist\"");

    flexutils_cmd()
        .env("PATH", dir.path())
        .args([
            "spawn",
            "npm",
            "--capture",
            "--no-shell",
            "--",
            "install",
            "--save-dev",
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm install --save-dev --force"))
        .stdout(predicate::str::contains("copied ../src to ../dist"));
}
