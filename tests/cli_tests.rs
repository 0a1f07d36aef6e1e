//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_test_directory() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), vec![b'a'; 300 * 1024]).unwrap();
    fs::write(dir.path().join("b.txt"), vec![b'b'; 200 * 1024]).unwrap();
    fs::create_dir_all(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/x.js"), vec![b'x'; 1024 * 1024]).unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "guide").unwrap();
    dir
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("doc-budget").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--limit-kb"))
        .stdout(predicate::str::contains("--auto-exclude"));
}

#[test]
fn test_dry_run_prints_converter_command() {
    let dir = setup_test_directory();
    let mut cmd = Command::cargo_bin("doc-budget").unwrap();
    cmd.args(["--dry-run", "--yes", "--no-progress", "--auto-exclude", "--directory"])
        .arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("codebase-to-prompt"))
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("node_modules/**"))
        .stdout(predicate::str::contains(",a.txt"));
}

#[test]
fn test_extra_exclude_directory_is_skipped() {
    let dir = setup_test_directory();
    let mut cmd = Command::cargo_bin("doc-budget").unwrap();
    cmd.args(["--dry-run", "--yes", "--no-progress", "--extra-exclude", "docs", "--directory"])
        .arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("docs/**"))
        .stdout(predicate::str::contains("跳過 2 個目錄"));
}

#[test]
fn test_missing_directory_fails() {
    let mut cmd = Command::cargo_bin("doc-budget").unwrap();
    cmd.args(["--dry-run", "--yes", "--directory", "/definitely/not/a/dir"]);
    cmd.assert().failure();
}
