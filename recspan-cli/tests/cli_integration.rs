//! Integration tests for the recspan CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_scan_newline_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "plain.log", b"first\nsecond\n");

    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("6\tfirst"))
        .stdout(predicate::str::contains("13\tsecond"))
        .stderr(predicate::str::contains("final position: 13"));
}

#[test]
fn test_scan_stdin() {
    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg("--quiet").write_stdin("ab\ncdef\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3\tab"))
        .stdout(predicate::str::contains("8\tcdef"))
        .stderr(predicate::str::contains("final position").not());
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "plain.log", b"entry\n");

    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg(&path).arg("--format").arg("json").arg("--quiet");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["offset"], 6);
    assert_eq!(value["truncated"], false);
    assert_eq!(value["record"], "entry");
}

#[test]
fn test_oversized_record_truncated() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "long.log", b"aaaaaaaaaaaaaaaa"); // 16 bytes, no newline

    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg(&path)
        .arg("--max-record-size")
        .arg("5")
        .arg("--format")
        .arg("json")
        .arg("--quiet");

    let output = cmd.assert().success().get_output().stdout.clone();
    let first_line = output.split(|&b| b == b'\n').next().unwrap();
    let value: serde_json::Value = serde_json::from_slice(first_line).unwrap();
    assert_eq!(value["record"], "aaaaa");
    assert_eq!(value["truncated"], true);
    assert_eq!(value["offset"], 5);
}

#[test]
fn test_line_start_pattern() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "multi.log",
        b"ERR one\n  detail\nERR two\n",
    );

    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg(&path).arg("--line-start").arg("(?m)^ERR ").arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("17\tERR one\n  detail\n"))
        .stdout(predicate::str::contains("25\tERR two\n"));
}

#[test]
fn test_start_offset_resumes_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "resume.log", b"first\nsecond\n");

    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg(&path).arg("--start-offset").arg("6");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("13\tsecond"))
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_bad_pattern_fails() {
    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg("--line-start").arg("(unclosed").write_stdin("x\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("bad line-start pattern"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg("does-not-exist.log");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_line_start_and_line_end_conflict() {
    let mut cmd = Command::cargo_bin("recspan").unwrap();
    cmd.arg("--line-start").arg("a").arg("--line-end").arg("b");

    cmd.assert().failure();
}
