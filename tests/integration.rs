// Integration tests for the cgpa CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the cgpa binary.
fn cgpa() -> Command {
    Command::cargo_bin("cgpa").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    cgpa()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cgpa"));
}

#[test]
fn cli_help_flag() {
    cgpa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CGPA calculator"));
}

#[test]
fn compute_requires_file() {
    cgpa()
        .arg("compute")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn check_requires_file() {
    cgpa()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn init_requires_file() {
    cgpa()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn compute_rejects_unknown_format() {
    cgpa()
        .args(["compute", "transcript.toml", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn scale_prints_the_fixed_table() {
    cgpa()
        .arg("scale")
        .assert()
        .success()
        .stdout(predicate::str::contains("AA = 10"))
        .stdout(predicate::str::contains("FF = 0"));
}
