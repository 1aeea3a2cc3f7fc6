// Integration tests for the ecds-shock-index CLI argument surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the ecds-shock-index binary.
fn shock_index() -> Command {
    Command::cargo_bin("ecds-shock-index").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    shock_index()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ecds-shock-index"));
}

#[test]
fn cli_help_flag() {
    shock_index()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ECDS Shock Index"));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    shock_index()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn single_requires_all_four_factors() {
    shock_index()
        .args(["single", "--ccs", "0.5", "--eav", "0.5", "--cpr", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn batch_requires_both_input_paths() {
    shock_index()
        .args(["batch", "--ecds", "ecds.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn incomplete_legacy_arguments_fall_back_to_help() {
    shock_index()
        .args(["--ccs", "0.5", "--eav", "0.5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    shock_index()
        .args(["-q", "-v", "single", "--ccs", "0.5", "--eav", "0.5", "--cpr", "0.5", "--wm", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
