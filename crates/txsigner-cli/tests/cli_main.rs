//! Basic CLI tests for the txsigner command-line interface.

use assert_cmd::Command;
use predicates::prelude::*;

mod commands;

/// Test that the CLI binary exists and shows help.
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Register extension message types"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("extensions"))
        .stdout(predicate::str::contains("filter-nulls"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("txsigner"));
}

#[test]
fn test_verbose_flag_accepted() {
    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("--verbose").arg("--help");

    cmd.assert().success();
}

/// Test that providing no subcommand shows an error.
#[test]
fn test_no_subcommand_shows_error() {
    let mut cmd = Command::cargo_bin("txsigner").unwrap();

    // Clap's error code for a missing subcommand
    cmd.assert().failure().code(2);
}
