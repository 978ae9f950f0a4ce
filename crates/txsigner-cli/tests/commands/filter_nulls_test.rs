//! Tests for the `filter-nulls` command.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SIGNED: &str = r#"{"auth_info":{"fee":{"payer":null},"tip":null},"signatures":["c2ln"]}"#;

#[test]
fn test_filter_nulls_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signed.json");
    std::fs::write(&path, SIGNED).unwrap();

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("filter-nulls").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tip").not())
        .stdout(predicate::str::contains(r#""payer":null"#));

    // Untouched without --in-place
    assert_eq!(std::fs::read_to_string(&path).unwrap(), SIGNED);
}

#[test]
fn test_filter_nulls_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signed.json");
    std::fs::write(&path, SIGNED).unwrap();

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("filter-nulls").arg(&path).arg("--in-place");
    cmd.assert().success();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(written["auth_info"].get("tip").is_none());
    assert!(written["auth_info"]["fee"].get("payer").is_some());
}

#[test]
fn test_filter_nulls_passes_malformed_through() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, "{\"tip\": nul").unwrap();

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("filter-nulls").arg(&path);

    cmd.assert()
        .success()
        .stdout("{\"tip\": nul");
}
