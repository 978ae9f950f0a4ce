//! Tests for the `register` command.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_tx(dir: &TempDir, type_url: &str) -> std::path::PathBuf {
    let path = dir.path().join("unsigned.json");
    let tx = serde_json::json!({"body": {"messages": [{"@type": type_url}]}});
    std::fs::write(&path, serde_json::to_vec(&tx).unwrap()).unwrap();
    path
}

#[test]
fn test_register_requires_plugins_dir() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir, "/cosmos.bank.v1beta1.MsgBurn");

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.env_remove("TXSIGNER_PLUGINS_DIR").arg("register").arg(&tx);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("plugins-dir"));
}

#[test]
fn test_register_builtin_only() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir, "/cosmos.bank.v1beta1.MsgSend");

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("register")
        .arg(&tx)
        .arg("--plugins-dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All types already registered"));
}

#[test]
fn test_register_missing_extension() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir, "/cosmos.unknown.v1beta1.MsgFoo");

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("register")
        .arg(&tx)
        .arg("--plugins-dir")
        .arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cosmos_unknown_v1beta1_RegisterLegacyAminoCodec",
        ));
}

#[test]
fn test_register_plugins_dir_from_env() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir, "/cosmos.unknown.v1beta1.MsgFoo");

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.env("TXSIGNER_PLUGINS_DIR", dir.path())
        .arg("register")
        .arg(&tx);

    // Gets past configuration and fails on the lookup itself
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to lookup symbol"));
}

#[test]
fn test_register_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir, "/cosmos.bank.v1beta1.MsgSend");

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TXSIGNER_LOG_JSON")
        .arg("-v")
        .arg("register")
        .arg(&tx)
        .arg("--plugins-dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Scanning 1 message(s)"))
        .stdout(predicate::str::contains("Scanning").not());
}

#[test]
fn test_register_quiet_by_default() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir, "/cosmos.bank.v1beta1.MsgSend");

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("TXSIGNER_LOG_JSON")
        .arg("register")
        .arg(&tx)
        .arg("--plugins-dir")
        .arg(dir.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Scanning").not());
}
