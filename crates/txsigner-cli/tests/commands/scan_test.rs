//! Tests for the `scan` command.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_tx(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("unsigned.json");
    let tx = serde_json::json!({
        "body": {
            "messages": [
                {"@type": "/cosmos.bank.v1beta1.MsgSend", "from_address": "a", "to_address": "b", "amount": []},
                {
                    "@type": "/cosmos.authz.v1beta1.MsgExec",
                    "msgs": [{"@type": "/cosmos.bank.v1beta1.MsgBurn", "amount": []}]
                }
            ]
        },
        "auth_info": {"tip": null},
        "signatures": []
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&tx).unwrap()).unwrap();
    path
}

#[test]
fn test_scan_prints_unresolved_types() {
    let dir = TempDir::new().unwrap();
    let tx = write_tx(&dir);

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("scan").arg(&tx);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("/cosmos.authz.v1beta1.MsgExec"))
        .stdout(predicate::str::contains("/cosmos.bank.v1beta1.MsgBurn"))
        .stdout(predicate::str::contains("MsgSend").not());
}

#[test]
fn test_scan_requires_tx() {
    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("scan");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required"))
        .stderr(predicate::str::contains("<TX>"));
}

#[test]
fn test_scan_malformed_tx() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"body\": [").unwrap();

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("scan").arg(&path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("JSON decode"));
}
