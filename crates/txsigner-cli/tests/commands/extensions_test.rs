//! Tests for the `extensions` command.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn module_name(stem: &str) -> String {
    let ext = if cfg!(target_os = "macos") {
        "dylib"
    } else if cfg!(target_os = "windows") {
        "dll"
    } else {
        "so"
    };
    format!("{}.{}", stem, ext)
}

#[test]
fn test_extensions_lists_modules() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(module_name("libbank")), b"").unwrap();
    std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("extensions").arg("--plugins-dir").arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(module_name("libbank")))
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("Total: 1 module(s)"));
}

#[test]
fn test_extensions_missing_dir() {
    let mut cmd = Command::cargo_bin("txsigner").unwrap();
    cmd.arg("extensions")
        .arg("--plugins-dir")
        .arg("/nonexistent/plugins");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read plugins directory"));
}
