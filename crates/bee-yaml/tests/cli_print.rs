//! CLI integration tests for `bee-yaml`.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still works

use assert_cmd::Command;
use bee_yaml::BEE_YAML;
use predicates::prelude::*;

fn bee_yaml() -> Command {
    let mut cmd = Command::cargo_bin("bee-yaml").expect("find bee-yaml binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_prints_document() {
    bee_yaml()
        .assert()
        .success()
        .stdout(format!("{}\n", BEE_YAML))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_output_is_constant() {
    let first = bee_yaml().output().unwrap();
    let second = bee_yaml().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_logs_stay_off_stdout() {
    bee_yaml()
        .arg("--log-level")
        .arg("debug")
        .arg("--log-no-color")
        .assert()
        .success()
        .stdout(format!("{}\n", BEE_YAML))
        .stderr(predicate::str::contains("printing configuration"));
}

#[test]
fn test_cli_rejects_unknown_argument() {
    bee_yaml()
        .arg("extra")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
