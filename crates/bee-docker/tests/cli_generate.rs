//! CLI integration tests for `bee-docker`.
//!
//! These tests verify that the generator:
//! - Writes one compose stanza, node directory and address per node
//! - Produces keystores that open with the password in the node's bee.yml
//! - Refuses to touch existing node directories
//! - Exits 1 on malformed or missing arguments

#![allow(deprecated)] // Command::cargo_bin is deprecated but still works

use std::fs;

use assert_cmd::Command;
use bee_docker::bee_config::password_from_config;
use beekit_crypto::Keystore;
use predicates::prelude::*;
use tempfile::TempDir;

fn bee_docker() -> Command {
    let mut cmd = Command::cargo_bin("bee-docker").expect("find bee-docker binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_generate_three_nodes() {
    let temp_dir = TempDir::new().expect("create temp dir");

    bee_docker()
        .arg("3")
        .arg("--output")
        .arg(temp_dir.path())
        .arg("--user")
        .arg("root")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating node 1\n"))
        .stdout(predicate::str::contains("Creating node 3\n"))
        .stdout(predicate::str::contains("docker-compose.yml created"))
        .stdout(predicate::str::contains("addresses.txt created"))
        .stdout(predicate::str::contains("Directories created"));

    let compose = fs::read_to_string(temp_dir.path().join("docker-compose.yml")).unwrap();
    assert!(compose.starts_with("services:\n"));
    assert_eq!(compose.matches("command: start --config /home/bee/bee.yml").count(), 3);
    for (id, api, p2p, debug) in [("01", 1633, 1634, 1635), ("03", 1639, 1640, 1641)] {
        assert!(compose.contains(&format!("    bee_{}:\n", id)));
        assert!(compose.contains(&format!("container_name: bee-node_{}\n", id)));
        assert!(compose.contains(&format!("- ./node_{}:/home/bee/\n", id)));
        assert!(compose.contains(&format!("- 127.0.0.1:{}:1633 # bee api port\n", api)));
        assert!(compose.contains(&format!("- {}:1634 # p2p port\n", p2p)));
        assert!(compose.contains(&format!("- 127.0.0.1:{}:1635 # debug port\n", debug)));
    }

    let addresses = fs::read_to_string(temp_dir.path().join("addresses.txt")).unwrap();
    assert!(addresses.ends_with('\n'));
    let addresses: Vec<&str> = addresses.lines().collect();
    assert_eq!(addresses.len(), 3);

    for (n, address) in (1..=3).zip(&addresses) {
        let node_dir = temp_dir.path().join(format!("node_{:02}", n));
        let keys: Vec<_> = fs::read_dir(node_dir.join("bee-data/keys"))
            .unwrap()
            .collect();
        assert_eq!(keys.len(), 1, "exactly one keystore per node");

        let config = fs::read_to_string(node_dir.join("bee.yml")).unwrap();
        let password = password_from_config(&config).expect("password in bee.yml");
        assert_eq!(password.len(), 20);

        let raw = fs::read_to_string(node_dir.join("bee-data/keys/swarm.key")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 3);
        assert_eq!(json["crypto"]["kdf"], "scrypt");
        assert_eq!(
            json["address"].as_str().unwrap(),
            address.trim_start_matches("0x").to_lowercase()
        );

        let wallet = Keystore::from_json(&raw)
            .unwrap()
            .decrypt_wallet(password)
            .expect("keystore opens with bee.yml password");
        assert_eq!(&wallet.checksum_address(), address);
    }
}

#[test]
fn test_cli_generate_existing_node_dir_fails() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let existing = temp_dir.path().join("node_02");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("bee.yml"), "password: keep\n").unwrap();

    bee_docker()
        .arg("3")
        .arg("-o")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory node_02 already exists"));

    assert!(!temp_dir.path().join("docker-compose.yml").exists());
    assert!(!temp_dir.path().join("addresses.txt").exists());
    assert!(!temp_dir.path().join("node_01").exists());
    assert_eq!(
        fs::read_to_string(existing.join("bee.yml")).unwrap(),
        "password: keep\n"
    );
}

#[test]
fn test_cli_generate_rejects_non_numeric_count() {
    let temp_dir = TempDir::new().expect("create temp dir");

    bee_docker()
        .arg("abc")
        .current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please provide a number"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_generate_requires_count() {
    bee_docker().assert().code(1);
}

#[test]
fn test_cli_generate_rejects_zero() {
    let temp_dir = TempDir::new().expect("create temp dir");
    bee_docker()
        .arg("0")
        .current_dir(temp_dir.path())
        .assert()
        .code(1);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_generate_user_from_env() {
    let temp_dir = TempDir::new().expect("create temp dir");

    bee_docker()
        .env("USER", "swarm")
        .arg("1")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success();

    let compose = fs::read_to_string(temp_dir.path().join("docker-compose.yml")).unwrap();
    assert!(compose.contains("        user: swarm\n"));
}

#[test]
fn test_cli_generate_dry_run() {
    let temp_dir = TempDir::new().expect("create temp dir");

    bee_docker()
        .arg("2")
        .arg("--dry-run")
        .arg("--image")
        .arg("ethersphere/bee:2.2.0")
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("image: ethersphere/bee:2.2.0"))
        .stdout(predicate::str::contains("node_02"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
