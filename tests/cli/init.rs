use crate::cli::support::skillbot;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized skillbot store"));

    assert!(dir.path().join(".skillbot").is_dir());
    assert!(dir.path().join(".skillbot/config.toml").exists());
    assert!(dir.path().join(".skillbot/skillbot.db").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    skillbot().current_dir(dir.path()).arg("init").assert().success();
    fs::write(
        dir.path().join(".skillbot/config.toml"),
        "version = 1\nweights = \"w.toml\"\n",
    )
    .unwrap();
    skillbot().current_dir(dir.path()).arg("init").assert().success();

    let config = fs::read_to_string(dir.path().join(".skillbot/config.toml")).unwrap();
    assert!(config.contains("w.toml"));
}

#[test]
fn test_init_explicit_store_path() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["--store", "data/profiles", "init"])
        .assert()
        .success();

    assert!(dir.path().join("data/profiles/config.toml").exists());
}

#[test]
fn test_init_json_output() {
    let dir = tempdir().unwrap();

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["store"].as_str().unwrap().ends_with(".skillbot"));
}

#[test]
fn test_init_records_output() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H skillbot=1 records=1 mode=init"));
}
