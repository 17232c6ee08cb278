use crate::cli::support::skillbot;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Logging goes to stderr and never pollutes stdout
// ============================================================================

#[test]
fn test_log_level_debug_writes_stderr() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "fields"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_level_hides_debug() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .arg("fields")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_enables_debug() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["--verbose", "fields"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--log-json", "--log-level", "debug", "fields"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(parsed.get("level").is_some());
}
