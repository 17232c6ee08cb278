use crate::cli::support::skillbot;
use predicates::prelude::*;

// ============================================================================
// Help, version and argument errors
// ============================================================================

#[test]
fn test_help_flag() {
    skillbot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: skillbot"))
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("transcript"))
        .stdout(predicate::str::contains("recommend"));
}

#[test]
fn test_version_flag() {
    skillbot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("skillbot"));
}

#[test]
fn test_no_command_prints_banner() {
    skillbot()
        .assert()
        .success()
        .stdout(predicate::str::contains("skillbot --help"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    skillbot().arg("frobnicate").assert().code(2);
}

#[test]
fn test_unknown_command_json_envelope() {
    skillbot()
        .args(["--format", "json", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\": \"usage_error\"").or(
            predicate::str::contains("\"type\":\"usage_error\""),
        ));
}

#[test]
fn test_invalid_format_rejected() {
    skillbot()
        .args(["--format", "yaml", "fields"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid format"));
}
