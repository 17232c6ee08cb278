use crate::cli::support::skillbot;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_questions_riasec_without_store() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["questions", "riasec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build kitchen cabinets"))
        .stdout(predicate::str::contains("Strongly Dislike"));
}

#[test]
fn test_questions_tci_json() {
    let dir = tempdir().unwrap();

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "questions", "tci"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["questionnaire"], "tci");
    assert_eq!(json["questions"].as_array().unwrap().len(), 21);
    assert_eq!(json["choices"], serde_json::json!(["True", "False"]));
}

#[test]
fn test_questions_uses_configured_bank() {
    let dir = tempdir().unwrap();
    skillbot().current_dir(dir.path()).arg("init").assert().success();

    std::fs::write(
        dir.path().join(".skillbot/tci.csv"),
        "id,question,category\nq1,I like puzzles,Persistence\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(".skillbot/config.toml"),
        "version = 1\ntci_bank = \"tci.csv\"\n",
    )
    .unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["--format", "records", "questions", "tci"])
        .assert()
        .success()
        .stdout(predicate::str::contains("count=1"))
        .stdout(predicate::str::contains("Q q1 category=Persistence"));
}
