use crate::cli::support::{riasec_answers, setup_test_dir, skillbot, tci_answers, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Score command tests
// ============================================================================

#[test]
fn test_score_riasec_human() {
    let dir = tempdir().unwrap();
    let answers = riasec_answers([
        "Strongly Like",
        "Like",
        "Unsure",
        "Dislike",
        "Strongly Dislike",
        "Like",
    ]);
    let file = write_file(dir.path(), "answers.txt", &answers);

    skillbot()
        .current_dir(dir.path())
        .args(["score", "riasec", &file])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"R\s+5\.00").unwrap())
        .stdout(predicate::str::contains("Top interests and careers:"));
}

#[test]
fn test_score_riasec_json_top_interests() {
    let dir = tempdir().unwrap();
    let answers = riasec_answers(["Unsure", "Strongly Like", "Like", "Dislike", "Unsure", "Like"]);
    let file = write_file(dir.path(), "answers.json", &answers);

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "score", "riasec", &file])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["scores"]["I"], 5.0);
    assert_eq!(json["scores"]["S"], 2.0);
    // Ties rank by category name: A and C both 4.0
    assert_eq!(json["top_interests"], serde_json::json!(["I", "A", "C"]));
    assert_eq!(json["careers"].as_array().unwrap().len(), 3);
    assert!(json["saved"].is_null());
}

#[test]
fn test_score_tci_sums_traits() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "tci.txt", &tci_answers("True"));

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "score", "tci", &file])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["scores"]["Persistence"], 3.0);
    assert_eq!(json["scores"]["Harm Avoidance"], 3.0);
    assert_eq!(json["careers"], serde_json::json!([]));
}

#[test]
fn test_score_length_mismatch_is_data_error() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "short.txt", "Like\nLike\n");

    skillbot()
        .current_dir(dir.path())
        .args(["score", "riasec", &file])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("riasec"));
}

#[test]
fn test_score_unknown_label_json_error() {
    let dir = tempdir().unwrap();
    let mut answers = vec!["True"; 21];
    answers[4] = "Maybe";
    let file = write_file(dir.path(), "bad.txt", &answers.join("\n"));

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "score", "tci", &file])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "unrecognized_answer_value");
    assert!(err["error"]["message"].as_str().unwrap().contains("Maybe"));
}

#[test]
fn test_score_missing_file() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["score", "riasec", "nope.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn test_score_save_requires_store() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "tci.txt", &tci_answers("False"));

    skillbot()
        .current_dir(dir.path())
        .args(["score", "tci", &file, "--save"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

#[test]
fn test_score_save_records_id() {
    let dir = setup_test_dir();
    let file = write_file(dir.path(), "tci.txt", &tci_answers("True"));

    skillbot()
        .current_dir(dir.path())
        .args(["--format", "records", "score", "tci", &file, "--save", "--user", "ali"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=score questionnaire=tci user=ali saved="))
        .stdout(predicate::str::contains("S Persistence score=3.00"));
}

#[test]
fn test_score_from_stdin() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["--format", "records", "score", "tci", "-"])
        .write_stdin(tci_answers("F"))
        .assert()
        .success()
        .stdout(predicate::str::contains("S Persistence score=0.00"));
}
