use crate::cli::support::{setup_test_dir, skillbot, write_file, SCIENCE_TRANSCRIPT};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Transcript command tests
// ============================================================================

#[test]
fn test_transcript_json_rows_and_subjects() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "ocr.json", SCIENCE_TRANSCRIPT);

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "transcript", &file])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["subject"], "ENGLISH");
    assert_eq!(rows[0]["maximum"], 150);
    assert_eq!(rows[0]["obtained"], 120);
    assert_eq!(json["subjects"]["math"], 140);
    assert_eq!(json["subjects"]["biology"], 0);
}

#[test]
fn test_transcript_paddle_shape() {
    let dir = tempdir().unwrap();
    let paddle = r#"[[
        [[[0,0],[1,0],[1,1],[0,1]], ["SUBJECT - WISE STATEMENT OF MARKS", 0.99]],
        [[[0,0],[1,0],[1,1],[0,1]], ["BIOLOGY", 0.97]],
        [[[0,0],[1,0],[1,1],[0,1]], ["150", 0.99]],
        [[[0,0],[1,0],[1,1],[0,1]], ["141", 0.98]]
    ]]"#;
    let file = write_file(dir.path(), "paddle.json", paddle);

    skillbot()
        .current_dir(dir.path())
        .args(["--format", "records", "transcript", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("M BIOLOGY maximum=150 obtained=141"))
        .stdout(predicate::str::contains("S biology obtained=141"));
}

#[test]
fn test_transcript_plain_text_lines() {
    let dir = tempdir().unwrap();
    let file = write_file(
        dir.path(),
        "ocr.txt",
        "SUBJECT\nMATHEMATICS\n100\n85\nPHYSICS\n100\n78\n",
    );

    skillbot()
        .current_dir(dir.path())
        .args(["transcript", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("MATHEMATICS"))
        .stdout(predicate::str::is_match(r"physics\s+78").unwrap());
}

#[test]
fn test_transcript_without_marks_warns() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "blank.json", r#"["BOARD", "CERTIFICATE"]"#);

    skillbot()
        .current_dir(dir.path())
        .args(["transcript", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("No marks found"))
        .stderr(predicate::str::contains("no marks could be parsed"));
}

#[test]
fn test_transcript_unsupported_json_shape() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "bad.json", r#"{"pages": 2}"#);

    skillbot()
        .current_dir(dir.path())
        .args(["transcript", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_transcript_save_replaces_marks() {
    let dir = setup_test_dir();
    let file = write_file(dir.path(), "ocr.json", SCIENCE_TRANSCRIPT);

    skillbot()
        .current_dir(dir.path())
        .args(["transcript", &file, "--save", "--user", "sara"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 6 mark rows"));
}
