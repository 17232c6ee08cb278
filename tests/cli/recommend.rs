use crate::cli::support::{
    riasec_answers, setup_test_dir, skillbot, tci_answers, write_file, SCIENCE_TRANSCRIPT,
};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Recommend and fields command tests
// ============================================================================

fn science_riasec() -> String {
    riasec_answers(["Like", "Strongly Like", "Dislike", "Unsure", "Dislike", "Like"])
}

#[test]
fn test_recommend_from_files_without_store() {
    let dir = tempdir().unwrap();
    let riasec = write_file(dir.path(), "riasec.txt", &science_riasec());
    let tci = write_file(dir.path(), "tci.txt", &tci_answers("True"));
    let transcript = write_file(dir.path(), "ocr.json", SCIENCE_TRANSCRIPT);

    let output = skillbot()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "recommend",
            "--riasec",
            &riasec,
            "--tci",
            &tci,
            "--transcript",
            &transcript,
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rec = &json["recommendation"];
    let fields = rec["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 6);

    let total: f64 = fields
        .iter()
        .map(|f| f["probability"].as_f64().unwrap())
        .sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(rec["top_field"], fields[0]["field"]);
    assert!(matches!(
        rec["top_field"].as_str().unwrap(),
        "Engineering" | "Computer Science"
    ));
    assert_eq!(rec["subfields"].as_array().unwrap().len(), 5);
    assert_eq!(rec["weights_version"], 1);
}

#[test]
fn test_recommend_from_saved_data() {
    let dir = setup_test_dir();
    let riasec = write_file(dir.path(), "riasec.txt", &science_riasec());
    let tci = write_file(dir.path(), "tci.txt", &tci_answers("False"));
    let transcript = write_file(dir.path(), "ocr.json", SCIENCE_TRANSCRIPT);

    for args in [
        vec!["score", "riasec", riasec.as_str(), "--save", "--user", "ali"],
        vec!["score", "tci", tci.as_str(), "--save", "--user", "ali"],
        vec!["transcript", transcript.as_str(), "--save", "--user", "ali"],
    ] {
        skillbot().current_dir(dir.path()).args(&args).assert().success();
    }

    skillbot()
        .current_dir(dir.path())
        .args(["--format", "records", "recommend", "--user", "ali"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H skillbot=1 records=1 mode=recommend user=ali weights=1"))
        .stdout(predicate::str::contains("F Medical score="))
        .stdout(predicate::str::contains("U "));
}

#[test]
fn test_recommend_missing_saved_result() {
    let dir = setup_test_dir();

    skillbot()
        .current_dir(dir.path())
        .args(["recommend", "--user", "nobody"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("saved result for user not found: nobody"));
}

#[test]
fn test_recommend_with_empty_transcript() {
    let dir = tempdir().unwrap();
    let riasec = write_file(
        dir.path(),
        "riasec.txt",
        &riasec_answers(["Unsure"; 6]),
    );
    let blank = write_file(
        dir.path(),
        "blank.json",
        r#"["BOARD OF INTERMEDIATE EDUCATION", "CERTIFICATE"]"#,
    );

    // trait scores alone still rank every field
    skillbot()
        .current_dir(dir.path())
        .args(["recommend", "--riasec", &riasec, "--transcript", &blank])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended:"))
        .stderr(predicate::str::contains("(2 fragments)"))
        .stderr(predicate::str::contains("(0 fragments)").not())
        .stderr(predicate::str::contains("no mark rows"));
}

#[test]
fn test_recommend_uses_configured_weights() {
    let dir = setup_test_dir();
    let weights = r#"
version = 9

[fields.Medical]
subjects = { biology = 1.0 }
traits = { riasec_I = 0.3 }

[fields.Engineering]
subjects = { physics = 1.0 }
traits = { riasec_R = 0.3 }

[fields."Computer Science"]
subjects = { chemistry = 1.0 }
traits = { riasec_C = 0.3 }

[fields.Business]
subjects = { english = 1.0 }
traits = { riasec_E = 0.3 }

[fields.Arts]
subjects = { urdu = 1.0 }
traits = { riasec_A = 0.3 }

[fields.Commerce]
subjects = { math = 1.0 }
traits = { riasec_C = 0.3 }
"#;
    fs::write(dir.path().join(".skillbot/weights.toml"), weights).unwrap();
    fs::write(
        dir.path().join(".skillbot/config.toml"),
        "version = 1\nweights = \"weights.toml\"\n",
    )
    .unwrap();

    let riasec = write_file(dir.path(), "riasec.txt", &riasec_answers(["Dislike"; 6]));
    let tci = write_file(dir.path(), "tci.txt", &tci_answers("False"));
    let transcript = write_file(dir.path(), "ocr.json", SCIENCE_TRANSCRIPT);

    skillbot()
        .current_dir(dir.path())
        .args([
            "--format",
            "records",
            "recommend",
            "--riasec",
            &riasec,
            "--tci",
            &tci,
            "--transcript",
            &transcript,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("weights=9 top=Commerce"));
}

#[test]
fn test_recommend_rejects_weights_on_unscored_subject() {
    let dir = setup_test_dir();
    let mut table = String::from("version = 3\n");
    for (field, subject) in [
        ("Medical", "biology"),
        ("Engineering", "physics"),
        ("\"Computer Science\"", "computer"),
        ("Business", "english"),
        ("Arts", "urdu"),
        ("Commerce", "math"),
    ] {
        table.push_str(&format!(
            "[fields.{field}]\nsubjects = {{ {subject} = 1.0 }}\ntraits = {{ riasec_C = 0.3 }}\n"
        ));
    }
    fs::write(dir.path().join(".skillbot/weights.toml"), table).unwrap();
    fs::write(
        dir.path().join(".skillbot/config.toml"),
        "version = 1\nweights = \"weights.toml\"\n",
    )
    .unwrap();

    skillbot()
        .current_dir(dir.path())
        .arg("fields")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot weight subject computer"));
}

#[test]
fn test_fields_lists_catalog() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("Computer Science"))
        .stdout(predicate::str::contains("MBBS"))
        .stdout(predicate::str::contains("biology=0.40"));
}

#[test]
fn test_fields_json() {
    let dir = tempdir().unwrap();

    let output = skillbot()
        .current_dir(dir.path())
        .args(["--format", "json", "fields"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["weights_version"], 1);
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[2]["field"], "Computer Science");
    assert_eq!(fields[0]["weights"]["subjects"]["biology"], 0.4);
}

#[test]
fn test_recommend_rejects_two_stdin_inputs() {
    let dir = tempdir().unwrap();

    skillbot()
        .current_dir(dir.path())
        .args(["recommend", "--riasec", "-", "--tci", "-"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("can read from stdin"));
}
