use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for skillbot
pub fn skillbot() -> Command {
    cargo_bin_cmd!("skillbot")
}

/// Setup a test store and return the directory
#[allow(dead_code)]
pub fn setup_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    skillbot()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Write a file under `dir` and return its name
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    fs::write(dir.join(name), content).unwrap();
    name.to_string()
}

/// Answers for the built-in RIASEC bank, five per category in R, I, A, S, E, C order
#[allow(dead_code)]
pub fn riasec_answers(per_category: [&str; 6]) -> String {
    per_category
        .iter()
        .flat_map(|label| std::iter::repeat(*label).take(5))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Answers for the built-in TCI bank, all with the same label
#[allow(dead_code)]
pub fn tci_answers(label: &str) -> String {
    vec![label; 21].join("\n")
}

/// OCR fragments for a transcript strong in science subjects
#[allow(dead_code)]
pub const SCIENCE_TRANSCRIPT: &str = r#"[
    "BOARD OF INTERMEDIATE EDUCATION",
    "SUBJECT - WISE STATEMENT OF MARKS",
    "SR.NO.", "SUBJECTS", "MAXIMUM", "MARKS", "OBTAINED",
    "ENGLISH", "150", "120",
    "URDU", "150", "100",
    "MATHEMATICS", "150", "140",
    "PHYSICS", "150", "135",
    "CHEMISTRY", "150", "130",
    "TOTAL", "1100", "900"
]"#;
