//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studyforge() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("studyforge").unwrap()
}

fn write_material(dir: &Path) -> PathBuf {
    let path = dir.join("material.toml");
    std::fs::write(
        &path,
        r#"
name = "Biology Notes"
kind = "text"
topics = ["Cells", "Genetics"]
"#,
    )
    .unwrap();
    path
}

fn store_path(dir: &Path) -> PathBuf {
    dir.join("studyforge.json")
}

fn first_exam_id(store: &Path) -> String {
    let content = std::fs::read_to_string(store).unwrap();
    let profile: serde_json::Value = serde_json::from_str(&content).unwrap();
    profile["exams"][0]["id"].as_str().unwrap().to_string()
}

#[test]
fn upload_generate_take_results_pipeline() {
    let dir = TempDir::new().unwrap();
    let store = store_path(dir.path());
    let material = write_material(dir.path());

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("upload")
        .arg("--file")
        .arg(&material)
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploaded course material"))
        .stdout(predicate::str::contains("2 topics"));

    // objective/beginner/moderate → round(20 × 0.8) = 16 questions, 30 min.
    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("generate")
        .arg("--exam-type")
        .arg("objective")
        .arg("--difficulty")
        .arg("beginner")
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions: 16"))
        .stdout(predicate::str::contains("30 minutes"));

    let exam_id = first_exam_id(&store);

    // Question 1's correct option is index 0 (template key = slot mod 4);
    // question 2's is index 1, so choice 0 there scores nothing.
    let answers = dir.path().join("answers.toml");
    std::fs::write(
        &answers,
        r#"
[[answer]]
question = 1
choice = 0

[[answer]]
question = 2
choice = 0
"#,
    )
    .unwrap();

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("take")
        .arg("--exam")
        .arg(&exam_id)
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1.0 / 16"))
        .stdout(predicate::str::contains("Accuracy: 6%"));

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("Biology Notes"))
        .stdout(predicate::str::contains("6%"));

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("results")
        .arg("--exam")
        .arg(&exam_id)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cells"))
        .stdout(predicate::str::contains("Areas to improve"));

    // The exam is terminal now; taking it again is an invalid transition.
    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("take")
        .arg("--exam")
        .arg(&exam_id)
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid state"));
}

#[test]
fn generate_without_materials_fails() {
    let dir = TempDir::new().unwrap();

    studyforge()
        .arg("--store")
        .arg(store_path(dir.path()))
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no course materials"));
}

#[test]
fn generate_with_unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    let store = store_path(dir.path());
    let material = write_material(dir.path());

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("upload")
        .arg("--file")
        .arg(&material)
        .assert()
        .success();

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("generate")
        .arg("--exam-type")
        .arg("oral")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown exam type"));
}

#[test]
fn take_unknown_exam_fails() {
    let dir = TempDir::new().unwrap();
    let answers = dir.path().join("answers.toml");
    std::fs::write(&answers, "").unwrap();

    studyforge()
        .arg("--store")
        .arg(store_path(dir.path()))
        .arg("take")
        .arg("--exam")
        .arg("missing")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn list_shows_materials_and_exam_status() {
    let dir = TempDir::new().unwrap();
    let store = store_path(dir.path());
    let material = write_material(dir.path());

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("upload")
        .arg("--file")
        .arg(&material)
        .assert()
        .success();

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("generate")
        .arg("--exam-type")
        .arg("essay")
        .arg("--intensity")
        .arg("challenging")
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions: 5"))
        .stdout(predicate::str::contains("45 minutes"));

    studyforge()
        .arg("--store")
        .arg(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Biology Notes"))
        .stdout(predicate::str::contains("pending"));
}
