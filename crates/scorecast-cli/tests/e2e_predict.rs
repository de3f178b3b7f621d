//! End-to-end predict flows against a mock prediction service.
//!
//! Each test boots a wiremock server, points the binary at it through
//! `SCORECAST_BASE_URL`, and drives the real CLI in a blocking task.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETE_RECORD: &str = r#"[student]
gender = "female"
ethnic_group = "group C"
parent_educ = "bachelor's degree"
lunch_type = "standard"
test_prep = "none"
parent_marital_status = "married"
practice_sport = "sometimes"
is_first_child = "yes"
nr_siblings = 1
transport_means = "schoolbus"
wkly_study_hours = "between 5 and 10hrs"
math_score = 72
writing_score = 70
"#;

#[allow(deprecated)]
fn scorecast() -> Command {
    Command::cargo_bin("scorecast").unwrap()
}

#[tokio::test]
async fn predict_success_prints_the_formatted_score() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predicted_reading_score": 72.5,
            "confidence": "high",
            "features_used": ["Gender", "MathScore", "WritingScore"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("student.toml"), COMPLETE_RECORD).unwrap();

    let uri = server.uri();
    let workdir = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        scorecast()
            .current_dir(&workdir)
            .env("SCORECAST_BASE_URL", &uri)
            .arg("predict")
            .arg("--record")
            .arg("student.toml")
            .assert()
            .success()
            .stdout(predicate::str::contains("Predicted reading score: 72.5"))
            .stdout(predicate::str::contains("Confidence: high"));
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn predict_server_error_prints_the_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("student.toml"), COMPLETE_RECORD).unwrap();

    let uri = server.uri();
    let workdir = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        scorecast()
            .current_dir(&workdir)
            .env("SCORECAST_BASE_URL", &uri)
            .arg("predict")
            .arg("--record")
            .arg("student.toml")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to get prediction"))
            // The response body is never echoed.
            .stderr(predicate::str::contains("model exploded").not());
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn resubmitting_issues_independent_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"predicted_reading_score": 64.0})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("student.toml"), COMPLETE_RECORD).unwrap();

    let uri = server.uri();
    let workdir = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        for _ in 0..2 {
            scorecast()
                .current_dir(&workdir)
                .env("SCORECAST_BASE_URL", &uri)
                .arg("predict")
                .arg("--record")
                .arg("student.toml")
                .assert()
                .success()
                .stdout(predicate::str::contains("64.0"));
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn batch_predicts_a_directory_and_saves_a_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "predicted_reading_score": 70.25,
            "confidence": "medium"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().join("records");
    std::fs::create_dir(&records).unwrap();
    std::fs::write(records.join("alice.toml"), COMPLETE_RECORD).unwrap();
    std::fs::write(records.join("bob.toml"), COMPLETE_RECORD).unwrap();
    // A partial record fails locally without a request.
    std::fs::write(
        records.join("carol.toml"),
        "[student]\ngender = \"female\"\n",
    )
    .unwrap();

    let uri = server.uri();
    let workdir = dir.path().to_path_buf();
    tokio::task::spawn_blocking(move || {
        scorecast()
            .current_dir(&workdir)
            .env("SCORECAST_BASE_URL", &uri)
            .arg("predict")
            .arg("--record")
            .arg("records")
            .arg("--output")
            .arg("report.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("alice.toml"))
            .stdout(predicate::str::contains("bob.toml"))
            .stdout(predicate::str::contains("70.2"))
            .stdout(predicate::str::contains("Complete: 2/3 predicted, 1 failed"));
    })
    .await
    .unwrap();

    let report =
        scorecast_core::report::RunReport::load_json(&dir.path().join("report.json")).unwrap();
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.predicted(), 2);
    assert!(report
        .results
        .iter()
        .any(|r| r.record.ends_with("carol.toml")
            && r.error.as_deref().is_some_and(|e| e.contains("incomplete"))));
}
