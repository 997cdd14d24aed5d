//! End-to-end tests of the CLI against a mocked assessments endpoint.
//!
//! The binary runs on a blocking thread while wiremock serves requests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run(
    dir: &TempDir,
    endpoint: String,
    args: &'static [&'static str],
    stdin: &'static str,
) -> assert_cmd::assert::Assert {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("skillsync").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("SKILLSYNC_ENDPOINT")
        .arg("--endpoint")
        .arg(endpoint)
        .args(args)
        .write_stdin(stdin)
        .assert()
}

fn listing() -> Value {
    json!({"Skill-Assessments": [
        {"SkillAssessmentId": "SA_1", "Employee": "Jane", "Skill": "Go",
         "Current": "Beginner", "Target": "Advanced"},
        {"SkillAssessmentId": "SA_2", "Employee": "Raj", "Skill": "SQL",
         "Current": "Advanced", "Target": "Expert"}
    ]})
}

async fn mount_list(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(body_json(json!({"operation": "list"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn add_sends_one_create_with_generated_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operation": "create",
            "Employee": "Jane",
            "Skill": "Go",
            "Current": "Beginner",
            "Target": "Advanced"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Created"})))
        .expect(1)
        .mount(&server)
        .await;
    // Refresh plus grid sync.
    mount_list(&server, 2).await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        run(
            &dir,
            uri,
            &[
                "add",
                "--employee",
                "Jane",
                "--skill",
                "Go",
                "--current",
                "Beginner",
                "--target",
                "Advanced",
            ],
            "",
        )
        .success()
        .stdout(predicate::str::contains("Assessment added successfully!"))
        .stdout(predicate::str::contains("2 assessment(s) listed."));
    })
    .await
    .unwrap();

    let creates: Vec<Value> = bodies(&server)
        .await
        .into_iter()
        .filter(|b| b["operation"] == "create")
        .collect();
    assert_eq!(creates.len(), 1);
    let id = creates[0]["SkillAssessmentId"].as_str().unwrap();
    assert!(id.starts_with("SA_"), "unexpected id {id}");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_every_record() {
    let server = MockServer::start().await;
    mount_list(&server, 1).await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        run(&dir, uri, &["list"], "")
            .success()
            .stdout(predicate::str::contains("Jane"))
            .stdout(predicate::str::contains("Raj"))
            .stdout(predicate::str::contains("Expert"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn declined_delete_sends_nothing() {
    let server = MockServer::start().await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        run(&dir, uri, &["delete", "SA_1"], "no\n")
            .success()
            .stdout(predicate::str::contains("Cancelled."));
    })
    .await
    .unwrap();

    assert!(bodies(&server).await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_list_is_reported_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        run(&dir, uri, &["list"], "")
            .failure()
            .stderr(predicate::str::contains("HTTP 502"));
    })
    .await
    .unwrap();
}
