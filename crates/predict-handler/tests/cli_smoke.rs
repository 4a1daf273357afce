//! Smoke tests for the `predict-local` binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("predict-local").unwrap();
    cmd.env_remove("PREDICT_MODEL_PATH");
    cmd
}

fn bundled_model() -> String {
    format!("{}/tmp/model.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--pretty"));
}

#[test]
fn prints_response_for_bundled_model() {
    cmd()
        .args(["--model", &bundled_model()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""statusCode":200"#))
        .stdout(predicate::str::contains(r#""body":"[0]""#));
}

#[test]
fn pretty_output_is_valid_json() {
    let output = cmd()
        .args(["--model", &bundled_model(), "--pretty"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["statusCode"], 200);
    assert_eq!(value["headers"]["Access-Control-Allow-Credentials"], true);
}

#[test]
fn config_file_supplies_model_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("handler.json");
    std::fs::write(
        &config,
        serde_json::json!({ "model_path": bundled_model() }).to_string(),
    )
    .unwrap();
    cmd()
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""body":"[0]""#));
}

#[test]
fn missing_model_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    cmd()
        .args(["--model", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
