#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn asl_index_cmd() -> Command {
    Command::cargo_bin("asl-index").expect("binary should be built")
}

fn offline_cmd(registry: &str) -> Command {
    let mut cmd = asl_index_cmd();
    cmd.arg("--registry-file").arg(fixtures_dir().join(registry));
    cmd
}

#[test]
fn help_lists_options() {
    asl_index_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--registry-url"))
        .stdout(predicate::str::contains("--registry-file"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn json_output_is_valid() {
    let output = offline_cmd("registry_offline.xml")
        .arg("--format")
        .arg("json")
        .output()
        .expect("command should run");

    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    assert_eq!(parsed["schema_version"], "0.1.0");
    assert_eq!(parsed["tool"]["name"], "asl-index");
    assert_eq!(parsed["tool"]["version"], "0.1.0");
    assert_eq!(parsed["script_count"], 0);
    assert!(parsed["scripts"].as_array().unwrap().is_empty());
    assert!(
        parsed["registry_url"]
            .as_str()
            .unwrap()
            .ends_with("registry_offline.xml")
    );
}

#[test]
fn text_output_has_header() {
    offline_cmd("registry_offline.xml")
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("asl-index 0.1.0\nScripts: 0\n"));
}

#[test]
fn html_is_written_to_out_path() {
    let dir = TempDir::new().expect("create temp dir");
    let out_path = dir.path().join("site").join("index.html");

    offline_cmd("registry_offline.xml")
        .arg("--out")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&out_path).expect("read output file");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("0 scripts"));
}

#[test]
fn html_defaults_to_docs_index() {
    let dir = TempDir::new().expect("create temp dir");

    offline_cmd("registry_offline.xml")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("docs").join("index.html").is_file());
}

#[test]
fn diagnostics_go_to_stderr() {
    offline_cmd("registry_offline.xml")
        .env("RUST_LOG", "warn")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stderr(predicate::str::contains("a component failed"))
        .stdout(predicate::str::contains("a component failed").not());
}

#[test]
fn unreachable_script_is_skipped() {
    let output = offline_cmd("registry_unreachable.xml")
        .arg("--timeout-secs")
        .arg("5")
        .arg("--format")
        .arg("json")
        .output()
        .expect("command should run");

    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["script_count"], 0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping script"));
}

#[test]
fn malformed_registry_fails() {
    let dir = TempDir::new().expect("create temp dir");
    let out_path = dir.path().join("index.html");

    offline_cmd("registry_malformed.xml")
        .arg("--out")
        .arg(&out_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse registry"));

    assert!(!out_path.exists());
}

#[test]
fn missing_registry_file_fails() {
    asl_index_cmd()
        .arg("--registry-file")
        .arg(fixtures_dir().join("does_not_exist.xml"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read registry"));
}

#[test]
fn registry_file_conflicts_with_url() {
    asl_index_cmd()
        .arg("--registry-file")
        .arg(fixtures_dir().join("registry_offline.xml"))
        .arg("--registry-url")
        .arg("https://example.invalid/registry.xml")
        .assert()
        .failure();
}
