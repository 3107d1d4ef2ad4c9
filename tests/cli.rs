use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn circuit() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/circuit.yaml")
}

fn respath() -> Command {
    Command::cargo_bin("respath").expect("binary builds")
}

#[test]
fn text_output_shows_path_and_report() {
    respath()
        .arg("--topology")
        .arg(circuit())
        .assert()
        .success()
        .stdout(predicate::str::contains("path: 1 -> 3 -> 4 (resistance 20)"))
        .stdout(predicate::str::contains("vertex 6: resistance 11 from 3"))
        .stdout(predicate::str::contains("vertex 1: resistance 0 (source)"));
}

#[test]
fn flags_override_query() {
    respath()
        .arg("--topology")
        .arg(circuit())
        .args(["--source", "5", "--target", "1", "--frontier", "heap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: 5 -> 6 -> 3 -> 1 (resistance 20)"));
}

#[test]
fn json_output_is_parseable() {
    let output = respath()
        .arg("--topology")
        .arg(circuit())
        .args(["--format", "json"])
        .output()
        .expect("run respath");
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(body["source"], 1);
    assert_eq!(body["frontier"], "linear_scan");
    assert_eq!(body["path"]["nodes"], serde_json::json!([1, 3, 4]));
    assert_eq!(body["path"]["distance"], 20.0);
    assert_eq!(body["vertices"].as_array().map(Vec::len), Some(6));
}

#[test]
fn dot_file_highlights_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let dot = dir.path().join("circuit.dot");

    respath()
        .arg("--topology")
        .arg(circuit())
        .arg("--dot")
        .arg(&dot)
        .assert()
        .success();

    let text = std::fs::read_to_string(&dot).expect("dot written");
    assert!(text.contains("\"1\" -- \"3\" [label=\"9\", color=\"red\", penwidth=2];"));
    assert!(text.contains("\"3\" -- \"4\" [label=\"11\", color=\"red\", penwidth=2];"));
    assert!(text.contains("\"1\" -- \"2\" [label=\"7\"];"));
}

#[test]
fn unknown_source_fails() {
    respath()
        .arg("--topology")
        .arg(circuit())
        .args(["--source", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vertex 42 not found"));
}

fn isolated_target_topology(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("isolated.yaml");
    std::fs::write(
        &path,
        "vertices: [1, 2, 3]\nedges:\n  - { a: 1, b: 2, resistance: 1 }\n",
    )
    .expect("write topology");
    path
}

#[test]
fn unreachable_target_reports_no_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    respath()
        .arg("--topology")
        .arg(isolated_target_topology(&dir))
        .args(["--source", "1", "--target", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from 1 to 3"))
        .stdout(predicate::str::contains("vertex 3: unreached"))
        .stdout(predicate::str::contains("path:").not());
}

#[test]
fn unreachable_target_is_null_in_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = respath()
        .arg("--topology")
        .arg(isolated_target_topology(&dir))
        .args(["--source", "1", "--target", "3", "--format", "json"])
        .output()
        .expect("run respath");
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(body["path"], serde_json::Value::Null);
    assert_eq!(body["vertices"][2]["id"], 3);
    assert_eq!(body["vertices"][2]["distance"], serde_json::Value::Null);
}
