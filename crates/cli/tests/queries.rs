use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn setup_graph() -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("people.txt"), "1\n2\n3\n4\n").unwrap();
    fs::write(
        temp.path().join("relations.csv"),
        "1,2,sibling\n2,3,friend\nnot,a,valid,line\n",
    )
    .unwrap();
    temp
}

#[allow(deprecated)]
fn social_graph(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("social-graph").expect("binary");
    cmd.current_dir(workdir)
        .env_remove("SOCIAL_GRAPH_PEOPLE")
        .env_remove("SOCIAL_GRAPH_RELATIONS")
        .arg("--people")
        .arg("people.txt")
        .arg("--relations")
        .arg("relations.csv");
    cmd
}

fn run_cli(workdir: &Path, args: &[&str]) -> Value {
    let output = social_graph(workdir).args(args).output().expect("command run");

    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn connected_reports_query_and_result() {
    let temp = setup_graph();

    let response = run_cli(temp.path(), &["connected", "1", "3"]);
    assert_eq!(
        response,
        json!({"query": "connected", "from": 1, "to": 3, "result": true})
    );

    let response = run_cli(
        temp.path(),
        &["connected", "1", "3", "--relationship", "sibling"],
    );
    assert_eq!(response["result"], false);
    assert_eq!(response["relationship"], "sibling");
}

#[test]
fn distance_uses_minus_one_for_unreachable() {
    let temp = setup_graph();

    assert_eq!(run_cli(temp.path(), &["distance", "1", "3"])["result"], 2);
    assert_eq!(run_cli(temp.path(), &["distance", "1", "4"])["result"], -1);
    assert_eq!(run_cli(temp.path(), &["distance", "9", "9"])["result"], 0);
}

#[test]
fn at_distance_lists_ring() {
    let temp = setup_graph();

    assert_eq!(
        run_cli(temp.path(), &["at-distance", "1", "2"])["result"],
        json!([3])
    );
    assert_eq!(
        run_cli(temp.path(), &["at-distance", "4", "0"])["result"],
        json!([4])
    );
    assert_eq!(
        run_cli(temp.path(), &["at-distance", "1", "-2"])["result"],
        json!([])
    );
}

#[test]
fn groups_with_and_without_filters() {
    let temp = setup_graph();

    assert_eq!(run_cli(temp.path(), &["groups"])["result"], 2);
    assert_eq!(
        run_cli(temp.path(), &["groups", "--relationship", "sibling"])["result"],
        3
    );
    let response = run_cli(
        temp.path(),
        &["groups", "--relationship", "sibling", "--relationship", "friend"],
    );
    assert_eq!(response["result"], 2);
    assert_eq!(response["relationships"], json!(["sibling", "friend"]));
}

#[test]
fn stats_summarize_graph() {
    let temp = setup_graph();

    let response = run_cli(temp.path(), &["stats"]);
    assert_eq!(response["query"], "stats");
    assert_eq!(response["persons"], 4);
    assert_eq!(response["relations"], 2);
    assert_eq!(response["groups"], 2);
}

#[test]
fn malformed_relation_is_logged_not_fatal() {
    let temp = setup_graph();

    social_graph(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("expected 3 fields"));
}

#[test]
fn inputs_can_come_from_environment() {
    let temp = setup_graph();

    #[allow(deprecated)]
    let output = Command::cargo_bin("social-graph")
        .expect("binary")
        .current_dir(temp.path())
        .env("SOCIAL_GRAPH_PEOPLE", "people.txt")
        .env("SOCIAL_GRAPH_RELATIONS", "relations.csv")
        .args(["--quiet", "distance", "3", "1"])
        .output()
        .expect("command run");

    assert!(output.status.success());
    let response: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(response["result"], 2);
}

#[test]
fn missing_input_file_fails() {
    let temp = tempdir().unwrap();

    social_graph(temp.path())
        .arg("groups")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load graph"));
}
