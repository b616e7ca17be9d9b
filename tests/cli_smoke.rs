mod common;

use assert_cmd::prelude::*;
use common::{has_git, seed_remote, BRANCH};
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn adamant(workdir: &Path, remotes: &Path) -> Command {
    let mut cmd = Command::cargo_bin("adamant").unwrap();
    cmd.current_dir(workdir)
        .arg("--base-url")
        .arg(remotes)
        .args(["--owner", "acme", "--repo", "widget", "--branch", BRANCH]);
    cmd
}

#[test]
fn commits_json_outputs_ranked_entries() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let remotes = dir.path().join("remotes");
    seed_remote(&remotes);

    let out = adamant(dir.path(), &remotes)
        .args(["commits", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(v["metric"], "commits");
    assert_eq!(v["directory"], ".");
    let names: Vec<&str> = v["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["db", "compute", "api", "ui"]);
    assert_eq!(v["entries"][0]["value"], 3);

    assert!(dir.path().join(".repos/widget/.git").exists());
    assert!(dir.path().join(".images/widget_num_commits.png").exists());
}

#[test]
fn churn_json_reports_insertions_and_deletions() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let remotes = dir.path().join("remotes");
    seed_remote(&remotes);

    let out = adamant(dir.path(), &remotes)
        .args(["--images-dir", "charts", "churn", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let entries = v["entries"].as_array().unwrap();
    assert_eq!(entries[0]["name"], "db");
    assert_eq!(entries[0]["value"]["insertions"], 4);
    assert_eq!(entries[0]["value"]["deletions"], 0);
    let ui = entries.iter().find(|e| e["name"] == "ui").unwrap();
    assert_eq!(ui["value"]["insertions"], 0);
    assert!(dir.path().join("charts/widget_churn_num.png").exists());
}

#[test]
fn sync_twice_updates_existing_copy() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    let remotes = dir.path().join("remotes");
    seed_remote(&remotes);

    let first = adamant(dir.path(), &remotes).arg("sync").assert().success().get_output().stdout.clone();
    assert!(String::from_utf8_lossy(&first).contains("Cloned"));

    let second = adamant(dir.path(), &remotes).arg("sync").assert().success().get_output().stdout.clone();
    assert!(String::from_utf8_lossy(&second).contains("Updated"));
}

#[test]
fn missing_remote_exits_with_error() {
    let dir = tempdir().unwrap();
    if !has_git() {
        return;
    }
    adamant(dir.path(), &dir.path().join("missing"))
        .args(["commits"])
        .assert()
        .failure();
}
