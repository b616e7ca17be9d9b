#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub const BRANCH: &str = "trunk";

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(
        Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap()
            .success(),
        "git {args:?} failed"
    );
}

pub fn init_git_repo(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    git(dir, &["init"]);
    git(dir, &["checkout", "-b", BRANCH]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
}

/// Commits `name` with the current date.
pub fn commit_file(dir: &Path, name: &str, content: &str) {
    write_file(dir, name, content);
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", &format!("add {name}")]);
}

/// Commits `name` with author and committer dates far outside any recent window.
pub fn commit_file_long_ago(dir: &Path, name: &str, content: &str) {
    commit_file_at(dir, name, content, "2001-01-01T12:00:00");
}

/// Commits `name` with both dates set to `date` (local time, no zone).
pub fn commit_file_at(dir: &Path, name: &str, content: &str, date: &str) {
    write_file(dir, name, content);
    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-m", &format!("change {name}")])
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

/// Remote laid out at `<base>/acme/widget` with a known recent history:
/// db 3 commits, compute 3, api 1, ui 0 (only an old commit), plus a
/// top-level file.
pub fn seed_remote(base: &Path) -> std::path::PathBuf {
    let remote = base.join("acme").join("widget");
    init_git_repo(&remote);
    commit_file_long_ago(&remote, "ui/view.js", "render()\n");
    commit_file(&remote, "README.md", "widget\n");
    commit_file(&remote, "api/routes.py", "a = 1\n");
    for i in 0..3 {
        commit_file(&remote, "compute/driver.py", &"x\n".repeat(i + 1));
        commit_file(&remote, "db/models.py", &"y\n".repeat(i + 2));
    }
    remote
}

/// `git mv` plus a commit.
pub fn rename_file(dir: &Path, from: &str, to: &str) {
    if let Some(parent) = dir.join(to).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    git(dir, &["mv", from, to]);
    git(dir, &["commit", "-m", &format!("move {from} to {to}")]);
}
