//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn repo2scroll() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("repo2scroll"));
    cmd.env_remove("RUST_LOG")
        .env_remove("REPO2SCROLL_OUTPUT")
        .env_remove("REPO2SCROLL_EXCLUDE")
        .env_remove("REPO2SCROLL_RESPECT_GITIGNORE")
        .env_remove("REPO2SCROLL_IGNORE_FILE");
    cmd
}

struct TestRepo {
    temp: TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path();
        fs::create_dir_all(root.join("dist")).expect("mkdir dist");
        fs::write(root.join("a.txt"), "hello").expect("write a.txt");
        fs::write(root.join("notes.txt"), "remember").expect("write notes.txt");
        fs::write(root.join("dist/output.js"), "console.log(1);\n").expect("write output.js");
        fs::write(root.join(".gitignore"), "*.txt\n").expect("write .gitignore");
        Self { temp }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn root_str(&self) -> &str {
        self.root().to_str().expect("utf8 path")
    }
}

#[test]
fn test_cli_version() {
    repo2scroll()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repo2scroll"));
}

#[test]
fn test_cli_help() {
    repo2scroll()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scroll-like text file"))
        .stdout(predicate::str::contains("--no-gitignore"))
        .stdout(predicate::str::contains("--ignore-file"));
}

#[test]
fn test_requires_directory() {
    repo2scroll().assert().failure();
}

#[test]
fn test_missing_project_dir_fails() {
    let out = TempDir::new().expect("temp out");
    repo2scroll()
        .current_dir(out.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project directory not found"));
    assert!(!out.path().join("combined_output.txt").exists());
}

#[test]
fn test_missing_ignore_file_fails() {
    let repo = TestRepo::new();
    let out = TempDir::new().expect("temp out");
    repo2scroll()
        .current_dir(out.path())
        .args([repo.root_str(), "--ignore-file", "missing.ignore"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ignore file not found"));
}

#[test]
fn test_writes_default_output_file() {
    let repo = TestRepo::new();
    let out = TempDir::new().expect("temp out");
    repo2scroll().current_dir(out.path()).arg(repo.root_str()).assert().success();

    let scroll = fs::read_to_string(out.path().join("combined_output.txt")).expect("read output");
    assert!(scroll.starts_with("<layout>\n"));
    assert!(scroll.contains("<file path=\"dist/output.js\">\nconsole.log(1);\n\n</file>"));
    assert!(!scroll.contains("a.txt"), ".gitignore excludes *.txt");
}

#[test]
fn test_output_flag_names_file() {
    let repo = TestRepo::new();
    let out = TempDir::new().expect("temp out");
    let target = out.path().join("snapshot.txt");
    repo2scroll()
        .args([repo.root_str(), "-o", target.to_str().expect("utf8 path")])
        .assert()
        .success();
    assert!(target.is_file());
}

#[test]
fn test_stdout_prints_scroll() {
    let repo = TestRepo::new();
    repo2scroll()
        .args([repo.root_str(), "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<layout>\n"))
        .stdout(predicate::str::contains("<file path=\"dist/output.js\">"));
}

#[test]
fn test_no_gitignore_includes_ignored_txt() {
    let repo = TestRepo::new();
    repo2scroll()
        .args([repo.root_str(), "--stdout", "--no-gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<file path=\"a.txt\">\nhello\n</file>"));
}

#[test]
fn test_exclude_directory_removes_it_everywhere() {
    let repo = TestRepo::new();
    repo2scroll()
        .args([repo.root_str(), "--stdout", "--exclude", "dist/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dist").not());
}

#[test]
fn test_config_file_supplies_excludes() {
    let repo = TestRepo::new();
    let config = "exclude = [\"dist/\"]\nrespect_gitignore = false\n";
    fs::write(repo.root().join("repo2scroll.toml"), config).expect("write config");
    repo2scroll()
        .args([repo.root_str(), "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<file path=\"notes.txt\">"))
        .stdout(predicate::str::contains("output.js").not());
}

#[test]
fn test_verbose_logs_skips() {
    let repo = TestRepo::new();
    repo2scroll()
        .args([repo.root_str(), "--stdout", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skip (ignored by gitignore '*.txt'): a.txt"));
}
