// Contract tests for the `aoc-new` command line

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn aoc_new(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aoc-new").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Temporary repository root whose generator is plain `mkdir`
fn fake_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(
        temp_dir.path().join("aoc-scaffold.toml"),
        "generator = [\"mkdir\"]\n",
    )
    .unwrap();
    temp_dir
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_aoc_new_without_arguments() {
    let repo = fake_repo();

    aoc_new(repo.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));

    assert_eq!(entries(repo.path()), vec![".git", "aoc-scaffold.toml"]);
}

#[test]
fn test_aoc_new_with_too_many_arguments() {
    let repo = fake_repo();

    aoc_new(repo.path())
        .args(["7", "8"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));

    assert_eq!(entries(repo.path()), vec![".git", "aoc-scaffold.toml"]);
}

#[test]
fn test_aoc_new_outside_repository_root() {
    let temp_dir = TempDir::new().unwrap();

    aoc_new(temp_dir.path())
        .arg("3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("root of a repository"));

    assert!(!temp_dir.path().join("aoc03").exists());
}

#[test]
fn test_aoc_new_non_numeric_day() {
    let repo = fake_repo();

    aoc_new(repo.path())
        .arg("seven")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid day number 'seven'"));

    assert_eq!(entries(repo.path()), vec![".git", "aoc-scaffold.toml"]);
}

#[test]
fn test_aoc_new_pads_single_digit_day() {
    let repo = fake_repo();

    aoc_new(repo.path())
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created aoc07"))
        .stderr(predicate::str::is_empty());

    assert!(repo.path().join("aoc07/input").is_dir());
}

#[test]
fn test_aoc_new_keeps_all_digits_of_large_day() {
    let repo = fake_repo();

    aoc_new(repo.path()).arg("100").assert().success();

    assert!(repo.path().join("aoc100/input").is_dir());
}

#[test]
fn test_aoc_new_quiet() {
    let repo = fake_repo();

    aoc_new(repo.path())
        .args(["--quiet", "25"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(repo.path().join("aoc25/input").is_dir());
}

#[test]
fn test_aoc_new_json_output() {
    let repo = fake_repo();

    let output = aoc_new(repo.path()).args(["4", "--json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["project_name"], "aoc04");
    assert_eq!(json["project_dir"], "aoc04");
    assert!(json["input_dir"].as_str().unwrap().ends_with("input"));
    assert!(json["year"].is_null());
}

#[test]
fn test_aoc_new_help() {
    let temp_dir = TempDir::new().unwrap();

    aoc_new(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<day-number>"));
}

#[test]
fn test_aoc_new_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(temp_dir.path().join("aoc-scaffold.toml"), "prefix = \"a b\"\n").unwrap();

    aoc_new(temp_dir.path())
        .arg("1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("Invalid prefix"));

    assert!(!temp_dir.path().join("a b01").exists());
}

#[test]
fn test_aoc_new_propagates_generator_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    fs::write(
        temp_dir.path().join("aoc-scaffold.toml"),
        "generator = [\"sh\", \"-c\", \"exit 3\"]\n",
    )
    .unwrap();

    aoc_new(temp_dir.path())
        .arg("9")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("exit status 3"));

    assert!(!temp_dir.path().join("aoc09").exists());
}

#[test]
fn test_aoc_new_broken_config_outside_repository_root() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("aoc-scaffold.toml"), "prefix = [\n").unwrap();

    aoc_new(temp_dir.path())
        .arg("3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("root of a repository"));

    assert!(!temp_dir.path().join("aoc03").exists());
}

#[test]
fn test_aoc_new_negative_day_in_repository() {
    let repo = fake_repo();

    aoc_new(repo.path())
        .arg("-3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid day number '-3'"));

    assert_eq!(entries(repo.path()), vec![".git", "aoc-scaffold.toml"]);
}

#[test]
fn test_aoc_new_negative_day_outside_repository_root() {
    let temp_dir = TempDir::new().unwrap();

    aoc_new(temp_dir.path())
        .arg("-3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("root of a repository"));
}
