//! Integration tests for the conform CLI
//!
//! These tests run the binary against temporary artifact trees and check
//! the report, the exit status, and the JSON output.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a conform command
fn conform() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("conform"))
}

/// Helper to write a file, creating parent directories
fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}

const CHECKLIST: &str = r#"
[settings]
title = "Widget"

[[expect]]
name = "Widget exists"
kind = "file-exists"
target = "src/widget.js"
group = "Files"

[[expect]]
name = "Widget imports"
kind = "contains-all-substrings"
target = "src/widget.js"
tokens = ["React"]
noun = "imports"
group = "Code"

[[expect]]
name = "Widget methods"
kind = "contains-all-identifiers"
target = "src/widget.js"
tokens = ["render", "dispose"]
group = "Code"
"#;

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_version() {
    conform().arg("--version").assert().success().stdout(predicate::str::contains("conform"));
}

#[test]
fn test_help() {
    conform()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checks are literal substring matches"));
}

#[test]
fn test_no_args_shows_info() {
    conform().assert().success().stdout(predicate::str::contains("conform v"));
}

#[test]
fn test_version_json() {
    conform()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

// =============================================================================
// RUN
// =============================================================================

#[test]
fn test_run_all_passing_exits_zero() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);
    write(temp.path(), "src/widget.js", "import React from 'react';\nrender() {}\ndispose() {}\n");

    conform()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3/3 tests passed"))
        .stdout(predicate::str::contains("All checks passed!"));
}

#[test]
fn test_run_failure_exits_one_and_lists_missing() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);
    write(temp.path(), "src/widget.js", "import React from 'react';\nrender() {}\n");

    conform()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2/3 tests passed"))
        .stdout(predicate::str::contains(r#"Widget methods: Missing methods: ["dispose"]"#));
}

#[test]
fn test_run_missing_file_collects_all_failures() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);

    conform()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("0/3 tests passed"))
        .stdout(predicate::str::contains("File not found at"))
        .stdout(predicate::str::contains("Widget imports: Error reading file:"))
        .stdout(predicate::str::contains("Widget methods: Error reading file:"));
}

#[test]
fn test_run_json_report() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);
    write(temp.path(), "src/widget.js", "React render() dispose()");

    let output = conform()
        .args(["run", "--json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Widget");
    assert_eq!(json["run"], 3);
    assert_eq!(json["passed"], 3);
    assert_eq!(json["failed"], 0);
    assert_eq!(json["success"], true);
    assert_eq!(json["results"][0]["group"], "Files");
}

#[test]
fn test_run_group_filter() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);
    write(temp.path(), "src/widget.js", "");

    conform()
        .args(["run", "--group", "Files"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1/1 tests passed"));
}

#[test]
fn test_run_unknown_group_is_an_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);

    conform()
        .args(["run", "--group", "Nope"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no expectations in group 'Nope'"));
}

#[test]
fn test_run_base_dir_override() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "checks/widget.toml", CHECKLIST);
    write(temp.path(), "app/src/widget.js", "React render() dispose()");

    conform()
        .args(["run", "--checklist", "checks/widget.toml", "--base-dir", "app"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3/3 tests passed"));
}

#[test]
fn test_run_without_checklist_is_an_error() {
    let temp = TempDir::new().unwrap();

    conform()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".conform.toml"));
}

#[test]
fn test_run_invalid_checklist_is_an_error() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        ".conform.toml",
        "[[expect]]\nname = \"a\"\nkind = \"file-exists\"\ntarget = \"\"\n",
    );

    conform()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("a: target is empty"));
}

// =============================================================================
// LIST / VALIDATE / INIT
// =============================================================================

#[test]
fn test_list_shows_expectations() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);

    conform()
        .arg("list")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[FILE-EXISTS] Widget exists"))
        .stdout(predicate::str::contains("methods: render, dispose"));
}

#[test]
fn test_validate_reports_problems() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        ".conform.toml",
        "[[expect]]\nname = \"a\"\nkind = \"file-exists\"\ntarget = \"x\"\n\n\
         [[expect]]\nname = \"a\"\nkind = \"file-exists\"\ntarget = \"y\"\n",
    );

    conform()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("duplicate expectation name: a"));
}

#[test]
fn test_validate_valid_checklist() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", CHECKLIST);

    conform()
        .arg("validate")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 expectation(s), no problems found"));
}

#[test]
fn test_init_creates_checklist() {
    let temp = TempDir::new().unwrap();

    conform()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .conform.toml"));

    assert!(temp.path().join(".conform.toml").exists());

    conform()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_init_existing_json_agrees_with_exit_code() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".conform.toml", "");

    let output = conform()
        .args(["--json", "init"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(fs::read_to_string(temp.path().join(".conform.toml")).unwrap(), "");
}

#[test]
fn test_init_rejects_unknown_template() {
    let temp = TempDir::new().unwrap();

    conform()
        .args(["init", "--template", "nope"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid template"));
}
