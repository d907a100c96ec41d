//! Tests for checklist loading and validation

use conform::adapters::checklist::{
    ChecklistError, Template, find_checklist, load_file, parse_str, write_template,
};
use conform::core::models::{ExpectationKind, Token};
use conform::core::services::{ValidationError, validate};

use crate::common::TestTree;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parses_settings_and_expectations() {
    let file = parse_str(
        r#"
[settings]
title = "Editor"
base_dir = "newIDE/app"

[[expect]]
name = "Imports"
kind = "contains-all-substrings"
target = "src/index.js"
tokens = ["React", { text = "'t'", label = "translate" }]
noun = "imports"
group = "Code"
"#,
    )
    .unwrap();

    assert_eq!(file.settings.title.as_deref(), Some("Editor"));
    assert_eq!(file.settings.base_dir.as_deref(), Some(std::path::Path::new("newIDE/app")));

    let e = &file.expectations[0];
    assert_eq!(e.kind, ExpectationKind::ContainsAllSubstrings);
    assert_eq!(e.tokens, vec![Token::from("React"), Token::labeled("'t'", "translate")]);
    assert_eq!(e.noun(), "imports");
    assert_eq!(e.group.as_deref(), Some("Code"));
}

#[test]
fn unknown_kind_is_rejected() {
    let err = parse_str(
        r#"
[[expect]]
name = "x"
kind = "regex"
target = "a"
"#,
    );
    assert!(err.is_err());
}

#[test]
fn misspelled_field_is_rejected() {
    let err = parse_str(
        r#"
[[expect]]
name = "x"
kind = "contains-all-substrings"
target = "a"
token = ["typo"]
"#,
    );
    assert!(err.is_err());
}

#[test]
fn load_reports_path_on_parse_error() {
    let tree = TestTree::new();
    tree.add_file(".conform.toml", "[[expect]\n");
    let path = tree.path().join(".conform.toml");

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, ChecklistError::Parse { .. }));
    assert!(err.to_string().contains(".conform.toml"));
}

#[test]
fn load_missing_file_is_read_error() {
    let tree = TestTree::new();
    let err = load_file(&tree.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ChecklistError::Read { .. }));
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn find_checklist_walks_up() {
    let tree = TestTree::new();
    tree.add_file(".conform.toml", "");
    tree.add_dir("a/b/c");

    let found = find_checklist(&tree.path().join("a/b/c")).unwrap();
    assert_eq!(found, tree.path().join(".conform.toml"));
}

#[test]
fn find_checklist_prefers_nearest() {
    let tree = TestTree::new();
    tree.add_file(".conform.toml", "");
    tree.add_file("a/.conform.toml", "");
    tree.add_dir("a/b");

    let found = find_checklist(&tree.path().join("a/b")).unwrap();
    assert_eq!(found, tree.path().join("a/.conform.toml"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn editor3d_template_is_valid() {
    let file = parse_str(Template::Editor3d.content()).unwrap();
    assert!(validate(&file.expectations).is_empty());
}

#[test]
fn tokens_on_file_exists_are_flagged() {
    let file = parse_str(
        r#"
[[expect]]
name = "x"
kind = "file-exists"
target = "a.js"
tokens = ["ignored"]
"#,
    )
    .unwrap();

    assert_eq!(
        validate(&file.expectations),
        vec![ValidationError::TokensOnFileExists {
            name: "x".to_string()
        }]
    );
}

// =============================================================================
// Templates
// =============================================================================

#[test]
fn write_template_respects_force() {
    let tree = TestTree::new();
    let path = tree.path().join(".conform.toml");

    assert!(write_template(&path, Template::Blank, false).unwrap());
    assert!(!write_template(&path, Template::Editor3d, false).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), Template::Blank.content());

    assert!(write_template(&path, Template::Editor3d, true).unwrap());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), Template::Editor3d.content());
}
