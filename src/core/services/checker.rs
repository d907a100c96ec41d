//! Check service - evaluates expectations against artifacts
//!
//! Each check is a pure function of (expectation, artifact content). A failure
//! to read an artifact is reported as a failed result and never aborts a run.

use log::debug;
use serde_json::Value;

use super::matcher;
use crate::core::models::{CheckResult, Expectation, ExpectationKind, Report, Token};
use crate::core::ports::ArtifactSource;

/// Check that `target` resolves to a regular file
///
/// Absence and permission errors are indistinguishable: both report not found.
pub fn check_file_exists<S>(source: &S, name: &str, target: &str) -> CheckResult
where
    S: ArtifactSource + ?Sized,
{
    if source.is_file(target) {
        CheckResult::pass(name, None)
    } else {
        CheckResult::fail(name, format!("File not found at {}", source.locate(target).display()))
    }
}

/// Check that every token occurs literally (case-sensitive) in `target`
pub fn check_contains_tokens<S>(
    source: &S,
    name: &str,
    target: &str,
    tokens: &[Token],
    noun: &str,
) -> CheckResult
where
    S: ArtifactSource + ?Sized,
{
    with_content(source, name, target, |content| {
        verdict(name, noun, &matcher::missing_substrings(content, tokens))
    })
}

/// Check that every token occurs in the lowercased content of `target`
pub fn check_contains_tokens_folded<S>(
    source: &S,
    name: &str,
    target: &str,
    tokens: &[Token],
    noun: &str,
) -> CheckResult
where
    S: ArtifactSource + ?Sized,
{
    with_content(source, name, target, |content| {
        verdict(name, noun, &matcher::missing_substrings_folded(content, tokens))
    })
}

/// Check that every name appears as `name(` or `name =` in `target`
pub fn check_methods_present<S>(
    source: &S,
    name: &str,
    target: &str,
    methods: &[Token],
    noun: &str,
) -> CheckResult
where
    S: ArtifactSource + ?Sized,
{
    with_content(source, name, target, |content| {
        verdict(name, noun, &matcher::missing_identifiers(content, methods))
    })
}

/// Check that `target` parses as JSON and every key path exists
///
/// On success the message lists the value found at each path.
pub fn check_json_keys<S>(
    source: &S,
    name: &str,
    target: &str,
    paths: &[Token],
    noun: &str,
) -> CheckResult
where
    S: ArtifactSource + ?Sized,
{
    with_content(source, name, target, |content| {
        let doc: Value = match serde_json::from_str(content) {
            Ok(doc) => doc,
            Err(e) => return CheckResult::fail(name, format!("Error parsing JSON: {e}")),
        };

        let mut found = Vec::new();
        let mut missing = Vec::new();
        for path in paths {
            match matcher::lookup_key_path(&doc, &path.text) {
                Some(value) => found.push(format!("{} = {}", path.text, display_value(value))),
                None => missing.push(path.to_string()),
            }
        }

        if !missing.is_empty() {
            return CheckResult::missing(name, noun, missing);
        }
        let message = (!found.is_empty()).then(|| format!("Found {}", found.join(", ")));
        CheckResult::pass(name, message)
    })
}

/// Evaluate one expectation
pub fn evaluate<S>(source: &S, expectation: &Expectation) -> CheckResult
where
    S: ArtifactSource + ?Sized,
{
    let Expectation {
        name,
        kind,
        target,
        tokens,
        ..
    } = expectation;
    let noun = expectation.noun();

    let result = match kind {
        ExpectationKind::FileExists => check_file_exists(source, name, target),
        ExpectationKind::ContainsAllSubstrings => {
            check_contains_tokens(source, name, target, tokens, noun)
        },
        ExpectationKind::ContainsAllIdentifiers => {
            check_methods_present(source, name, target, tokens, noun)
        },
        ExpectationKind::ContainsAllSubstringsFolded => {
            check_contains_tokens_folded(source, name, target, tokens, noun)
        },
        ExpectationKind::JsonKeys => check_json_keys(source, name, target, tokens, noun),
    };

    debug!("{kind} {target}: {}", if result.passed { "passed" } else { "failed" });
    result.with_group(expectation.group.clone())
}

/// Evaluate every expectation in order and fold the results into a report
pub fn run_all<S>(source: &S, expectations: &[Expectation]) -> Report
where
    S: ArtifactSource + ?Sized,
{
    expectations.iter().map(|e| evaluate(source, e)).collect()
}

/// Read `target` and hand its content to `check`, or fail with the read error
fn with_content<S, F>(source: &S, name: &str, target: &str, check: F) -> CheckResult
where
    S: ArtifactSource + ?Sized,
    F: FnOnce(&str) -> CheckResult,
{
    match source.read_text(target) {
        Ok(content) => check(&content),
        Err(e) => {
            debug!("cannot read {target}: {e}");
            CheckResult::fail(name, format!("Error reading file: {e}"))
        },
    }
}

fn verdict(name: &str, noun: &str, missing: &[&Token]) -> CheckResult {
    if missing.is_empty() {
        CheckResult::pass(name, None)
    } else {
        CheckResult::missing(name, noun, missing.iter().map(ToString::to_string).collect())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
