//! Token matcher - decides which tokens an artifact lacks
//!
//! This module contains pure matching logic with no I/O dependencies.
//! Substring containment is the only primitive: no tokenizing, no regex.

use serde_json::Value;

use crate::core::models::Token;

/// Tokens that do not occur literally in `content`, in input order
#[must_use]
pub fn missing_substrings<'a>(content: &str, tokens: &'a [Token]) -> Vec<&'a Token> {
    tokens.iter().filter(|t| !content.contains(t.text.as_str())).collect()
}

/// Tokens that do not occur in the lowercased `content`
///
/// Only the content is folded; tokens are compared exactly as written, so an
/// uppercase token can never match.
#[must_use]
pub fn missing_substrings_folded<'a>(content: &str, tokens: &'a [Token]) -> Vec<&'a Token> {
    missing_substrings(&content.to_lowercase(), tokens)
}

/// Whether `name` appears as a call (`name(`) or an assignment (`name =`)
///
/// Comments and strings count too.
#[must_use]
pub fn has_identifier(content: &str, name: &str) -> bool {
    content.contains(&format!("{name}(")) || content.contains(&format!("{name} ="))
}

/// Names for which [`has_identifier`] is false, in input order
#[must_use]
pub fn missing_identifiers<'a>(content: &str, names: &'a [Token]) -> Vec<&'a Token> {
    names.iter().filter(|n| !has_identifier(content, &n.text)).collect()
}

/// Follow a dot-separated key path (`dependencies.three`) through a JSON value
///
/// Numeric segments index into arrays.
#[must_use]
pub fn lookup_key_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
