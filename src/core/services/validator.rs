//! Checklist validator
//!
//! Catches expectations that can never mean what their author intended.
//! All problems are collected; validation never stops at the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::core::models::{Expectation, ExpectationKind};

/// A problem with one expectation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Expectation has no name
    #[error("expectation #{index}: name is empty")]
    EmptyName {
        /// 1-based position in the checklist
        index: usize,
    },

    /// Expectation has no target
    #[error("{name}: target is empty")]
    EmptyTarget {
        /// Expectation name
        name: String,
    },

    /// `file-exists` does not read content, so tokens would be ignored
    #[error("{name}: file-exists takes no tokens")]
    TokensOnFileExists {
        /// Expectation name
        name: String,
    },

    /// A `json-keys` path like `a..b`
    #[error("{name}: key path {path:?} has an empty segment")]
    EmptyKeySegment {
        /// Expectation name
        name: String,
        /// Offending key path
        path: String,
    },

    /// Two expectations share a name
    #[error("duplicate expectation name: {name}")]
    DuplicateName {
        /// Repeated name
        name: String,
    },
}

/// Validate expectations, returning every problem found
#[must_use]
pub fn validate(expectations: &[Expectation]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, e) in expectations.iter().enumerate() {
        if e.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index: i + 1 });
        } else if !seen.insert(e.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: e.name.clone(),
            });
        }

        if e.target.trim().is_empty() {
            errors.push(ValidationError::EmptyTarget {
                name: e.name.clone(),
            });
        }

        if !e.kind.reads_content() && !e.tokens.is_empty() {
            errors.push(ValidationError::TokensOnFileExists {
                name: e.name.clone(),
            });
        }

        if e.kind == ExpectationKind::JsonKeys {
            for token in e.tokens.iter().filter(|t| t.text.split('.').any(str::is_empty)) {
                errors.push(ValidationError::EmptyKeySegment {
                    name: e.name.clone(),
                    path: token.text.clone(),
                });
            }
        }
    }

    errors
}
