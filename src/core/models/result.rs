//! Check result model
//!
//! The outcome of evaluating one expectation.

use serde::Serialize;

/// Outcome of evaluating a single expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Name of the evaluated expectation
    pub name: String,

    /// Group the expectation belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Whether every requirement was met
    pub passed: bool,

    /// Diagnostic on failure; on success, only what the check found (if anything)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Tokens that were not found, in the order they were declared
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl CheckResult {
    /// A passing result
    pub fn pass(name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            passed: true,
            message,
            missing: Vec::new(),
        }
    }

    /// A failing result with a diagnostic message
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            passed: false,
            message: Some(message.into()),
            missing: Vec::new(),
        }
    }

    /// A failing result listing the tokens that were not found
    pub fn missing(name: impl Into<String>, noun: &str, missing: Vec<String>) -> Self {
        let message = format!("Missing {noun}: {missing:?}");
        Self {
            missing,
            ..Self::fail(name, message)
        }
    }

    /// Attach the group of the originating expectation
    #[must_use]
    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = group;
        self
    }

    /// One-line failure description ("name: message")
    #[must_use]
    pub fn failure_line(&self) -> String {
        format!("{}: {}", self.name, self.message.as_deref().unwrap_or_default())
    }
}
