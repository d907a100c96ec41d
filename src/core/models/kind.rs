//! Expectation kinds
//!
//! Defines how an expectation's tokens are matched against an artifact.

use serde::{Deserialize, Serialize};

/// The matching rule an expectation applies to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpectationKind {
    /// Target must resolve to a regular file
    FileExists,
    /// Every token must occur literally in the content
    ContainsAllSubstrings,
    /// Every name must occur as `name(` or `name =`
    ContainsAllIdentifiers,
    /// Every token must occur in the lowercased content (tokens are not lowercased)
    ContainsAllSubstringsFolded,
    /// Content is JSON and every token is a dotted key path that must exist
    JsonKeys,
}

impl ExpectationKind {
    /// The kebab-case name used in checklist files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileExists => "file-exists",
            Self::ContainsAllSubstrings => "contains-all-substrings",
            Self::ContainsAllIdentifiers => "contains-all-identifiers",
            Self::ContainsAllSubstringsFolded => "contains-all-substrings-folded",
            Self::JsonKeys => "json-keys",
        }
    }

    /// Whether this kind reads the artifact's content
    #[must_use]
    pub const fn reads_content(self) -> bool {
        !matches!(self, Self::FileExists)
    }

    /// Word used in diagnostics when the expectation doesn't name one
    #[must_use]
    pub const fn default_noun(self) -> &'static str {
        match self {
            Self::FileExists => "files",
            Self::ContainsAllSubstrings | Self::ContainsAllSubstringsFolded => "tokens",
            Self::ContainsAllIdentifiers => "methods",
            Self::JsonKeys => "keys",
        }
    }
}

impl std::fmt::Display for ExpectationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
