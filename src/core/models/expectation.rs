//! Expectation model
//!
//! An expectation declares: "this artifact must look like this."
//! Expectations are data, loaded from a checklist, and never change once built.

use serde::{Deserialize, Serialize};

use super::ExpectationKind;

/// A literal string required to be present in an artifact
///
/// The optional label only affects reporting: a token `'t'` labelled
/// `translate` is reported as `'t' for translate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TokenRepr", into = "TokenRepr")]
pub struct Token {
    /// The literal text searched for
    pub text: String,
    /// Optional human description of what the token stands for
    pub label: Option<String>,
}

/// Checklist representation: either `"text"` or `{ text = "...", label = "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TokenRepr {
    Plain(String),
    Labeled {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl From<TokenRepr> for Token {
    fn from(repr: TokenRepr) -> Self {
        match repr {
            TokenRepr::Plain(text) => Self { text, label: None },
            TokenRepr::Labeled { text, label } => Self { text, label },
        }
    }
}

impl From<Token> for TokenRepr {
    fn from(token: Token) -> Self {
        match token.label {
            None => Self::Plain(token.text),
            label @ Some(_) => Self::Labeled {
                text: token.text,
                label,
            },
        }
    }
}

impl Token {
    /// Create a labelled token
    pub fn labeled(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: Some(label.into()),
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            label: None,
        }
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self { text, label: None }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} for {label}", self.text),
            None => f.write_str(&self.text),
        }
    }
}

/// A single declarative check against one target artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expectation {
    /// Name shown in reports (e.g., "Imports in index.js")
    pub name: String,

    /// How tokens are matched
    pub kind: ExpectationKind,

    /// Target path, relative to the base directory
    pub target: String,

    /// Required tokens, in reporting order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,

    /// Section heading this expectation is reported under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Word used in diagnostics ("Missing imports: ...")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noun: Option<String>,
}

impl Expectation {
    /// Create an expectation with no tokens
    pub fn new(name: impl Into<String>, kind: ExpectationKind, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            tokens: Vec::new(),
            group: None,
            noun: None,
        }
    }

    /// Shorthand for a `file-exists` expectation
    pub fn file_exists(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, ExpectationKind::FileExists, target)
    }

    /// Set the required tokens
    #[must_use]
    pub fn with_tokens<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        self.tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the report group
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the diagnostic noun
    #[must_use]
    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = Some(noun.into());
        self
    }

    /// The diagnostic noun, falling back to the kind's default
    #[must_use]
    pub fn noun(&self) -> &str {
        self.noun.as_deref().unwrap_or_else(|| self.kind.default_noun())
    }
}
