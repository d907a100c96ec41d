//! TOML parser for checklist files
//!
//! Handles finding, reading and deserializing `.conform.toml` checklists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Expectation;
use crate::paths::{self, CHECKLIST_FILE};

/// Errors raised while loading a checklist
#[derive(Debug, Error)]
pub enum ChecklistError {
    /// No checklist found walking up from a directory
    #[error("no {} found in {} or any parent directory", CHECKLIST_FILE, .0.display())]
    NotFound(PathBuf),

    /// Checklist file could not be read
    #[error("cannot read checklist {}: {source}", .path.display())]
    Read {
        /// Checklist path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Checklist file is not valid TOML or has unknown fields
    #[error("invalid checklist {}: {source}", .path.display())]
    Parse {
        /// Checklist path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// A checklist file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistFile {
    /// Checklist-wide settings
    #[serde(default)]
    pub settings: Settings,

    /// Expectations, in evaluation order
    #[serde(default, rename = "expect")]
    pub expectations: Vec<Expectation>,
}

/// The `[settings]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Title printed above the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Directory targets are resolved against, relative to the checklist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl ChecklistFile {
    /// Group names in first-seen order
    #[must_use]
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for group in self.expectations.iter().filter_map(|e| e.group.as_deref()) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// Keep only the expectations in `group`
    #[must_use]
    pub fn only_group(mut self, group: &str) -> Self {
        self.expectations.retain(|e| e.group.as_deref() == Some(group));
        self
    }
}

/// Find the nearest checklist, walking up from `from`
#[must_use]
pub fn find_checklist(from: &Path) -> Option<PathBuf> {
    from.ancestors().map(paths::checklist_in).find(|path| path.is_file())
}

/// Parse checklist content
pub fn parse_str(content: &str) -> Result<ChecklistFile, toml::de::Error> {
    toml::from_str(content)
}

/// Load a checklist from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<ChecklistFile, ChecklistError> {
    let content = fs::read_to_string(path).map_err(|source| ChecklistError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content).map_err(|source| ChecklistError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
