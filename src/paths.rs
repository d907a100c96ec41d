//! Centralized path definitions for conform
//!
//! A checklist lives in a `.conform.toml` file. Targets inside it are resolved
//! against a base directory, which defaults to the checklist's own directory.
//!
//! ```text
//! project/
//! ├── .conform.toml          # checklist
//! └── newIDE/app/            # base_dir = "newIDE/app"
//!     ├── package.json
//!     └── src/...
//! ```

use std::path::{Path, PathBuf};

/// Checklist filename
pub const CHECKLIST_FILE: &str = ".conform.toml";

/// Path of the checklist in `dir`
#[must_use]
pub fn checklist_in(dir: &Path) -> PathBuf {
    dir.join(CHECKLIST_FILE)
}

/// Directory containing `checklist`, or `.` for a bare filename
#[must_use]
pub fn checklist_dir(checklist: &Path) -> PathBuf {
    match checklist.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
