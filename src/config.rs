//! Run configuration
//!
//! Resolves where a run reads its checklist from and which directory targets
//! are resolved against. Resolved once at startup, never changed afterwards.

use std::path::{Path, PathBuf};

use log::debug;

use crate::adapters::checklist::{ChecklistError, Settings, find_checklist};
use crate::paths;

/// Settings for one run, after command-line overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Checklist file in use
    pub checklist: PathBuf,
    /// Directory targets are resolved against
    pub base_dir: PathBuf,
    /// Report title
    pub title: Option<String>,
}

impl RunConfig {
    /// Resolve the run configuration
    ///
    /// Base directory precedence: `base_dir_override`, then `settings.base_dir`
    /// (relative to the checklist's directory), then the checklist's directory.
    #[must_use]
    pub fn resolve(
        checklist: &Path,
        settings: &Settings,
        base_dir_override: Option<&Path>,
    ) -> Self {
        let checklist_dir = paths::checklist_dir(checklist);
        let base_dir = match (base_dir_override, &settings.base_dir) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => checklist_dir.join(dir),
            (None, None) => checklist_dir,
        };
        debug!("checklist {}, base dir {}", checklist.display(), base_dir.display());

        Self {
            checklist: checklist.to_path_buf(),
            base_dir,
            title: settings.title.clone(),
        }
    }
}

/// Pick the checklist: the explicit path if given, else the nearest one above `cwd`
///
/// # Errors
///
/// Returns [`ChecklistError::NotFound`] if no explicit path is given and none is found.
pub fn locate_checklist(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, ChecklistError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => find_checklist(cwd).ok_or_else(|| ChecklistError::NotFound(cwd.to_path_buf())),
    }
}
