//! File-system artifact source
//!
//! Resolves checklist targets against a base directory and reads them from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ports::{ArtifactError, ArtifactSource};

/// Artifact source rooted at a base directory
#[derive(Debug, Clone)]
pub struct FsArtifactSource {
    base_dir: PathBuf,
}

impl FsArtifactSource {
    /// Create a source rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory targets are resolved against
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ArtifactSource for FsArtifactSource {
    /// Absolute targets are used as-is; relative ones are joined to the base directory
    fn locate(&self, target: &str) -> PathBuf {
        self.base_dir.join(target)
    }

    fn is_file(&self, target: &str) -> bool {
        self.locate(target).is_file()
    }

    fn read_text(&self, target: &str) -> Result<String, ArtifactError> {
        let path = self.locate(target);
        fs::read_to_string(&path).map_err(|source| ArtifactError::Io { path, source })
    }
}
