//! Artifact source port
//!
//! Defines the read-only view of the artifacts under inspection.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact is missing or could not be read as UTF-8 text
    #[error("{source}: {}", .path.display())]
    Io {
        /// Resolved path of the artifact
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Read-only access to the artifacts a checklist refers to
///
/// Implementations resolve checklist targets (relative paths) to concrete
/// locations. The checker never writes through this trait.
pub trait ArtifactSource: Send + Sync {
    /// Where a target resolves to, for diagnostics
    fn locate(&self, target: &str) -> PathBuf;

    /// Whether the target resolves to a regular file
    ///
    /// Any failure to stat the target (absence, permissions) is `false`.
    fn is_file(&self, target: &str) -> bool;

    /// Read the full text content of a target
    fn read_text(&self, target: &str) -> Result<String, ArtifactError>;
}
