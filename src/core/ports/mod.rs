//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the checker and the file system.
//! Implementations live in the `adapters` module; tests provide in-memory ones.

mod artifact_source;

pub use artifact_source::{ArtifactError, ArtifactSource};
