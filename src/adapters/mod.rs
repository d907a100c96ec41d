//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `checklist/` - `.conform.toml` parsing and template writing
//! - `fs/` - File-system artifact source

pub mod checklist;
pub mod fs;

pub use fs::FsArtifactSource;
