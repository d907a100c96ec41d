//! Core domain logic for conform
//!
//! This module contains pure evaluation logic with no direct I/O.
//! All file-system access goes through the [`ports::ArtifactSource`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Expectation, `CheckResult`, Report)
//! - `services/` - Matching and evaluation
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
