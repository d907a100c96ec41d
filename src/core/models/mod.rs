//! Domain models for conform
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Expectation`] - "this artifact must contain these tokens"
//! - [`ExpectationKind`] - How tokens are matched
//! - [`CheckResult`] - Outcome of one expectation
//! - [`Report`] - Aggregate of all outcomes

mod expectation;
mod kind;
mod report;
mod result;

pub use expectation::{Expectation, Token};
pub use kind::ExpectationKind;
pub use report::Report;
pub use result::CheckResult;
