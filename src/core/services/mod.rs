//! Evaluation services
//!
//! Pure logic that operates on domain models and an artifact source.
//!
//! - [`checker`] - Evaluate expectations into results and reports
//! - [`matcher`] - Decide which tokens an artifact lacks
//! - [`validator`] - Reject malformed expectations

pub mod checker;
pub mod matcher;
pub mod validator;

pub use checker::{
    check_contains_tokens, check_contains_tokens_folded, check_file_exists, check_json_keys,
    check_methods_present, evaluate, run_all,
};
pub use matcher::{has_identifier, lookup_key_path, missing_identifiers, missing_substrings};
pub use validator::{ValidationError, validate};
