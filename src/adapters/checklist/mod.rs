//! TOML-based checklists
//!
//! - [`parser`] - Find, read and deserialize `.conform.toml` files
//! - [`writer`] - Write new checklists from built-in templates

pub mod parser;
pub mod writer;

pub use parser::{ChecklistError, ChecklistFile, Settings, find_checklist, load_file, parse_str};
pub use writer::{Template, write_template};
