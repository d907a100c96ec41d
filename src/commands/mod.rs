//! Command implementations
//!
//! Each command returns whether it succeeded; errors are reserved for
//! checklists that cannot be found, read or parsed.

mod init;
mod list;
mod run;
mod validate;

pub use init::init;
pub use list::list;
pub use run::run;
pub use validate::validate;
