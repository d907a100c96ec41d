//! List the expectations in a checklist

use std::path::Path;

use conform::adapters::checklist::load_file;
use conform::config::locate_checklist;
use conform::output::{ListOutput, OutputMode};

/// Print every expectation in the checklist
pub fn list(checklist: Option<&Path>, mode: OutputMode) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir()?;
    let path = locate_checklist(checklist, &cwd)?;
    let file = load_file(&path)?;

    let output = ListOutput {
        checklist: path.display().to_string(),
        expectations: file.expectations,
    };
    output.render(mode);
    Ok(true)
}
