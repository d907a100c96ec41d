//! Validate a checklist without evaluating it

use std::path::Path;

use conform::adapters::checklist::load_file;
use conform::config::locate_checklist;
use conform::core::services::validate as validate_expectations;
use conform::output::{OutputMode, ValidationOutput};

/// Load and validate the checklist; returns whether it is valid
pub fn validate(checklist: Option<&Path>, mode: OutputMode) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir()?;
    let path = locate_checklist(checklist, &cwd)?;
    let file = load_file(&path)?;

    let errors: Vec<String> =
        validate_expectations(&file.expectations).iter().map(ToString::to_string).collect();

    let output = ValidationOutput {
        checklist: path.display().to_string(),
        valid: errors.is_empty(),
        expectations: file.expectations.len(),
        errors,
    };
    output.render(mode);
    Ok(output.valid)
}
