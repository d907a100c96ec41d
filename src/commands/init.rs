//! Create a checklist from a template

use conform::adapters::checklist::{Template, write_template};
use conform::output::{OperationResult, OutputMode};
use conform::paths;

/// Write `.conform.toml` in the current directory
pub fn init(template: &str, force: bool, mode: OutputMode) -> anyhow::Result<bool> {
    let template: Template = template.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let path = paths::checklist_in(&std::env::current_dir()?);

    let written = write_template(&path, template, force)?;
    let result = if written {
        OperationResult {
            success: true,
            message: format!("Created {} from the {template} template", paths::CHECKLIST_FILE),
        }
    } else {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                paths::CHECKLIST_FILE
            ),
        }
    };
    result.render(mode);
    Ok(written)
}
