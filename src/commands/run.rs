//! Evaluate a checklist

use std::path::Path;

use log::warn;

use conform::adapters::FsArtifactSource;
use conform::adapters::checklist::load_file;
use conform::config::{RunConfig, locate_checklist};
use conform::core::services::{run_all, validate};
use conform::output::{OutputMode, RunOutput};

/// Evaluate every expectation in the checklist; returns whether all passed
pub fn run(
    checklist: Option<&Path>,
    base_dir: Option<&Path>,
    group: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let cwd = std::env::current_dir()?;
    let path = locate_checklist(checklist, &cwd)?;
    let mut file = load_file(&path)?;

    let problems = validate(&file.expectations);
    if !problems.is_empty() {
        let lines: Vec<String> = problems.iter().map(ToString::to_string).collect();
        anyhow::bail!("{} is invalid:\n  {}", path.display(), lines.join("\n  "));
    }

    if let Some(group) = group {
        let groups = file.groups().join(", ");
        file = file.only_group(group);
        if file.expectations.is_empty() {
            anyhow::bail!("no expectations in group '{group}' (groups: {groups})");
        }
    }

    let config = RunConfig::resolve(&path, &file.settings, base_dir);
    let source = FsArtifactSource::new(&config.base_dir);
    if !source.base_dir().is_dir() {
        warn!("base directory {} does not exist", source.base_dir().display());
    }

    let report = run_all(&source, &file.expectations);
    let passed = report.success();

    let output = RunOutput {
        title: config.title,
        checklist: config.checklist.display().to_string(),
        report,
    };
    output.render(mode);
    Ok(passed)
}
