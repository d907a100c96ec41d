//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckResult, Expectation, Report};

const RULE_WIDTH: usize = 60;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a conformance run
#[derive(Debug, Serialize)]
pub struct RunOutput {
    /// Checklist title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Checklist the expectations came from
    pub checklist: String,
    /// The evaluated report
    #[serde(flatten)]
    pub report: Report,
}

/// Result of listing a checklist
#[derive(Debug, Serialize)]
pub struct ListOutput {
    /// Checklist the expectations came from
    pub checklist: String,
    /// Expectations, in evaluation order
    pub expectations: Vec<Expectation>,
}

/// Result of validating a checklist
#[derive(Debug, Serialize)]
pub struct ValidationOutput {
    /// Checklist that was validated
    pub checklist: String,
    /// Whether no problems were found
    pub valid: bool,
    /// Number of expectations in the checklist
    pub expectations: usize,
    /// Problems found
    pub errors: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl RunOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.format_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable report text
    #[must_use]
    pub fn format_human(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        if let Some(title) = &self.title {
            let _ = writeln!(out, "{}", title.as_str().bold());
            let _ = writeln!(out, "{rule}");
        }

        for (group, results) in self.grouped() {
            if let Some(group) = group {
                let _ = writeln!(out, "\n{}", group.bold());
            }
            for result in results {
                if result.passed {
                    let _ = writeln!(out, "✅ {}: {}", result.name, "PASSED".green());
                    if let Some(message) = &result.message {
                        let _ = writeln!(out, "   {message}");
                    }
                } else {
                    let _ = writeln!(
                        out,
                        "❌ {}: {} - {}",
                        result.name,
                        "FAILED".red(),
                        result.message.as_deref().unwrap_or_default()
                    );
                }
            }
        }

        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "{}", self.report.summary());

        let failures = self.report.failures();
        if failures.is_empty() {
            let _ = writeln!(out, "\n{}", "All checks passed!".green());
        } else {
            let _ = writeln!(out, "\n{}", "Errors found:".red());
            for failure in failures {
                let _ = writeln!(out, "   • {failure}");
            }
        }
        out
    }

    /// Results bucketed by group, groups in first-seen order
    fn grouped(&self) -> Vec<(Option<&str>, Vec<&CheckResult>)> {
        let mut buckets: Vec<(Option<&str>, Vec<&CheckResult>)> = Vec::new();
        for result in self.report.results() {
            let group = result.group.as_deref();
            match buckets.iter_mut().find(|(g, _)| *g == group) {
                Some((_, bucket)) => bucket.push(result),
                None => buckets.push((group, vec![result])),
            }
        }
        buckets
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ListOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.expectations.is_empty() {
            println!("No expectations in {}.", self.checklist);
            return;
        }

        println!("Expectations in {}:\n", self.checklist);
        for e in &self.expectations {
            println!("  [{}] {}", e.kind.as_str().to_uppercase(), e.name);
            println!("  Target: {}", e.target);
            if let Some(group) = &e.group {
                println!("  Group: {group}");
            }
            if !e.tokens.is_empty() {
                let tokens: Vec<String> = e.tokens.iter().map(ToString::to_string).collect();
                println!("  {}: {}", e.noun(), tokens.join(", "));
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidationOutput {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!(
                "{}: {} expectation(s), no problems found.",
                self.checklist, self.expectations
            );
        } else {
            println!("{}: {} problem(s) found:", self.checklist, self.errors.len());
            for error in &self.errors {
                println!("  • {error}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
