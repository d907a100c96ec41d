//! Report model
//!
//! Aggregate of all results from one run. A report holds no state of its own:
//! every count is derived from the results it was built from.

use serde::Serialize;

use super::CheckResult;

/// Summary of a conformance run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    results: Vec<CheckResult>,
    passed: usize,
}

impl Report {
    /// Build a report by folding over results
    #[must_use]
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let passed = results.iter().fold(0, |n, r| if r.passed { n + 1 } else { n });
        Self { results, passed }
    }

    /// All results, in evaluation order
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of expectations evaluated
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.results.len()
    }

    /// Number of expectations that passed
    #[must_use]
    pub const fn passed_count(&self) -> usize {
        self.passed
    }

    /// Number of expectations that failed
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed
    }

    /// True iff every expectation passed
    #[must_use]
    pub fn success(&self) -> bool {
        self.passed == self.results.len()
    }

    /// Failure lines, in evaluation order
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.results.iter().filter(|r| !r.passed).map(CheckResult::failure_line).collect()
    }

    /// `X/Y tests passed`
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{} tests passed", self.passed, self.results.len())
    }
}

impl FromIterator<CheckResult> for Report {
    fn from_iter<I: IntoIterator<Item = CheckResult>>(iter: I) -> Self {
        Self::from_results(iter.into_iter().collect())
    }
}

/// Serialized form of a report
#[derive(Serialize)]
struct ReportRepr<'a> {
    run: usize,
    passed: usize,
    failed: usize,
    success: bool,
    results: &'a [CheckResult],
    failures: Vec<String>,
}

impl Serialize for Report {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportRepr {
            run: self.run_count(),
            passed: self.passed_count(),
            failed: self.failed_count(),
            success: self.success(),
            results: &self.results,
            failures: self.failures(),
        }
        .serialize(serializer)
    }
}
