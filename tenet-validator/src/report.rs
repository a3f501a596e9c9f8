//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;
use tenet::corpus::ReadFailure;

/// Outcome of one principle, as recorded in the report.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct PrincipleResult {
    /// Principle display name.
    pub name: &'static str,
    /// Whether the principle passed.
    pub passed: bool,
    /// Explanation produced by the check.
    pub message: String,
}

/// Result of a validation run.
///
/// CI pipelines should gate on `ok`, which is true only when every principle
/// passed. Unreadable files fail the format-compatibility principle, so a
/// non-empty `read_failures` always pulls `ok` down with it.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Documentation root that was scanned.
    pub root: PathBuf,
    /// Number of documents successfully loaded into the corpus.
    pub scanned_documents: usize,
    /// Whether every principle passed.
    pub ok: bool,
    /// Per-principle outcomes, in battery order.
    pub results: Vec<PrincipleResult>,
    /// Files that could not be loaded.
    pub read_failures: Vec<ReadFailure>,
}

impl ValidationReport {
    /// Number of principles that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|result| result.passed).count()
    }

    /// Number of principles that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.len() - self.passed_count()
    }
}
