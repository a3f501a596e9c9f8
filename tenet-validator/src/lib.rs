//! # tenet-validator
//!
//! Documentation principle validator for Markdown documentation trees.
//!
//! The validator loads the documentation corpus from disk exactly once, then
//! evaluates the fixed principle battery from the `tenet` crate against that
//! in-memory snapshot. No check reads the filesystem.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use tenet_validator::{ScanConfig, validate_docs};
//!
//! let mut config = ScanConfig::default();
//! config.root = PathBuf::from("docs");
//! config.exclude = vec!["drafts/*".to_owned()];
//!
//! let report = validate_docs(&config).unwrap();
//! println!("Documents scanned: {}", report.scanned_documents);
//! println!("Principles passed: {}/{}", report.passed_count(), report.results.len());
//! println!("OK: {}", report.ok);
//! ```

mod config;
pub mod output;
mod report;
mod scanner;

pub use config::{DEFAULT_ROOT, ScanConfig};
pub use report::{PrincipleResult, ValidationReport};

use std::path::PathBuf;

use tenet::corpus::{Corpus, Document, ReadFailure, ReadFailureKind};
use tenet::principle::{INTRO_FILE, PRINCIPLES};
use tracing::debug;

use scanner::{find_documents, read_document_bounded, snapshot_subdirs};

/// Validate a documentation tree against the principle battery.
///
/// This is the primary public API. The corpus is loaded exactly once; every
/// principle then runs against the same snapshot, so no check can observe
/// files appearing or changing mid-run.
///
/// # Errors
///
/// Returns an error if `config.root` does not exist or is not a directory.
/// Unreadable files inside an existing root are not errors at this level:
/// they are recorded in `report.read_failures` and fail the
/// format-compatibility principle instead.
pub fn validate_docs(config: &ScanConfig) -> anyhow::Result<ValidationReport> {
    if !config.root.exists() {
        anyhow::bail!(
            "Documentation root does not exist: {}",
            config.root.display()
        );
    }
    if !config.root.is_dir() {
        anyhow::bail!(
            "Documentation root is not a directory: {}",
            config.root.display()
        );
    }

    let (paths, mut read_failures) = find_documents(config);

    let mut documents = Vec::with_capacity(paths.len());
    let mut total_bytes: u64 = 0;
    for path in &paths {
        if documents.len() + read_failures.len() >= config.max_files {
            read_failures.push(ReadFailure::new(
                path.clone(),
                ReadFailureKind::LimitExceeded,
                format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not loaded",
                    config.max_files
                ),
            ));
            break;
        }

        match read_document_bounded(path, config.max_file_size) {
            Ok(content) => {
                let file_bytes = content.len() as u64;
                if total_bytes.saturating_add(file_bytes) > config.max_total_bytes {
                    read_failures.push(ReadFailure::new(
                        path.clone(),
                        ReadFailureKind::LimitExceeded,
                        format!(
                            "Scan aborted: max_total_bytes limit ({}) reached; remaining files not loaded",
                            config.max_total_bytes
                        ),
                    ));
                    break;
                }
                total_bytes = total_bytes.saturating_add(file_bytes);

                let relative = path
                    .strip_prefix(&config.root)
                    .unwrap_or(path.as_path())
                    .to_path_buf();
                documents.push(Document::new(relative, content));
            }
            Err(failure) => read_failures.push(failure),
        }
    }

    let subdirs = snapshot_subdirs(&config.root, &mut read_failures);
    let root_has_intro = config.root.join(INTRO_FILE).is_file();
    let corpus = Corpus::new(documents, subdirs, root_has_intro, read_failures);
    debug!(
        documents = corpus.document_count(),
        subdirs = corpus.subdirs.len(),
        read_failures = corpus.read_failures.len(),
        "corpus loaded"
    );

    Ok(evaluate(corpus, config.root.clone()))
}

/// Run the battery over a loaded corpus and assemble the report.
fn evaluate(corpus: Corpus, root: PathBuf) -> ValidationReport {
    let mut results = Vec::with_capacity(PRINCIPLES.len());
    for principle in PRINCIPLES {
        let outcome = principle.evaluate(&corpus);
        results.push(PrincipleResult {
            name: principle.name(),
            passed: outcome.passed,
            message: outcome.message,
        });
    }

    ValidationReport {
        root,
        scanned_documents: corpus.document_count(),
        ok: results.iter().all(|result| result.passed),
        results,
        read_failures: corpus.read_failures,
    }
}
