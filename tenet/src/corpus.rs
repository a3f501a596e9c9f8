//! The in-memory snapshot of a documentation tree.
//!
//! Directory walking and file reading live in `tenet-validator`; a [`Corpus`]
//! is plain data, so every principle check stays a pure function that can be
//! exercised against hand-built fixtures without touching a filesystem.

use std::path::PathBuf;

use serde::Serialize;

/// A single documentation source file, loaded in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path relative to the documentation root.
    pub path: PathBuf,
    /// Raw UTF-8 content.
    pub content: String,
}

impl Document {
    /// Create a document from its relative path and content.
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

/// One top-level subdirectory of the documentation root.
///
/// Only the name and the number of direct children matter: the structure
/// and modularity principles inspect layout, never content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdir {
    /// Directory name (a single path component, not a path).
    pub name: String,
    /// Number of direct children, files and directories alike.
    pub entry_count: usize,
}

impl Subdir {
    /// Create a subdirectory record.
    #[must_use]
    pub fn new(name: String, entry_count: usize) -> Self {
        Self { name, entry_count }
    }
}

/// The kind of failure that kept a path out of the corpus.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadFailureKind {
    /// An I/O error occurred while reading the file.
    Io,
    /// The file exceeded the configured maximum size limit.
    TooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// A directory traversal error (permission denied, loop detected, etc.).
    Walk,
    /// A resource limit (`max_files` or `max_total_bytes`) was reached,
    /// truncating the scan before this path was read.
    LimitExceeded,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A path that could not be loaded into the corpus.
///
/// Distinct from a failed principle: a `ReadFailure` means the validator never
/// saw the content at all. The format-compatibility principle turns a non-empty
/// failure list into a visible check failure, so these are never silently
/// discarded.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReadFailure {
    /// The path that could not be loaded.
    pub path: PathBuf,
    /// The kind of failure.
    pub kind: ReadFailureKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ReadFailure {
    /// Create a read failure record.
    #[must_use]
    pub fn new(path: PathBuf, kind: ReadFailureKind, message: String) -> Self {
        Self {
            path,
            kind,
            message,
        }
    }

    /// Format the failure for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [read error] {}", self.path.display(), self.message)
    }
}

/// Everything the principle battery consumes, loaded once per run.
///
/// Checks never read the filesystem; re-evaluating the battery against the
/// same corpus always yields the same outcomes.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Documents under the root, in sorted relative-path order.
    pub documents: Vec<Document>,
    /// Top-level subdirectories of the root.
    pub subdirs: Vec<Subdir>,
    /// Whether a file named exactly `intro.md` sits directly under the root.
    pub root_has_intro: bool,
    /// Paths that could not be loaded.
    pub read_failures: Vec<ReadFailure>,
}

impl Corpus {
    /// Assemble a corpus from its parts.
    #[must_use]
    pub fn new(
        documents: Vec<Document>,
        subdirs: Vec<Subdir>,
        root_has_intro: bool,
        read_failures: Vec<ReadFailure>,
    ) -> Self {
        Self {
            documents,
            subdirs,
            root_has_intro,
            read_failures,
        }
    }

    /// Number of documents successfully loaded.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
