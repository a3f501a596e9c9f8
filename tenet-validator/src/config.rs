//! Scan configuration.
//!
//! Everything here concerns how the corpus is loaded from disk. The principle
//! battery itself takes no configuration; it sees only the finished corpus.

use std::path::PathBuf;

/// Default documentation root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "./docs";

/// Options controlling corpus loading.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Documentation root to scan. Defaults to [`DEFAULT_ROOT`].
    pub root: PathBuf,
    /// Exclude patterns (glob format), matched against the full path and the
    /// file name. Excluded files are simply absent from the corpus; exclusion
    /// never fails a run by itself.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB). Larger files become read
    /// failures instead of corpus documents.
    pub max_file_size: u64,
    /// Whether to follow symbolic links during traversal.
    ///
    /// **Defaults to `false`**: following symlinks can walk outside the
    /// documentation root. Only enable if you trust every link in the tree.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested directories.
    pub max_depth: usize,
    /// Maximum number of files to load (default: `10_000`).
    /// Prevents memory exhaustion on pathological trees.
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 256 MB).
    pub max_total_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 10_000,
            max_total_bytes: 268_435_456,
        }
    }
}
