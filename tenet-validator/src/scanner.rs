//! Filesystem discovery and bounded reading.
//!
//! Discovers documentation files under the root and reads them safely before
//! any principle runs. Reading discipline:
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Device files, pipes, and sockets are skipped
//! - Maximum directory depth is enforced to prevent infinite recursion
//! - Bounded streaming reads prevent TOCTOU and memory `DoS`

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tenet::corpus::{ReadFailure, ReadFailureKind, Subdir};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Directories never scanned.
pub const SKIP_DIRS: &[&str] = &["node_modules", ".git", "build", ".docusaurus", "target"];

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Check if a file counts as documentation.
fn is_document(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "mdx")
    )
}

/// Find all documentation files under the configured root.
///
/// Returns `(paths, read_failures)`:
/// - `paths`: files that passed all filters, sorted for deterministic output.
/// - `read_failures`: walk errors (permission denied, loop, etc.) and invalid
///   exclude patterns. These are never silently discarded; they surface in
///   the report.
pub fn find_documents(config: &ScanConfig) -> (Vec<PathBuf>, Vec<ReadFailure>) {
    let mut paths = Vec::new();
    let mut read_failures = Vec::new();

    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pattern_str in &config.exclude {
        match Pattern::new(pattern_str) {
            Ok(pattern) => exclude_patterns.push(pattern),
            Err(e) => {
                read_failures.push(ReadFailure::new(
                    PathBuf::from(pattern_str),
                    ReadFailureKind::InvalidExcludePattern,
                    format!("Invalid exclude glob pattern '{pattern_str}': {e}"),
                ));
            }
        }
    }

    for entry_result in WalkDir::new(&config.root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(walk_err) => {
                // Propagate walk errors (permission denied, loop, etc.) as read failures.
                let path = walk_err
                    .path()
                    .map_or_else(|| config.root.clone(), Path::to_path_buf);
                read_failures.push(ReadFailure::new(
                    path,
                    ReadFailureKind::Walk,
                    format!("Directory traversal error: {walk_err}"),
                ));
                continue;
            }
        };

        let file_path = entry.path();

        if !file_path.is_file() {
            continue;
        }

        // Skip devices, pipes, sockets; only regular files
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if let Ok(ft) = entry.metadata().map(|m| m.file_type())
                && (ft.is_block_device()
                    || ft.is_char_device()
                    || ft.is_fifo()
                    || ft.is_socket())
            {
                continue;
            }
        }

        if !is_document(file_path) {
            continue;
        }

        if matches_exclude(file_path, &exclude_patterns) {
            continue;
        }

        paths.push(file_path.to_path_buf());
    }

    paths.sort();
    paths.dedup();
    debug!(files = paths.len(), "discovered documentation files");
    (paths, read_failures)
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Uses `Read::take` so the size check and the actual read are the same
/// operation; the validator never calls `read_to_string` on an unbounded
/// handle.
///
/// # Errors
///
/// Returns a `ReadFailure` if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_document_bounded(path: &Path, max_file_size: u64) -> Result<String, ReadFailure> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return Err(ReadFailure::new(
                path.to_owned(),
                ReadFailureKind::Io,
                format!("Failed to open file: {e}"),
            ));
        }
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    if let Err(e) = file.take(max_file_size + 1).read_to_end(&mut buffer) {
        return Err(ReadFailure::new(
            path.to_owned(),
            ReadFailureKind::Io,
            format!("Failed to read file: {e}"),
        ));
    }

    if buffer.len() as u64 > max_file_size {
        return Err(ReadFailure::new(
            path.to_owned(),
            ReadFailureKind::TooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    match String::from_utf8(buffer) {
        Ok(content) => Ok(content),
        Err(_) => Err(ReadFailure::new(
            path.to_owned(),
            ReadFailureKind::InvalidEncoding,
            "File is not valid UTF-8".to_owned(),
        )),
    }
}

/// Snapshot the top-level subdirectories of the root for the layout checks.
///
/// Entry counts mirror the raw directory listing; exclude patterns narrow the
/// corpus, never the layout. Pruned directories ([`SKIP_DIRS`]) are omitted.
pub fn snapshot_subdirs(root: &Path, read_failures: &mut Vec<ReadFailure>) -> Vec<Subdir> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            read_failures.push(ReadFailure::new(
                root.to_path_buf(),
                ReadFailureKind::Io,
                format!("Failed to list documentation root: {e}"),
            ));
            return Vec::new();
        }
    };

    let mut subdirs = Vec::new();
    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                read_failures.push(ReadFailure::new(
                    root.to_path_buf(),
                    ReadFailureKind::Io,
                    format!("Failed to read directory entry: {e}"),
                ));
                continue;
            }
        };

        if !entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if SKIP_DIRS.contains(&name.as_str()) {
            continue;
        }

        let entry_count = match std::fs::read_dir(entry.path()) {
            Ok(children) => children.count(),
            Err(e) => {
                read_failures.push(ReadFailure::new(
                    entry.path(),
                    ReadFailureKind::Io,
                    format!("Failed to list directory: {e}"),
                ));
                0
            }
        };
        subdirs.push(Subdir::new(name, entry_count));
    }

    subdirs.sort_by(|a, b| a.name.cmp(&b.name));
    subdirs
}
