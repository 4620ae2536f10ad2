//! High-level LOC counting API.
//!
//! Ties discovery and classification together: every argument path is
//! expanded into files, each file is classified, and the results land in an
//! [`Aggregator`]. Paths that cannot be processed are collected instead of
//! aborting the run.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::options::{Aggregation, CountOptions};
use crate::source::filter::discover_files;
use crate::Result;

use super::aggregator::Aggregator;
use super::stats::FileStats;
use super::visitor::parse_file;

/// A path that was skipped, with the reason shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPath {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of counting a set of paths.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountResult {
    /// Per-file statistics
    pub files: Aggregator,
    /// Paths that could not be processed, in the order they were met
    pub skipped: Vec<SkippedPath>,
    /// Aggregation requested by the caller
    pub aggregation: Aggregation,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Combined statistics across all files.
    pub fn total(&self) -> FileStats {
        self.files.merge()
    }

    fn skip(&mut self, path: &Path, reason: impl ToString) {
        self.skipped.push(SkippedPath {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        });
    }
}

/// Count lines in every file reachable from `paths`.
///
/// Paths are processed in order. A missing path or an unreadable file is
/// recorded in [`CountResult::skipped`] and the run continues.
///
/// # Example
///
/// ```rust
/// use asterlib::{count_paths, CountOptions, FilterConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("main.go"), "package main\n\n// entry\nfunc main() {}\n").unwrap();
/// fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();
///
/// let filter = FilterConfig::new().recursive(true).extension("go");
/// let result = count_paths(&[dir.path()], &CountOptions::new().filter(filter));
///
/// assert_eq!(result.files.len(), 1);
/// assert_eq!(result.total().code(), 2);
/// assert!(result.skipped.is_empty());
/// ```
pub fn count_paths<P: AsRef<Path>>(paths: &[P], options: &CountOptions) -> CountResult {
    let mut result = CountResult::new();
    result.aggregation = options.aggregation;

    for path in paths {
        let path = path.as_ref();

        let files = match discover_files(path, &options.filter) {
            Ok(files) => files,
            Err(err) => {
                result.skip(path, err);
                continue;
            }
        };

        for file in files {
            match count_file(&file) {
                Ok(stats) => {
                    if result.files.record(file.clone(), stats).is_some() {
                        debug!(path = %file.display(), "file counted again, keeping latest");
                    }
                }
                Err(err) => result.skip(&file, err),
            }
        }
    }

    result
}

/// Count lines in a single file.
///
/// # Example
///
/// ```rust
/// use asterlib::count_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("lib.c");
/// fs::write(&file_path, "/* header\n */\nint x;\n").unwrap();
///
/// let stats = count_file(&file_path).unwrap();
/// assert_eq!(stats.code(), 1);
/// assert_eq!(stats.comment(), 2);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<FileStats> {
    parse_file(path).map(FileStats::from)
}
