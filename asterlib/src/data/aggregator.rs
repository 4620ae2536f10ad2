//! Per-file statistics keyed by path.
//!
//! The aggregator is filled once per invocation, one entry per scanned file,
//! and then handed to the output layer. Recording the same path twice keeps
//! the last result: a file reached both as an argument and through a
//! recursive walk is counted once.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::stats::{FileStats, Locs};

/// Mapping from file path to its statistics, ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregator {
    files: BTreeMap<PathBuf, FileStats>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `path`, returning the previous one.
    pub fn record(&mut self, path: impl Into<PathBuf>, stats: FileStats) -> Option<FileStats> {
        self.files.insert(path.into(), stats)
    }

    /// Sum every entry into a single combined [`FileStats`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use asterlib::{Aggregator, FileStats};
    ///
    /// let mut files = Aggregator::new();
    /// files.record("a.rs", FileStats::new(2, 0, 0));
    /// files.record("b.rs", FileStats::new(0, 1, 1));
    ///
    /// let total = files.merge();
    /// assert_eq!(total.total(), 4);
    /// assert_eq!(total.code_pct(), 50.0);
    /// ```
    pub fn merge(&self) -> FileStats {
        self.files
            .values()
            .fold(Locs::new(), |acc, stats| acc + stats.locs())
            .into()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&FileStats> {
        self.files.get(path.as_ref())
    }

    /// Number of recorded files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &FileStats)> {
        self.files.iter().map(|(path, stats)| (path.as_path(), stats))
    }
}
