//! File filtering and discovery.
//!
//! Turns one command-line path into the list of files to classify, applying
//! the extension allow-list and, for recursive walks, the excluded
//! directories.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::AsterError;
use crate::Result;

/// Configuration for file selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Allowed extensions without the leading dot (empty = all files)
    pub extensions: Vec<String>,
    /// Directories skipped with their whole subtree during recursive walks
    pub exclude_dirs: Vec<PathBuf>,
    /// Walk directories instead of only accepting file arguments
    pub recursive: bool,
}

impl FilterConfig {
    /// Create a new filter that accepts every file, non-recursively.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an allowed extension. An empty extension matches every file.
    pub fn extension(mut self, ext: &str) -> Self {
        self.extensions.push(ext.trim().to_string());
        self
    }

    /// Add allowed extensions from a comma-separated list (`"go,rs"`).
    pub fn extensions_from_list(mut self, list: &str) -> Self {
        for ext in split_list(list) {
            self = self.extension(ext);
        }
        self
    }

    /// Add a directory to skip during recursive walks.
    pub fn exclude_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exclude_dirs.push(dir.into());
        self
    }

    /// Add excluded directories from a comma-separated list.
    pub fn exclude_dirs_from_list(mut self, list: &str) -> Self {
        for dir in split_list(list).filter(|d| !d.is_empty()) {
            self = self.exclude_dir(dir);
        }
        self
    }

    /// Enable or disable recursive discovery.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Check if a file passes the extension allow-list.
    ///
    /// The check is a suffix match on the file name, so `tar.gz` works as
    /// an extension too.
    pub fn matches(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        let name = path.to_string_lossy();
        self.extensions
            .iter()
            .any(|ext| ext.is_empty() || name.ends_with(&format!(".{}", ext)))
    }

    /// Check if a directory is one of the excluded directories.
    ///
    /// Comparison ignores ASCII/Unicode case and `.` components, so
    /// `./Vendor` and `vendor` name the same directory.
    pub fn is_excluded_dir(&self, path: &Path) -> bool {
        let candidate = normalized(path);
        self.exclude_dirs
            .iter()
            .any(|dir| normalized(dir) == candidate)
    }
}

/// Split a comma-separated option value, keeping empty tokens.
fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim)
}

/// Lowercased path components with `.` removed.
fn normalized(path: &Path) -> Vec<String> {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect()
}

/// Discover the files to classify for one argument path.
///
/// In non-recursive mode the path itself is the only candidate and
/// directories are ignored. In recursive mode the tree below the path is
/// walked without following symlinks, in file-name order.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(AsterError::PathNotFound(root.to_path_buf()));
    }

    if !filter.recursive {
        if !root.is_file() {
            debug!(path = %root.display(), "skipping non-file path in non-recursive mode");
            return Ok(Vec::new());
        }
        return Ok(if filter.matches(root) {
            vec![root.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker.filter_entry(|e| {
        if e.file_type().is_dir() && filter.is_excluded_dir(e.path()) {
            debug!(path = %e.path().display(), "skipping excluded directory");
            return false;
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("{}", AsterError::from(err));
                continue;
            }
        };

        if entry.file_type().is_file() && filter.matches(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
