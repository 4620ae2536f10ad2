//! # asterlib
//!
//! A lines of code counter library that separates code, comment, and blank
//! lines for any text-based source file.
//!
//! ## Overview
//!
//! The library works in three stages:
//!
//! - **Source**: turn paths into files, with an extension allow-list,
//!   excluded directories and optional recursion
//! - **Data**: classify every line of every file and collect the counts per
//!   path in an [`Aggregator`]
//! - **Output**: turn the aggregator into display-ready [`Report`] rows,
//!   either per file or as one combined total
//!
//! Classification is textual, not language-aware: `//` and `#` start line
//! comments, `/*` opens a block comment that lasts until a line ending with
//! `*/`, whitespace-only lines are blank and everything else is code.
//!
//! ## Example
//!
//! ```rust
//! use asterlib::{count_file, count_paths, Aggregation, CountOptions, FilterConfig, Report};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let file_path = dir.path().join("main.go");
//! fs::write(&file_path, "// Entry point\npackage main\n\nfunc main() {}\n").unwrap();
//!
//! // Count a single file
//! let stats = count_file(&file_path).unwrap();
//! assert_eq!(stats.code(), 2);
//! assert_eq!(stats.comment(), 1);
//! assert_eq!(stats.blank(), 1);
//!
//! // Count a whole tree and merge the results
//! let filter = FilterConfig::new().recursive(true).extension("go");
//! let options = CountOptions::new().filter(filter).aggregation(Aggregation::Total);
//! let result = count_paths(&[dir.path()], &options);
//!
//! let report = Report::from_result(&result);
//! assert_eq!(report.total.total, 4);
//! assert_eq!(report.total.code_pct, "50.00");
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    count_file, count_paths, parse_file, parse_string, Aggregator, CountResult, FileStats,
    LineKind, Locs, ScanState, SkippedPath, Visitor,
};
pub use error::AsterError;
pub use options::{Aggregation, CountOptions};
pub use output::{Report, ReportRow};
pub use source::{discover_files, FilterConfig};

/// Result type for asterlib operations
pub type Result<T> = std::result::Result<T, AsterError>;
