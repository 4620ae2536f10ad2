//! Data collection: classify files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading files and
//! collecting line statistics. It provides:
//!
//! - **Classification**: line-by-line code/comment/blank state machine
//! - **Statistics**: `Locs` counters and immutable `FileStats`
//! - **Aggregation**: per-path `Aggregator` with a merge into one total
//! - **Counting**: high-level API (`count_paths`, `count_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use asterlib::{count_paths, CountOptions};
//!
//! let result = count_paths(&["src"], &CountOptions::new());
//! println!("Total code lines: {}", result.total().code());
//! ```

pub mod aggregator;
pub mod counter;
pub mod stats;
pub mod visitor;

pub use aggregator::Aggregator;
pub use counter::{count_file, count_paths, CountResult, SkippedPath};
pub use stats::{FileStats, Locs};
pub use visitor::{parse_file, parse_string, LineKind, ScanState, Visitor};
