//! Source discovery: find files to analyze.
//!
//! This module handles the first stage of the pipeline - turning the
//! command-line paths into concrete files. It provides:
//!
//! - **Extension filtering**: allow-list of file extensions
//! - **Directory exclusion**: subtrees skipped during recursive walks
//! - **Discovery**: recursive and non-recursive file selection
//!
//! ## Example
//!
//! ```rust,ignore
//! use asterlib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new()
//!     .recursive(true)
//!     .extensions_from_list("go,rs")
//!     .exclude_dirs_from_list("vendor");
//! let files = discover_files(".", &filter)?;
//! ```

pub mod filter;

pub use filter::{discover_files, FilterConfig};
