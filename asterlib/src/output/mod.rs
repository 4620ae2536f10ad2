//! Output formatting: present data as report rows.
//!
//! This module handles the last stage of the pipeline - turning an
//! aggregator into display-ready rows. Rendering to text or JSON is left to
//! the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use asterlib::output::Report;
//!
//! let report = Report::from_result(&result);
//! // report.rows: [ReportRow { label: "src/main.go", code_pct: "75.00", ... }]
//! // report.total: ReportRow { label: "Total (3 files)", ... }
//! ```

pub mod report;

pub use report::{format_pct, Report, ReportRow};
