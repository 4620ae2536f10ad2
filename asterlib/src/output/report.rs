//! Display-ready report data.
//!
//! `Report` is the last step before presentation: counts are copied as-is and
//! percentages are formatted to two decimals. It can be rendered by a
//! template or serialized to JSON directly; no computation happens after
//! this point.

use serde::Serialize;

use crate::data::aggregator::Aggregator;
use crate::data::counter::CountResult;
use crate::data::stats::FileStats;
use crate::options::Aggregation;

/// One line of the report (a file, or the combined total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// File path, or "Total (N files)" for the combined row
    pub label: String,
    pub total: u64,
    pub code: u64,
    pub comment: u64,
    pub blank: u64,
    /// Percentages, already formatted with two decimals
    pub code_pct: String,
    pub comment_pct: String,
    pub blank_pct: String,
}

impl ReportRow {
    /// Build a row from file statistics.
    pub fn new(label: impl Into<String>, stats: &FileStats) -> Self {
        Self {
            label: label.into(),
            total: stats.total(),
            code: stats.code(),
            comment: stats.comment(),
            blank: stats.blank(),
            code_pct: format_pct(stats.code_pct()),
            comment_pct: format_pct(stats.comment_pct()),
            blank_pct: format_pct(stats.blank_pct()),
        }
    }
}

/// Report for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Reporting mode
    pub aggregation: Aggregation,
    /// Per-file rows sorted by path (empty for [`Aggregation::Total`])
    pub rows: Vec<ReportRow>,
    /// Combined row over all files
    pub total: ReportRow,
    /// Number of files counted
    pub file_count: usize,
}

impl Report {
    /// Build a report from an aggregator.
    pub fn new(files: &Aggregator, aggregation: Aggregation) -> Self {
        let rows = match aggregation {
            Aggregation::ByFile => files
                .iter()
                .map(|(path, stats)| ReportRow::new(path.display().to_string(), stats))
                .collect(),
            Aggregation::Total => Vec::new(),
        };

        Self {
            aggregation,
            rows,
            total: ReportRow::new(format!("Total ({} files)", files.len()), &files.merge()),
            file_count: files.len(),
        }
    }

    /// Build a report for a counting result, using its aggregation.
    pub fn from_result(result: &CountResult) -> Self {
        Self::new(&result.files, result.aggregation)
    }
}

/// Format a percentage with two decimals.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}", value)
}
