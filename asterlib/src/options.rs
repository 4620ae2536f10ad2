//! Input options for LOC counting.
//!
//! All run-time configuration is carried by values built up front and
//! passed down: [`FilterConfig`] for file selection and [`CountOptions`] for
//! the whole run.

use serde::Serialize;

use crate::source::filter::FilterConfig;

/// Aggregation level for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// One entry per file (default)
    #[default]
    ByFile,
    /// A single combined total
    Total,
}

/// Options for counting LOC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// File selection
    pub filter: FilterConfig,
    /// How results are meant to be reported
    pub aggregation: Aggregation,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set aggregation level.
    pub fn aggregation(mut self, level: Aggregation) -> Self {
        self.aggregation = level;
        self
    }
}
