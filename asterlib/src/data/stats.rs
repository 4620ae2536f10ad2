//! Core data structures for line statistics.
//!
//! Two types live here:
//!
//! - **Locs**: the raw running counter filled by the line classifier. It only
//!   knows about code, comment and blank lines and can be summed.
//! - **FileStats**: an immutable snapshot of one file (or of a merged set of
//!   files) with the total and the derived percentages.
//!
//! Percentages are kept unrounded. Rounding to two decimals is a display
//! concern handled by the output layer.

use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Raw line counts for one piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Locs {
    /// Lines that are neither comments nor blank
    pub code: u64,
    /// Line comments (`//`, `#`) and every line of a block comment
    pub comments: u64,
    /// Whitespace-only lines
    pub blanks: u64,
}

impl Locs {
    /// Create a new Locs with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total line count.
    pub fn total(&self) -> u64 {
        self.code + self.comments + self.blanks
    }
}

impl Add for Locs {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blanks: self.blanks + other.blanks,
        }
    }
}

impl AddAssign for Locs {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.blanks += other.blanks;
    }
}

/// Statistics for a single file, or for several files merged together.
///
/// Built once from the three counts and never modified afterwards. When the
/// total is zero every percentage is reported as `0.0` instead of dividing by
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FileStats {
    code: u64,
    comment: u64,
    blank: u64,
    total: u64,
    code_pct: f64,
    comment_pct: f64,
    blank_pct: f64,
}

impl FileStats {
    /// Create file stats from raw counts, deriving the total and percentages.
    pub fn new(code: u64, comment: u64, blank: u64) -> Self {
        let total = code + comment + blank;
        let denominator = total.max(1) as f64;
        let pct = |count: u64| count as f64 / denominator * 100.0;

        Self {
            code,
            comment,
            blank,
            total,
            code_pct: pct(code),
            comment_pct: pct(comment),
            blank_pct: pct(blank),
        }
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn comment(&self) -> u64 {
        self.comment
    }

    pub fn blank(&self) -> u64 {
        self.blank
    }

    /// Total lines (`code + comment + blank`).
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn code_pct(&self) -> f64 {
        self.code_pct
    }

    pub fn comment_pct(&self) -> f64 {
        self.comment_pct
    }

    pub fn blank_pct(&self) -> f64 {
        self.blank_pct
    }

    /// The raw counts behind these stats.
    pub fn locs(&self) -> Locs {
        Locs {
            code: self.code,
            comments: self.comment,
            blanks: self.blank,
        }
    }
}

impl Default for FileStats {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl From<Locs> for FileStats {
    fn from(locs: Locs) -> Self {
        Self::new(locs.code, locs.comments, locs.blanks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locs_default() {
        let locs = Locs::new();
        assert_eq!(locs.code, 0);
        assert_eq!(locs.comments, 0);
        assert_eq!(locs.blanks, 0);
        assert_eq!(locs.total(), 0);
    }

    #[test]
    fn test_locs_add() {
        let a = Locs {
            code: 100,
            comments: 10,
            blanks: 15,
        };
        let b = Locs {
            code: 50,
            comments: 5,
            blanks: 10,
        };

        let sum = a + b;
        assert_eq!(sum.code, 150);
        assert_eq!(sum.comments, 15);
        assert_eq!(sum.blanks, 25);
        assert_eq!(sum.total(), 190);

        let mut acc = Locs::new();
        acc += a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_file_stats_total_and_percentages() {
        let stats = FileStats::new(2, 1, 1);
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.code_pct(), 50.0);
        assert_eq!(stats.comment_pct(), 25.0);
        assert_eq!(stats.blank_pct(), 25.0);
    }

    #[test]
    fn test_file_stats_percentages_sum_to_hundred() {
        let samples = [
            (1, 0, 0),
            (1, 1, 1),
            (7, 3, 2),
            (0, 13, 0),
            (999, 1, 17),
            (3, 3, 3),
            (123_456, 7, 89),
        ];

        for (code, comment, blank) in samples {
            let stats = FileStats::new(code, comment, blank);
            assert_eq!(stats.total(), code + comment + blank);
            let sum = stats.code_pct() + stats.comment_pct() + stats.blank_pct();
            assert!(
                (sum - 100.0).abs() < 1e-9,
                "percentages for {:?} sum to {}",
                (code, comment, blank),
                sum
            );
        }
    }

    #[test]
    fn test_file_stats_zero_total() {
        let stats = FileStats::new(0, 0, 0);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.code_pct(), 0.0);
        assert_eq!(stats.comment_pct(), 0.0);
        assert_eq!(stats.blank_pct(), 0.0);
        assert_eq!(stats, FileStats::default());
    }

    #[test]
    fn test_file_stats_from_locs() {
        let locs = Locs {
            code: 3,
            comments: 2,
            blanks: 1,
        };
        let stats = FileStats::from(locs);
        assert_eq!(stats.code(), 3);
        assert_eq!(stats.comment(), 2);
        assert_eq!(stats.blank(), 1);
        assert_eq!(stats.locs(), locs);
    }
}
