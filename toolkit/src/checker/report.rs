//! Result of one comparison.

use diff_engine::{DiffLine, DiffStats};
use serde::{Deserialize, Serialize};

/// Diff records of one comparison together with their summary counts.
///
/// Only `lines` is read when deserializing; the counts and the identical
/// flag are always recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportLines")]
pub struct DiffReport {
    lines: Vec<DiffLine>,
    stats: DiffStats,
    identical: bool,
}

#[derive(Deserialize)]
struct ReportLines {
    lines: Vec<DiffLine>,
}

impl From<ReportLines> for DiffReport {
    fn from(report: ReportLines) -> Self {
        Self::from_lines(report.lines)
    }
}

impl DiffReport {
    /// Builds a report, tallying the statistics from `lines`.
    #[must_use]
    pub fn from_lines(lines: Vec<DiffLine>) -> Self {
        let stats = DiffStats::from_lines(&lines);
        Self {
            lines,
            stats,
            identical: stats.is_identical(),
        }
    }

    /// The diff records in document order.
    #[must_use]
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    /// Added, removed and unchanged line counts.
    #[must_use]
    pub const fn stats(&self) -> &DiffStats {
        &self.stats
    }

    /// True when both texts have the same lines.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.identical
    }
}
