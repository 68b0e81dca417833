//! Summary counts over a diff result.

use serde::{Deserialize, Serialize};

use super::DiffLine;

/// Counts of added, removed and unchanged lines in a diff result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of `Add` records.
    pub added: usize,
    /// Number of `Remove` records.
    pub removed: usize,
    /// Number of `Equal` records.
    pub unchanged: usize,
}

impl DiffStats {
    /// Tallies `lines` in a single pass.
    #[must_use]
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().collect()
    }

    /// Number of changed lines (added plus removed).
    #[must_use]
    pub const fn changes(&self) -> usize {
        self.added + self.removed
    }

    /// True when the diff contains no insertions and no deletions.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.changes() == 0
    }
}

impl<'a> FromIterator<&'a DiffLine> for DiffStats {
    fn from_iter<I: IntoIterator<Item = &'a DiffLine>>(iter: I) -> Self {
        let mut stats = Self::default();
        for line in iter {
            match line {
                DiffLine::Add { .. } => stats.added += 1,
                DiffLine::Remove { .. } => stats.removed += 1,
                DiffLine::Equal { .. } => stats.unchanged += 1,
            }
        }
        stats
    }
}
