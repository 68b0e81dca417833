//! Diff checker limits.
//!
//! The engine is quadratic in the line counts of its inputs, so comparisons
//! are refused above a per-text line limit and above a bound on the size of
//! the LCS table both texts together would need.

use serde::Deserialize;

/// Limits applied before a comparison runs.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DiffSettings {
    /// Maximum number of lines per text (default: 10000)
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Maximum LCS table cells, `(old lines + 1) * (new lines + 1)`
    /// (default: 4000000, about 32 MiB of table)
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

impl DiffSettings {
    /// Number of LCS table cells needed to diff `old_lines` against
    /// `new_lines`, saturating at `usize::MAX`.
    #[must_use]
    pub const fn table_cells(old_lines: usize, new_lines: usize) -> usize {
        old_lines
            .saturating_add(1)
            .saturating_mul(new_lines.saturating_add(1))
    }
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            max_cells: default_max_cells(),
        }
    }
}

fn default_max_lines() -> usize {
    10_000
}

fn default_max_cells() -> usize {
    4_000_000
}
