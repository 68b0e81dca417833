//! LCS diff algorithm.

use tracing::{debug, instrument};

use super::table::LcsTable;
use crate::diff::{DiffAlgorithm, DiffLine};

/// LCS diff algorithm.
///
/// When stepping back through the table, a match is taken first, then an
/// insertion whenever moving left keeps at least as long a subsequence as
/// moving up, and a deletion otherwise. The insertion preference on ties is
/// part of the output contract: changing it yields different, equally short,
/// edit scripts for texts with ambiguous alignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsDiff;

impl LcsDiff {
    /// Creates new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsDiff {
    #[instrument(level = "debug", skip_all, fields(old_lines = old.len(), new_lines = new.len()))]
    fn diff(&self, old: &[&str], new: &[&str]) -> Vec<DiffLine> {
        let table = LcsTable::build(old, new);
        let lines = backtrack(old, new, &table);
        debug!(lcs = table.lcs_len(), records = lines.len(), "diff computed");
        lines
    }
}

pub(crate) fn backtrack(old: &[&str], new: &[&str], table: &LcsTable) -> Vec<DiffLine> {
    let (mut i, mut j) = (old.len(), new.len());
    let mut lines = Vec::with_capacity(i + j);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            lines.push(DiffLine::equal(i, j, old[i - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            lines.push(DiffLine::add(j, new[j - 1]));
            j -= 1;
        } else {
            lines.push(DiffLine::remove(i, old[i - 1]));
            i -= 1;
        }
    }
    lines.reverse();
    lines
}
