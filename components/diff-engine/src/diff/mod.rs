//! Line diff computation.
//!
//! The engine compares two line sequences with an LCS table (see [`lcs`])
//! and returns [`DiffLine`] records in document order. [`DiffStats`] is a
//! separate read-only summary over such a result.

pub mod lcs;
pub mod stats;
pub mod traits;

pub use lcs::{LcsDiff, LcsTable};
pub use stats::DiffStats;
pub use traits::{ChangeKind, DiffAlgorithm, DiffLine};

use crate::lines::split_lines;

/// Diffs two line sequences with the LCS engine.
#[must_use]
pub fn diff_lines(old: &[&str], new: &[&str]) -> Vec<DiffLine> {
    LcsDiff::new().diff(old, new)
}

/// Splits both texts on `'\n'` and diffs the resulting lines.
///
/// Two empty texts produce a single unchanged empty line, since each splits
/// into one empty line.
#[must_use]
pub fn compute_diff(old_text: &str, new_text: &str) -> Vec<DiffLine> {
    diff_lines(&split_lines(old_text), &split_lines(new_text))
}
