//! Line-level diff engine.
//!
//! Computes the minimal line edit script between two texts with a Longest
//! Common Subsequence table and a deterministic backtrace, plus the derived
//! statistics and text renderings used by the diff checker.
//!
//! # Example
//!
//! ```
//! use diff_engine::{DiffLine, DiffStats, compute_diff};
//!
//! let diff = compute_diff("a\nb", "a\nb\nc");
//! assert_eq!(diff.last(), Some(&DiffLine::add(3, "c")));
//!
//! let stats = DiffStats::from_lines(&diff);
//! assert_eq!((stats.added, stats.removed, stats.unchanged), (1, 0, 2));
//! ```

pub mod diff;
pub mod lines;
pub mod render;

pub use diff::{ChangeKind, DiffAlgorithm, DiffLine, DiffStats, LcsDiff, LcsTable};
pub use diff::{compute_diff, diff_lines};
pub use lines::{line_count, split_lines};
