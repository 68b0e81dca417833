//! Longest Common Subsequence diff.
//!
//! The table is filled bottom-up in O(m*n) time and memory, then walked back
//! from its last cell to recover the edit script. No Myers-style O(ND)
//! shortcut is attempted, so inputs should stay at pasted-snippet scale.

pub mod algorithm;
pub mod table;

pub use algorithm::LcsDiff;
pub use table::LcsTable;
