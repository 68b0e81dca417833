//! Errors raised before the engine runs.

use std::fmt;

use thiserror::Error;

/// Which of the two compared texts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The original (old) text.
    Original,
    /// The modified (new) text.
    Modified,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "Original"),
            Self::Modified => write!(f, "Modified"),
        }
    }
}

/// Errors that can occur when requesting a comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckerError {
    /// Both texts are empty.
    #[error("Nothing to compare: both texts are empty")]
    NothingToCompare,

    /// A text has more lines than the configured limit.
    #[error("{side} text has {lines} lines (max {max})")]
    TooManyLines {
        /// The offending text.
        side: Side,
        /// Number of lines in that text.
        lines: usize,
        /// Maximum allowed lines per text.
        max: usize,
    },

    /// Both texts together need a larger LCS table than allowed.
    #[error("Texts too large to compare: {cells} table cells needed (max {max})")]
    TableTooLarge {
        /// Cells the comparison would allocate.
        cells: usize,
        /// Maximum allowed cells.
        max: usize,
    },
}
