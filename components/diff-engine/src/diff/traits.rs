//! Diff record types and the algorithm trait.
//!
//! This module provides the core types shared by every diff algorithm,
//! enabling pluggable implementations with a consistent interface.

use serde::{Deserialize, Serialize};

/// A single line of a diff result.
///
/// Line numbers are 1-based positions in the old or new line sequence.
/// `content` is the literal line text, copied out of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffLine {
    /// A line present in both texts.
    #[serde(rename_all = "camelCase")]
    Equal {
        /// Line number in the old text.
        line_old: usize,
        /// Line number in the new text.
        line_new: usize,
        /// The line text.
        content: String,
    },
    /// A line that only exists in the new text.
    #[serde(rename_all = "camelCase")]
    Add {
        /// Line number in the new text.
        line_new: usize,
        /// The line text.
        content: String,
    },
    /// A line that only exists in the old text.
    #[serde(rename_all = "camelCase")]
    Remove {
        /// Line number in the old text.
        line_old: usize,
        /// The line text.
        content: String,
    },
}

/// The kind of a [`DiffLine`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Unchanged line.
    Equal,
    /// Inserted line.
    Add,
    /// Deleted line.
    Remove,
}

impl ChangeKind {
    /// Marker printed in front of a rendered line: `+`, `-` or a space.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Equal => ' ',
            Self::Add => '+',
            Self::Remove => '-',
        }
    }
}

impl DiffLine {
    /// Creates an unchanged line record.
    #[must_use]
    pub fn equal(line_old: usize, line_new: usize, content: impl Into<String>) -> Self {
        Self::Equal {
            line_old,
            line_new,
            content: content.into(),
        }
    }

    /// Creates an inserted line record.
    #[must_use]
    pub fn add(line_new: usize, content: impl Into<String>) -> Self {
        Self::Add {
            line_new,
            content: content.into(),
        }
    }

    /// Creates a deleted line record.
    #[must_use]
    pub fn remove(line_old: usize, content: impl Into<String>) -> Self {
        Self::Remove {
            line_old,
            content: content.into(),
        }
    }

    /// Returns the kind of this record.
    #[must_use]
    pub const fn kind(&self) -> ChangeKind {
        match self {
            Self::Equal { .. } => ChangeKind::Equal,
            Self::Add { .. } => ChangeKind::Add,
            Self::Remove { .. } => ChangeKind::Remove,
        }
    }

    /// Returns the old line number, if the line exists in the old text.
    #[must_use]
    pub const fn line_old(&self) -> Option<usize> {
        match self {
            Self::Equal { line_old, .. } | Self::Remove { line_old, .. } => Some(*line_old),
            Self::Add { .. } => None,
        }
    }

    /// Returns the new line number, if the line exists in the new text.
    #[must_use]
    pub const fn line_new(&self) -> Option<usize> {
        match self {
            Self::Equal { line_new, .. } | Self::Add { line_new, .. } => Some(*line_new),
            Self::Remove { .. } => None,
        }
    }

    /// Returns the line text.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Equal { content, .. } | Self::Add { content, .. } | Self::Remove { content, .. } => {
                content
            }
        }
    }

    /// Returns true if this line is an insertion or a deletion.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

/// Trait for line diff algorithms.
///
/// Implementations receive both texts already split into lines and return
/// the records in document order.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the diff between two line sequences.
    ///
    /// # Arguments
    ///
    /// * `old` - The original text as lines.
    /// * `new` - The modified text as lines.
    ///
    /// # Returns
    ///
    /// The `DiffLine` records that transform `old` into `new`.
    fn diff(&self, old: &[&str], new: &[&str]) -> Vec<DiffLine>;
}
