//! LCS length table.

/// Dense `(m + 1) x (n + 1)` table of LCS lengths.
///
/// Cell `(i, j)` holds the length of the longest common subsequence of the
/// first `i` old lines and the first `j` new lines. Row 0 and column 0 are
/// zero. Cells are stored row-major in one buffer owned by a single diff
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fills the table for `old` against `new`.
    ///
    /// Lines are compared with exact string equality.
    #[must_use]
    pub fn build(old: &[&str], new: &[&str]) -> Self {
        let cols = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * cols];

        for (i, old_line) in old.iter().enumerate() {
            let (above, current) = cells.split_at_mut((i + 1) * cols);
            let above = &above[i * cols..];
            for (j, new_line) in new.iter().enumerate() {
                current[j + 1] = if old_line == new_line {
                    above[j] + 1
                } else {
                    above[j + 1].max(current[j])
                };
            }
        }

        Self { cols, cells }
    }

    /// Returns the LCS length of the first `i` old and first `j` new lines.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is outside the table.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(j < self.cols, "column {j} out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Number of old lines the table was built for.
    #[must_use]
    pub fn old_len(&self) -> usize {
        self.cells.len() / self.cols - 1
    }

    /// Number of new lines the table was built for.
    #[must_use]
    pub const fn new_len(&self) -> usize {
        self.cols - 1
    }

    /// Length of the longest common subsequence of the full inputs.
    #[must_use]
    pub fn lcs_len(&self) -> usize {
        self.get(self.old_len(), self.new_len())
    }
}
