use crate::types::EditDistance;
use log::debug;

/// Dynamic-programming cost table between a reference and a hypothesis.
///
/// Cell `(i, j)` holds the minimum number of insertions, deletions, and substitutions needed
/// to transform `reference[..i]` into `hypothesis[..j]`. The table has `m + 1` rows and
/// `n + 1` columns and is stored row-major in a single flat vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    costs: Vec<EditDistance>,
}

impl CostMatrix {
    /// Fills the full `(m + 1) x (n + 1)` table.
    ///
    /// Tokens are compared by exact equality. Empty sequences are valid; with one side empty,
    /// `cost(i, j) == max(i, j)`.
    pub fn build<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Self {
        let rows = reference.len() + 1;
        let cols = hypothesis.len() + 1;

        debug!("Building {} x {} cost matrix...", rows, cols);

        let mut costs = vec![0; rows * cols];

        // Reference prefixes reach the empty hypothesis by deleting every token
        for i in 0..rows {
            costs[i * cols] = i;
        }

        // Hypothesis prefixes are reached from the empty reference by inserting every token
        for j in 0..cols {
            costs[j] = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let substitution_cost = if reference[i - 1] == hypothesis[j - 1] {
                    0
                } else {
                    1
                };

                let diagonal = costs[(i - 1) * cols + (j - 1)] + substitution_cost;
                let deletion = costs[(i - 1) * cols + j] + 1;
                let insertion = costs[i * cols + (j - 1)] + 1;

                costs[i * cols + j] = diagonal.min(deletion).min(insertion);
            }
        }

        CostMatrix { rows, cols, costs }
    }

    /// Number of rows, `len(reference) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(hypothesis) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost of cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i >= rows()` or `j >= cols()`.
    pub fn cost(&self, i: usize, j: usize) -> EditDistance {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) is outside a {} x {} cost matrix",
            i,
            j,
            self.rows,
            self.cols
        );

        self.costs[i * self.cols + j]
    }

    /// The edit distance between the full sequences, `cost(m, n)`.
    pub fn distance(&self) -> EditDistance {
        self.costs[self.rows * self.cols - 1]
    }
}
