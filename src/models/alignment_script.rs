use crate::models::{CostMatrix, EditCounts, EditOperation};
use crate::types::EditDistance;
use log::{debug, trace};

/// The canonical optimal alignment between a reference and a hypothesis.
///
/// Operations run from the start of both sequences to their ends and consume every index of
/// each sequence exactly once. The script is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentScript {
    operations: Vec<EditOperation>,
    cost: EditDistance,
    reference_len: usize,
    hypothesis_len: usize,
}

impl AlignmentScript {
    /// Builds the cost matrix and walks it back in one call.
    pub fn compute<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Self {
        let cost_matrix = CostMatrix::build(reference, hypothesis);

        Self::from_cost_matrix(&cost_matrix, reference, hypothesis)
    }

    /// Walks `cost_matrix` from `(m, n)` back to `(0, 0)`.
    ///
    /// When several incoming edges reproduce a cell's cost, they are tried in the order
    /// deletion, insertion, diagonal. Preferring deletion keeps a run of repeated reference
    /// tokens behind the match that precedes it, so the run lands in that match's block.
    ///
    /// `cost_matrix` must have been built from `reference` and `hypothesis`.
    pub fn from_cost_matrix<T: PartialEq>(
        cost_matrix: &CostMatrix,
        reference: &[T],
        hypothesis: &[T],
    ) -> Self {
        debug_assert_eq!(cost_matrix.rows(), reference.len() + 1);
        debug_assert_eq!(cost_matrix.cols(), hypothesis.len() + 1);

        let mut operations = Vec::with_capacity(reference.len() + hypothesis.len());
        let mut i = reference.len();
        let mut j = hypothesis.len();

        while i > 0 || j > 0 {
            let cost = cost_matrix.cost(i, j);

            let operation = if i > 0 && cost_matrix.cost(i - 1, j) + 1 == cost {
                EditOperation::Delete { reference: i }
            } else if j > 0 && cost_matrix.cost(i, j - 1) + 1 == cost {
                EditOperation::Insert { hypothesis: j }
            } else if reference[i - 1] == hypothesis[j - 1] {
                EditOperation::Match {
                    reference: i,
                    hypothesis: j,
                }
            } else {
                EditOperation::Substitute {
                    reference: i,
                    hypothesis: j,
                }
            };

            trace!("({}, {}) -> {:?}", i, j, operation);

            match operation {
                EditOperation::Delete { .. } => i -= 1,
                EditOperation::Insert { .. } => j -= 1,
                EditOperation::Match { .. } | EditOperation::Substitute { .. } => {
                    i -= 1;
                    j -= 1;
                }
            }

            operations.push(operation);
        }

        operations.reverse();

        debug!(
            "Backtrace produced {} operations at cost {}",
            operations.len(),
            cost_matrix.distance()
        );

        AlignmentScript {
            operations,
            cost: cost_matrix.distance(),
            reference_len: reference.len(),
            hypothesis_len: hypothesis.len(),
        }
    }

    pub fn operations(&self) -> &[EditOperation] {
        &self.operations
    }

    /// Sum of operation costs, equal to the edit distance.
    pub fn cost(&self) -> EditDistance {
        self.cost
    }

    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    pub fn hypothesis_len(&self) -> usize {
        self.hypothesis_len
    }

    pub fn counts(&self) -> EditCounts {
        EditCounts::from_operations(&self.operations)
    }

    /// Edit vector such as `"MDDMS"`, one character per operation.
    pub fn edit_vector(&self) -> String {
        self.operations.iter().map(EditOperation::as_char).collect()
    }
}
