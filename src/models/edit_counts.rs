use crate::models::EditOperation;

/// Tally of the operations along an alignment script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditCounts {
    pub matches: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl EditCounts {
    pub fn from_operations(operations: &[EditOperation]) -> Self {
        operations
            .iter()
            .fold(EditCounts::default(), |mut counts, operation| {
                match operation {
                    EditOperation::Match { .. } => counts.matches += 1,
                    EditOperation::Substitute { .. } => counts.substitutions += 1,
                    EditOperation::Delete { .. } => counts.deletions += 1,
                    EditOperation::Insert { .. } => counts.insertions += 1,
                }
                counts
            })
    }

    /// Number of non-match operations; equal to the edit distance for an optimal script.
    pub fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// Total number of operations in the script.
    pub fn total(&self) -> usize {
        self.matches + self.errors()
    }
}
