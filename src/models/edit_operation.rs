/// A single step of an alignment script.
///
/// Indices are 1-based cost-matrix coordinates: `Match { reference: i, hypothesis: j }`
/// consumes `reference[i - 1]` and `hypothesis[j - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    /// Equal tokens, zero cost.
    Match { reference: usize, hypothesis: usize },
    /// Unequal tokens, cost 1.
    Substitute { reference: usize, hypothesis: usize },
    /// Reference token without a hypothesis counterpart, cost 1.
    Delete { reference: usize },
    /// Hypothesis token without a reference counterpart, cost 1.
    Insert { hypothesis: usize },
}

impl EditOperation {
    pub fn cost(&self) -> usize {
        match self {
            EditOperation::Match { .. } => 0,
            EditOperation::Substitute { .. }
            | EditOperation::Delete { .. }
            | EditOperation::Insert { .. } => 1,
        }
    }

    /// Matches and substitutions consume one token from each side and anchor a block.
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            EditOperation::Match { .. } | EditOperation::Substitute { .. }
        )
    }

    /// Single-character code, as used in edit vectors (`M`, `S`, `D`, `I`).
    pub fn as_char(&self) -> char {
        match self {
            EditOperation::Match { .. } => 'M',
            EditOperation::Substitute { .. } => 'S',
            EditOperation::Delete { .. } => 'D',
            EditOperation::Insert { .. } => 'I',
        }
    }
}
