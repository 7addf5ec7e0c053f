use crate::models::{AlignmentDirection, AlignmentScript, Correspondence, EditOperation};
use crate::types::{Interval, TokenIndex};
use log::debug;

/// One anchor (match or substitution) together with the orphan tokens attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentBlock {
    pub reference: Interval,
    pub hypothesis: Interval,
}

/// Partition of both sequences into blocks, in script order.
///
/// Blocks are contiguous, gap-free, and non-overlapping in both index spaces. Deletions and
/// insertions extend the most recent anchor's block; those seen before the first anchor are
/// attached to the first anchor instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentBlocks {
    blocks: Vec<AlignmentBlock>,
    reference_len: usize,
    hypothesis_len: usize,
}

impl AlignmentBlocks {
    pub fn from_script(script: &AlignmentScript) -> Self {
        // One block per anchor
        let anchor_count = script
            .operations()
            .iter()
            .filter(|operation| operation.is_anchor())
            .count();
        let mut blocks: Vec<AlignmentBlock> = Vec::with_capacity(anchor_count);

        // Orphans seen before the first anchor
        let mut pending_reference_start: Option<TokenIndex> = None;
        let mut pending_hypothesis_start: Option<TokenIndex> = None;

        for operation in script.operations() {
            match *operation {
                EditOperation::Match {
                    reference,
                    hypothesis,
                }
                | EditOperation::Substitute {
                    reference,
                    hypothesis,
                } => {
                    let (reference_idx, hypothesis_idx) = (reference - 1, hypothesis - 1);

                    let block = if blocks.is_empty() {
                        AlignmentBlock {
                            reference: (
                                pending_reference_start.unwrap_or(reference_idx),
                                reference_idx,
                            ),
                            hypothesis: (
                                pending_hypothesis_start.unwrap_or(hypothesis_idx),
                                hypothesis_idx,
                            ),
                        }
                    } else {
                        AlignmentBlock {
                            reference: (reference_idx, reference_idx),
                            hypothesis: (hypothesis_idx, hypothesis_idx),
                        }
                    };

                    blocks.push(block);
                }
                EditOperation::Delete { reference } => match blocks.last_mut() {
                    Some(anchor) => anchor.reference.1 = reference - 1,
                    None => {
                        pending_reference_start.get_or_insert(reference - 1);
                    }
                },
                EditOperation::Insert { hypothesis } => match blocks.last_mut() {
                    Some(anchor) => anchor.hypothesis.1 = hypothesis - 1,
                    None => {
                        pending_hypothesis_start.get_or_insert(hypothesis - 1);
                    }
                },
            }
        }

        debug!(
            "Assigned {} blocks over {} reference and {} hypothesis tokens",
            blocks.len(),
            script.reference_len(),
            script.hypothesis_len()
        );

        AlignmentBlocks {
            blocks,
            reference_len: script.reference_len(),
            hypothesis_len: script.hypothesis_len(),
        }
    }

    pub fn blocks(&self) -> &[AlignmentBlock] {
        &self.blocks
    }

    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    pub fn hypothesis_len(&self) -> usize {
        self.hypothesis_len
    }

    /// Builds the table mapping every index of the `direction`'s source sequence to the
    /// interval it owns in the target sequence.
    ///
    /// Against an empty target no block exists, so every source index owns `None`.
    pub fn correspondence(&self, direction: AlignmentDirection) -> Correspondence {
        let (source_len, target_len) = match direction {
            AlignmentDirection::HypToRef => (self.hypothesis_len, self.reference_len),
            AlignmentDirection::RefToHyp => (self.reference_len, self.hypothesis_len),
        };

        if self.blocks.is_empty() {
            return Correspondence::new(direction, vec![None; source_len], target_len);
        }

        let mut owned_intervals = Vec::with_capacity(source_len);

        for block in &self.blocks {
            let (source, target) = match direction {
                AlignmentDirection::HypToRef => (block.hypothesis, block.reference),
                AlignmentDirection::RefToHyp => (block.reference, block.hypothesis),
            };

            for _ in source.0..=source.1 {
                owned_intervals.push(Some(target));
            }
        }

        debug_assert_eq!(owned_intervals.len(), source_len);

        Correspondence::new(direction, owned_intervals, target_len)
    }
}
