use crate::models::{AlignmentScript, EditCounts, Error};
use crate::types::EditDistance;

/// Word error rate together with the counts it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WerReport {
    pub reference_len: usize,
    pub hypothesis_len: usize,
    pub edit_distance: EditDistance,
    pub counts: EditCounts,
    /// `edit_distance / reference_len`
    pub wer: f64,
}

impl WerReport {
    /// Fails with `Error::EmptyReference` when the script's reference is empty.
    pub fn from_script(script: &AlignmentScript) -> Result<Self, Error> {
        if script.reference_len() == 0 {
            return Err(Error::EmptyReference);
        }

        Ok(WerReport {
            reference_len: script.reference_len(),
            hypothesis_len: script.hypothesis_len(),
            edit_distance: script.cost(),
            counts: script.counts(),
            wer: script.cost() as f64 / script.reference_len() as f64,
        })
    }
}
