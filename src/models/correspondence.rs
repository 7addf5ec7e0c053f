use crate::models::Error;
use crate::types::{Interval, TokenIndex};
use crate::utils::validate_interval;
use log::trace;
use std::fmt;

/// Which sequence a `Correspondence` maps from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentDirection {
    /// Hypothesis indices to reference intervals.
    HypToRef,
    /// Reference indices to hypothesis intervals.
    RefToHyp,
}

impl fmt::Display for AlignmentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentDirection::HypToRef => write!(f, "hypothesis-to-reference"),
            AlignmentDirection::RefToHyp => write!(f, "reference-to-hypothesis"),
        }
    }
}

/// For every index of a source sequence, the closed interval it owns in the target sequence.
///
/// Owned intervals are non-empty, non-decreasing, and together cover the target without gaps.
/// Consecutive source indices in the same block own the same interval. When the target is
/// empty there are no blocks, and every source index owns nothing (`None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correspondence {
    direction: AlignmentDirection,
    owned_intervals: Vec<Option<Interval>>,
    target_len: usize,
}

impl Correspondence {
    pub(crate) fn new(
        direction: AlignmentDirection,
        owned_intervals: Vec<Option<Interval>>,
        target_len: usize,
    ) -> Self {
        Correspondence {
            direction,
            owned_intervals,
            target_len,
        }
    }

    pub fn direction(&self) -> AlignmentDirection {
        self.direction
    }

    /// Length of the source sequence.
    pub fn len(&self) -> usize {
        self.owned_intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned_intervals.is_empty()
    }

    /// Length of the target sequence.
    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// The target interval owned by source index `idx`, or `None` when `idx` is out of range
    /// or has no counterpart.
    pub fn owned_interval(&self, idx: TokenIndex) -> Option<Interval> {
        self.owned_intervals.get(idx).copied().flatten()
    }

    /// `(source_index, owned_interval)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenIndex, Option<Interval>)> + '_ {
        self.owned_intervals.iter().copied().enumerate()
    }

    pub fn to_vec(&self) -> Vec<(TokenIndex, Option<Interval>)> {
        self.iter().collect()
    }

    /// Projects a closed source interval onto the target sequence.
    ///
    /// The result spans from the start of the interval owned by `start` to the end of the
    /// interval owned by `end`. Fails with `Error::NoCounterpart` when either endpoint owns
    /// nothing, which happens only against an empty target.
    pub fn project(&self, interval: Interval) -> Result<Interval, Error> {
        validate_interval(interval, self.len())?;

        let (start, end) = interval;
        let first = self.owned_intervals[start].ok_or(Error::NoCounterpart { index: start })?;
        let last = self.owned_intervals[end].ok_or(Error::NoCounterpart { index: end })?;
        let projected = (first.0, last.1);

        trace!("Projected {:?} -> {:?} ({})", interval, projected, self.direction);

        Ok(projected)
    }
}
