use crate::types::Interval;

/// Result of projecting a batch of source intervals onto the target sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedAlignment<T> {
    /// Target intervals, parallel to the source intervals given.
    pub projected_intervals: Vec<Interval>,
    /// Source sequence with every source interval bracketed.
    pub annotated_source: Vec<T>,
    /// Target sequence with every projected interval bracketed.
    pub annotated_target: Vec<T>,
}
