use crate::models::AlignmentDirection;
use crate::types::{Interval, TokenIndex};
use std::fmt;

/// Errors raised by the alignment functions.
///
/// Every variant describes invalid caller input; the underlying recurrence is total over all
/// finite sequence pairs, so nothing else can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyReference,
    InvalidInterval(Interval),
    IntervalOutOfBounds {
        interval: Interval,
        len: usize,
    },
    UnsortedIntervals {
        previous: Interval,
        next: Interval,
    },
    OverlappingIntervals {
        previous: Interval,
        next: Interval,
    },
    NoCounterpart {
        index: TokenIndex,
    },
    DirectionMismatch {
        expected: AlignmentDirection,
        found: AlignmentDirection,
    },
}

impl Error {
    /// All variants belong to the invalid-input class.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::EmptyReference
            | Error::InvalidInterval(_)
            | Error::IntervalOutOfBounds { .. }
            | Error::UnsortedIntervals { .. }
            | Error::OverlappingIntervals { .. }
            | Error::NoCounterpart { .. }
            | Error::DirectionMismatch { .. } => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyReference => {
                write!(f, "Invalid Input: reference is empty, WER is undefined")
            }
            Error::InvalidInterval((start, end)) => {
                write!(f, "Invalid Input: interval start {} is after end {}", start, end)
            }
            Error::IntervalOutOfBounds { interval, len } => write!(
                f,
                "Invalid Input: interval {:?} is out of bounds for a sequence of length {}",
                interval, len
            ),
            Error::UnsortedIntervals { previous, next } => write!(
                f,
                "Invalid Input: interval {:?} starts before preceding interval {:?}",
                next, previous
            ),
            Error::OverlappingIntervals { previous, next } => write!(
                f,
                "Invalid Input: interval {:?} overlaps preceding interval {:?}",
                next, previous
            ),
            Error::NoCounterpart { index } => write!(
                f,
                "Invalid Input: source index {} has no counterpart in an empty target",
                index
            ),
            Error::DirectionMismatch { expected, found } => write!(
                f,
                "Invalid Input: expected a {} correspondence, got {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for Error {}
