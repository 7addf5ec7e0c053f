use crate::models::Error;
use crate::types::Interval;

/// Checks that `interval` is well formed and lies within a sequence of length `len`.
pub fn validate_interval(interval: Interval, len: usize) -> Result<(), Error> {
    let (start, end) = interval;

    if start > end {
        return Err(Error::InvalidInterval(interval));
    }

    if end >= len {
        return Err(Error::IntervalOutOfBounds { interval, len });
    }

    Ok(())
}

/// Checks every interval with `validate_interval`, then requires the batch to be sorted by
/// start index and pairwise non-overlapping.
pub fn validate_interval_batch(intervals: &[Interval], len: usize) -> Result<(), Error> {
    for &interval in intervals {
        validate_interval(interval, len)?;
    }

    for pair in intervals.windows(2) {
        let (previous, next) = (pair[0], pair[1]);

        if next.0 < previous.0 {
            return Err(Error::UnsortedIntervals { previous, next });
        }

        if next.0 <= previous.1 {
            return Err(Error::OverlappingIntervals { previous, next });
        }
    }

    Ok(())
}
