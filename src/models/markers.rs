use crate::constants::{DEFAULT_LEFT_MARKER, DEFAULT_RIGHT_MARKER};

/// Pair of tokens used to bracket annotated intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers<T> {
    pub left: T,
    pub right: T,
}

impl<T> Markers<T> {
    pub fn new(left: T, right: T) -> Self {
        Markers { left, right }
    }
}

impl<T: MarkerToken> Default for Markers<T> {
    fn default() -> Self {
        Markers {
            left: T::left_marker(),
            right: T::right_marker(),
        }
    }
}

/// Token types with a conventional pair of bracket markers, `"("` and `")"`.
pub trait MarkerToken: Sized {
    fn left_marker() -> Self;
    fn right_marker() -> Self;
}

impl MarkerToken for String {
    fn left_marker() -> Self {
        DEFAULT_LEFT_MARKER.to_string()
    }

    fn right_marker() -> Self {
        DEFAULT_RIGHT_MARKER.to_string()
    }
}

impl MarkerToken for &'static str {
    fn left_marker() -> Self {
        DEFAULT_LEFT_MARKER
    }

    fn right_marker() -> Self {
        DEFAULT_RIGHT_MARKER
    }
}

impl MarkerToken for char {
    fn left_marker() -> Self {
        '('
    }

    fn right_marker() -> Self {
        ')'
    }
}
