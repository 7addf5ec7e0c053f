/// Marker inserted immediately before the first token of an annotated interval.
pub const DEFAULT_LEFT_MARKER: &str = "(";

/// Marker inserted immediately after the last token of an annotated interval.
pub const DEFAULT_RIGHT_MARKER: &str = ")";
