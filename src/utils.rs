pub mod insert_markers;
pub use insert_markers::insert_markers;

pub mod validate_intervals;
pub use validate_intervals::{validate_interval, validate_interval_batch};
