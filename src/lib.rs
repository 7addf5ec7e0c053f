#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod constants;
pub use constants::{DEFAULT_LEFT_MARKER, DEFAULT_RIGHT_MARKER};
pub mod models;
pub use models::{
    AlignmentBlock, AlignmentBlocks, AlignmentDirection, AlignmentScript, AnnotatedAlignment,
    Correspondence, CostMatrix, EditCounts, EditOperation, Error, MarkerToken, Markers,
    Tokenizer, WerReport,
};
pub mod types;
mod utils;
pub use types::{EditDistance, Interval, Token, TokenIndex, TokenRef};
pub use utils::insert_markers;

use log::debug;
use utils::validate_interval_batch;

/// Minimum number of single-token insertions, deletions, and substitutions that transform
/// `reference` into `hypothesis`.
pub fn edit_distance<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> EditDistance {
    CostMatrix::build(reference, hypothesis).distance()
}

/// Word error rate: `edit_distance(reference, hypothesis) / reference.len()`.
///
/// Fails with `Error::EmptyReference` when `reference` is empty.
pub fn calc_wer<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Result<f64, Error> {
    if reference.is_empty() {
        return Err(Error::EmptyReference);
    }

    Ok(edit_distance(reference, hypothesis) as f64 / reference.len() as f64)
}

/// Word error rate along with the sequence lengths and the per-operation counts of the
/// canonical alignment.
pub fn calc_wer_report<T: PartialEq>(
    reference: &[T],
    hypothesis: &[T],
) -> Result<WerReport, Error> {
    if reference.is_empty() {
        return Err(Error::EmptyReference);
    }

    WerReport::from_script(&AlignmentScript::compute(reference, hypothesis))
}

/// For every hypothesis index, the reference interval it owns (`None` against an empty
/// reference).
pub fn align_hyp_to_ref<T: PartialEq>(hypothesis: &[T], reference: &[T]) -> Correspondence {
    align(reference, hypothesis, AlignmentDirection::HypToRef)
}

/// For every reference index, the hypothesis interval it owns (`None` against an empty
/// hypothesis).
pub fn align_ref_to_hyp<T: PartialEq>(reference: &[T], hypothesis: &[T]) -> Correspondence {
    align(reference, hypothesis, AlignmentDirection::RefToHyp)
}

/// Projects a hypothesis interval onto the reference using a table from `align_hyp_to_ref`.
pub fn interval_hyp_to_ref(
    correspondence: &Correspondence,
    hypothesis_interval: Interval,
) -> Result<Interval, Error> {
    project(
        correspondence,
        hypothesis_interval,
        AlignmentDirection::HypToRef,
    )
}

/// Projects a reference interval onto the hypothesis using a table from `align_ref_to_hyp`.
pub fn interval_ref_to_hyp(
    correspondence: &Correspondence,
    reference_interval: Interval,
) -> Result<Interval, Error> {
    project(
        correspondence,
        reference_interval,
        AlignmentDirection::RefToHyp,
    )
}

/// Projects sorted, non-overlapping hypothesis intervals onto the reference and brackets both
/// sequences with the default `"("` / `")"` markers.
///
/// `annotated_source` is the hypothesis, `annotated_target` the reference.
pub fn align_intervals_hyp_to_ref<T: PartialEq + Clone + MarkerToken>(
    hypothesis: &[T],
    reference: &[T],
    hypothesis_intervals: &[Interval],
) -> Result<AnnotatedAlignment<T>, Error> {
    align_intervals_hyp_to_ref_with_markers(
        hypothesis,
        reference,
        hypothesis_intervals,
        &Markers::default(),
    )
}

/// Same as `align_intervals_hyp_to_ref`, bracketing with the given `markers`.
pub fn align_intervals_hyp_to_ref_with_markers<T: PartialEq + Clone>(
    hypothesis: &[T],
    reference: &[T],
    hypothesis_intervals: &[Interval],
    markers: &Markers<T>,
) -> Result<AnnotatedAlignment<T>, Error> {
    align_intervals(
        hypothesis,
        reference,
        hypothesis_intervals,
        markers,
        AlignmentDirection::HypToRef,
    )
}

/// Projects sorted, non-overlapping reference intervals onto the hypothesis and brackets both
/// sequences with the default `"("` / `")"` markers.
///
/// `annotated_source` is the reference, `annotated_target` the hypothesis.
pub fn align_intervals_ref_to_hyp<T: PartialEq + Clone + MarkerToken>(
    reference: &[T],
    hypothesis: &[T],
    reference_intervals: &[Interval],
) -> Result<AnnotatedAlignment<T>, Error> {
    align_intervals_ref_to_hyp_with_markers(
        reference,
        hypothesis,
        reference_intervals,
        &Markers::default(),
    )
}

/// Same as `align_intervals_ref_to_hyp`, bracketing with the given `markers`.
pub fn align_intervals_ref_to_hyp_with_markers<T: PartialEq + Clone>(
    reference: &[T],
    hypothesis: &[T],
    reference_intervals: &[Interval],
    markers: &Markers<T>,
) -> Result<AnnotatedAlignment<T>, Error> {
    align_intervals(
        reference,
        hypothesis,
        reference_intervals,
        markers,
        AlignmentDirection::RefToHyp,
    )
}

fn align<T: PartialEq>(
    reference: &[T],
    hypothesis: &[T],
    direction: AlignmentDirection,
) -> Correspondence {
    let script = AlignmentScript::compute(reference, hypothesis);

    AlignmentBlocks::from_script(&script).correspondence(direction)
}

fn project(
    correspondence: &Correspondence,
    interval: Interval,
    expected: AlignmentDirection,
) -> Result<Interval, Error> {
    if correspondence.direction() != expected {
        return Err(Error::DirectionMismatch {
            expected,
            found: correspondence.direction(),
        });
    }

    correspondence.project(interval)
}

fn align_intervals<T: PartialEq + Clone>(
    source: &[T],
    target: &[T],
    source_intervals: &[Interval],
    markers: &Markers<T>,
    direction: AlignmentDirection,
) -> Result<AnnotatedAlignment<T>, Error> {
    validate_interval_batch(source_intervals, source.len())?;

    let correspondence = match direction {
        AlignmentDirection::HypToRef => align_hyp_to_ref(source, target),
        AlignmentDirection::RefToHyp => align_ref_to_hyp(source, target),
    };

    debug!(
        "Projecting {} intervals ({})",
        source_intervals.len(),
        direction
    );

    let projected_intervals = source_intervals
        .iter()
        .map(|&interval| correspondence.project(interval))
        .collect::<Result<Vec<Interval>, Error>>()?;

    let annotated_source = insert_markers(source, source_intervals, markers)?;
    let annotated_target = insert_markers(target, &projected_intervals, markers)?;

    Ok(AnnotatedAlignment {
        projected_intervals,
        annotated_source,
        annotated_target,
    })
}
