use crate::models::{Error, Markers};
use crate::types::Interval;
use crate::utils::validate_interval;

/// Returns a copy of `tokens` with `markers.left` inserted immediately before the start of
/// each interval and `markers.right` immediately after its end.
///
/// Insertion points refer to positions in the original `tokens`, so earlier insertions never
/// shift later ones. Intervals sharing a start or end token get one marker each at that
/// position. Existing tokens are never altered.
///
/// ### Example:
/// ```rust
/// use edit_align::{insert_markers, Markers};
///
/// let tokens = vec!['a', 'a', 'b', 'b', 'a', 'a', 'c', 'c', 'a'];
/// let marked = insert_markers(&tokens, &[(2, 3), (6, 7)], &Markers::new('(', ')')).unwrap();
///
/// assert_eq!(
///     marked,
///     vec!['a', 'a', '(', 'b', 'b', ')', 'a', 'a', '(', 'c', 'c', ')', 'a']
/// );
/// ```
pub fn insert_markers<T: Clone>(
    tokens: &[T],
    intervals: &[Interval],
    markers: &Markers<T>,
) -> Result<Vec<T>, Error> {
    for &interval in intervals {
        validate_interval(interval, tokens.len())?;
    }

    let mut opening = vec![0usize; tokens.len()];
    let mut closing = vec![0usize; tokens.len()];

    for &(start, end) in intervals {
        opening[start] += 1;
        closing[end] += 1;
    }

    let mut marked = Vec::with_capacity(tokens.len() + 2 * intervals.len());

    for (idx, token) in tokens.iter().enumerate() {
        marked.extend(std::iter::repeat(markers.left.clone()).take(opening[idx]));
        marked.push(token.clone());
        marked.extend(std::iter::repeat(markers.right.clone()).take(closing[idx]));
    }

    Ok(marked)
}
