//! Invariant checks for normalized interval sequences.

use crate::set::Interval;

/// Returns true if `intervals` is normalized: sorted by lower bound, with no
/// two neighbours overlapping or adjacent.
///
/// `Full` is adjacent to everything, so a sequence holding it passes only
/// when it has a single element.
pub fn is_normalized(intervals: &[Interval]) -> bool {
    intervals.windows(2).all(|w| {
        let prev = &w[0];
        let curr = &w[1];
        prev.upper() < curr.lower() && !prev.is_overlapping(curr) && !prev.is_adjacent(curr)
    })
}
