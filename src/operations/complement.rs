use crate::set::{Bound, IntSet, Interval};

/// Returns `ℤ \ set` by emitting the gaps between consecutive elements plus
/// the outer rays.
///
/// `cursor` holds the lower bound of the gap currently being scanned, or
/// `None` once an element reached `+∞` (or the largest representable integer).
pub fn compute_complement(set: &IntSet) -> IntSet {
    debug_assert!(super::assertions::is_normalized(set));

    let mut gaps = Vec::with_capacity(set.len() + 1);
    let mut cursor = Some(Bound::NegInf);
    for element in set.iter() {
        let Some(start) = cursor else { break };
        if let Some(end) = element.lower().value().and_then(|lo| lo.checked_sub(1)) {
            gaps.extend(Interval::from_bounds(start, Bound::Finite(end)));
        }
        cursor = element
            .upper()
            .value()
            .and_then(|hi| hi.checked_add(1))
            .map(Bound::Finite);
    }
    if let Some(start) = cursor {
        gaps.extend(Interval::from_bounds(start, Bound::PosInf));
    }

    IntSet::from_sorted_unchecked(gaps)
}
