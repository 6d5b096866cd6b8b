use crate::set::IntSet;

/// Computes `a ∩ b` from the pairwise intersections of their elements.
///
/// Pairwise pieces of two normalized sets never overlap each other, but they
/// can be adjacent, so the result is re-normalized before returning.
pub fn compute_intersection(a: &IntSet, b: &IntSet) -> IntSet {
    debug_assert!(super::assertions::is_normalized(a));
    debug_assert!(super::assertions::is_normalized(b));

    if a.is_empty() || b.is_empty() {
        return IntSet::new();
    }

    let mut result = IntSet::new();
    for ia in a.iter() {
        for ib in b.iter() {
            if let Some(piece) = ia.intersect(ib) {
                result.insert(piece);
            }
        }
    }
    result.optimize();
    result
}
