use crate::set::IntSet;

/// Computes `a \ b` by removing every element of `b` from a copy of `a`.
pub fn compute_difference(a: &IntSet, b: &IntSet) -> IntSet {
    debug_assert!(super::assertions::is_normalized(a));
    debug_assert!(super::assertions::is_normalized(b));

    let mut result = a.clone();
    result.remove_intervals(b.iter().copied());
    result.optimize();
    result
}

/// Computes `(a ∪ b) \ (a ∩ b)`.
pub fn compute_symmetric_difference(a: &IntSet, b: &IntSet) -> IntSet {
    compute_difference(
        &super::compute_union(a, b),
        &super::compute_intersection(a, b),
    )
}
