use crate::set::IntSet;

/// Computes `a ∪ b` by inserting every element of `b` into a copy of `a`.
pub fn compute_union(a: &IntSet, b: &IntSet) -> IntSet {
    debug_assert!(super::assertions::is_normalized(a));
    debug_assert!(super::assertions::is_normalized(b));

    let mut result = a.clone();
    result.add_intervals(b.iter().copied());
    result.optimize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::Interval;

    #[test]
    fn union_disjoint() {
        let a = IntSet::from(Interval::range(0, 50));
        let b = IntSet::from(Interval::range(100, 150));
        assert_eq!(compute_union(&a, &b).to_string(), "{0:50, 100:150}");
    }

    #[test]
    fn union_adjacent() {
        let a = IntSet::from(Interval::range(0, 50));
        let b = IntSet::from(Interval::range(51, 100));
        assert_eq!(compute_union(&a, &b).to_string(), "{0:100}");
    }

    #[test]
    fn union_with_itself() {
        let a = IntSet::from(vec![
            Interval::range(-400, -200),
            Interval::range(-199, -34),
            Interval::range(400, 420),
            Interval::range(50, 399),
            Interval::range(49, 101),
            Interval::pos_inf(500),
            Interval::neg_inf(-5000),
        ]);
        let u = compute_union(&a, &a);
        assert_eq!(u.to_string(), "{-∞:-5000, -400:-34, 49:420, 500:∞}");
        assert_eq!(u, a);
    }

    #[test]
    fn union_with_complement_is_full() {
        let a = IntSet::from(vec![
            Interval::neg_inf(-5000),
            Interval::range(-400, -34),
            Interval::range(49, 420),
            Interval::pos_inf(500),
        ]);
        assert_eq!(compute_union(&a, &a.complement()), IntSet::all());
    }

    #[test]
    fn union_bridging_elements_of_both_sides() {
        let a = IntSet::from(vec![Interval::range(0, 10), Interval::range(20, 30)]);
        let b = IntSet::from(vec![Interval::range(11, 19), Interval::range(31, 40)]);
        assert_eq!(compute_union(&a, &b).to_string(), "{0:40}");
    }
}
