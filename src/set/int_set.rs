//! A normalized set of integers built from [`Interval`]s.
//!
//! [`IntSet`] wraps a `Vec<Interval>` and keeps it **normalized** after every
//! public operation: elements are sorted ascending by lower bound, and no two
//! elements overlap or are adjacent (fencepost neighbours are merged). A set
//! holding `Full` holds nothing else. The empty vector is the empty set.
//!
//! Read access is transparent via `Deref<Target = [Interval]>`. Mutation goes
//! through [`IntSet::insert`] and [`IntSet::remove`], which re-establish the
//! invariant.

use std::fmt::Display;
use std::ops::{BitAnd, BitOr, BitXor, Deref, Not, Sub};

use super::interval::Interval;

/// A subset of ℤ stored as a minimal ascending list of intervals.
///
/// Two sets are equal exactly when their element lists are equal, because
/// the normalized form of a subset is unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSet(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl IntSet {
    /// Creates the empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates the set `ℤ`.
    pub fn all() -> Self {
        Self(vec![Interval::ALL])
    }

    /// Wraps a `Vec` that is **already normalized** without re-inserting.
    ///
    /// In debug builds this asserts the invariant.
    pub fn from_sorted_unchecked(vec: Vec<Interval>) -> Self {
        debug_assert!(
            crate::operations::assertions::is_normalized(&vec),
            "IntSet::from_sorted_unchecked called with non-normalized input"
        );
        Self(vec)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Maintenance
// ─────────────────────────────────────────────────────────────────────

impl IntSet {
    /// Inserts an interval in a single ascending pass.
    ///
    /// The first element overlapping or adjacent to `interval` is replaced by
    /// their join; otherwise `interval` is spliced in before the first element
    /// with a greater lower bound. After that point every following element
    /// is merged into its predecessor while the two still touch.
    pub fn insert(&mut self, interval: Interval) {
        if self.0.is_empty() {
            self.0.push(interval);
            return;
        }
        if self.0[0].is_full() {
            return;
        }

        let mut merged: Vec<Interval> = Vec::with_capacity(self.0.len() + 1);
        let mut inserted = false;
        for element in self.0.drain(..) {
            if inserted {
                if let Some(prev) = merged.last_mut() {
                    if prev.is_overlapping(&element) || prev.is_adjacent(&element) {
                        *prev = prev.join(&element);
                        continue;
                    }
                }
            } else if element.is_overlapping(&interval) || element.is_adjacent(&interval) {
                merged.push(element.join(&interval));
                inserted = true;
                continue;
            } else if interval.lower() < element.lower() {
                merged.push(interval);
                inserted = true;
            }
            merged.push(element);
        }
        if !inserted {
            merged.push(interval);
        }
        self.0 = merged;
    }

    /// Removes every integer of `interval` from the set.
    ///
    /// Subtraction never creates new overlaps or adjacencies, so the result
    /// stays normalized without a merge pass.
    pub fn remove(&mut self, interval: Interval) {
        self.0 = self
            .0
            .iter()
            .flat_map(|element| element.subtract(&interval))
            .collect();
    }

    /// Rebuilds the set by re-inserting every element until a rebuild changes
    /// nothing.
    pub fn optimize(&mut self) {
        let mut passes = 0usize;
        loop {
            passes += 1;
            let mut rebuilt = IntSet::new();
            for interval in &self.0 {
                rebuilt.insert(*interval);
            }
            tracing::trace!(
                pass = passes,
                before = self.0.len(),
                after = rebuilt.len(),
                "optimize pass"
            );
            if rebuilt == *self {
                break;
            }
            *self = rebuilt;
        }
        if passes > 1 {
            tracing::debug!(passes, len = self.0.len(), "optimize re-merged set");
        }
    }

    /// Adds each integer in `numbers`.
    pub fn add_ints(&mut self, numbers: &[i64]) {
        for &n in numbers {
            self.insert(Interval::int(n));
        }
    }

    /// Removes each integer in `numbers`.
    pub fn remove_ints(&mut self, numbers: &[i64]) {
        for &n in numbers {
            self.remove(Interval::int(n));
        }
    }

    /// Adds the ray `[n, +∞)`.
    pub fn add_pos_inf(&mut self, n: i64) {
        self.insert(Interval::pos_inf(n));
    }

    /// Adds the ray `(−∞, n]`.
    pub fn add_neg_inf(&mut self, n: i64) {
        self.insert(Interval::neg_inf(n));
    }

    pub fn add_intervals<I: IntoIterator<Item = Interval>>(&mut self, intervals: I) {
        for interval in intervals {
            self.insert(interval);
        }
    }

    pub fn remove_intervals<I: IntoIterator<Item = Interval>>(&mut self, intervals: I) {
        for interval in intervals {
            self.remove(interval);
        }
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl IntSet {
    /// Returns true if `n` is a member of the set.
    pub fn contains(&self, n: i64) -> bool {
        self.0.iter().any(|interval| interval.contains(n))
    }

    /// Returns true if `self ⊆ other`.
    pub fn is_subset_of(&self, other: &IntSet) -> bool {
        self.union(other) == *other
    }

    /// Returns true if `self ⊊ other`.
    pub fn is_proper_subset_of(&self, other: &IntSet) -> bool {
        self.is_subset_of(other) && self != other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Set operations
// ─────────────────────────────────────────────────────────────────────

impl IntSet {
    /// Returns `self ∪ other`.
    pub fn union(&self, other: &IntSet) -> IntSet {
        crate::operations::compute_union(self, other)
    }

    /// Returns `self ∩ other`.
    pub fn intersection(&self, other: &IntSet) -> IntSet {
        crate::operations::compute_intersection(self, other)
    }

    /// Returns `self \ other`.
    pub fn difference(&self, other: &IntSet) -> IntSet {
        crate::operations::compute_difference(self, other)
    }

    /// Returns `(self ∪ other) \ (self ∩ other)`.
    pub fn symmetric_difference(&self, other: &IntSet) -> IntSet {
        crate::operations::compute_symmetric_difference(self, other)
    }

    /// Returns `ℤ \ self`.
    pub fn complement(&self) -> IntSet {
        crate::operations::compute_complement(self)
    }
}

impl BitOr for &IntSet {
    type Output = IntSet;

    fn bitor(self, rhs: Self) -> IntSet {
        self.union(rhs)
    }
}

impl BitAnd for &IntSet {
    type Output = IntSet;

    fn bitand(self, rhs: Self) -> IntSet {
        self.intersection(rhs)
    }
}

impl Sub for &IntSet {
    type Output = IntSet;

    fn sub(self, rhs: Self) -> IntSet {
        self.difference(rhs)
    }
}

impl BitXor for &IntSet {
    type Output = IntSet;

    fn bitxor(self, rhs: Self) -> IntSet {
        self.symmetric_difference(rhs)
    }
}

impl Not for &IntSet {
    type Output = IntSet;

    fn not(self) -> IntSet {
        self.complement()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for IntSet {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl AsRef<[Interval]> for IntSet {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Interval>> for IntSet {
    /// Builds a set by inserting each interval in turn.
    fn from(vec: Vec<Interval>) -> Self {
        vec.into_iter().collect()
    }
}

impl From<Interval> for IntSet {
    fn from(interval: Interval) -> Self {
        Self(vec![interval])
    }
}

impl FromIterator<Interval> for IntSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = IntSet::new();
        set.add_intervals(iter);
        set
    }
}

impl Extend<Interval> for IntSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.add_intervals(iter);
    }
}

impl IntoIterator for IntSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Enables `assert_eq!(set, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntSet {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

impl Display for IntSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "{{∅}}");
        }
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for IntSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(vec))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: i64, b: i64) -> Interval {
        Interval::range(a, b)
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let set = IntSet::new();
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "{∅}");
    }

    #[test]
    fn default_is_empty() {
        assert!(IntSet::default().is_empty());
    }

    #[test]
    fn all_renders_full_line() {
        assert_eq!(IntSet::all().to_string(), "{-∞:∞}");
    }

    #[test]
    fn single_rays() {
        assert_eq!(IntSet::from(Interval::pos_inf(-4)).to_string(), "{-4:∞}");
        assert_eq!(IntSet::from(Interval::neg_inf(4)).to_string(), "{-∞:4}");
    }

    #[test]
    fn from_unsorted_ranges_sorts() {
        let set = IntSet::from(vec![
            iv(-400, -200),
            iv(-150, -34),
            iv(400, 420),
            iv(50, 64),
            iv(90, 100),
            Interval::pos_inf(500),
        ]);
        assert_eq!(
            set.to_string(),
            "{-400:-200, -150:-34, 50:64, 90:100, 400:420, 500:∞}"
        );
    }

    #[test]
    fn from_overlapping_and_adjacent_merges() {
        let set = IntSet::from(vec![
            iv(-400, -200),
            iv(-199, -34),
            iv(400, 420),
            iv(50, 399),
            iv(49, 101),
            Interval::pos_inf(500),
            Interval::neg_inf(-5000),
        ]);
        assert_eq!(set.to_string(), "{-∞:-5000, -400:-34, 49:420, 500:∞}");
    }

    #[test]
    fn from_iterator() {
        let set: IntSet = vec![iv(20, 30), iv(0, 10)].into_iter().collect();
        assert_eq!(set, vec![iv(0, 10), iv(20, 30)]);
    }

    // ── Insert ────────────────────────────────────────────────────────

    #[test]
    fn insert_fencepost_merges() {
        let mut set = IntSet::from(iv(0, 4));
        set.insert(iv(5, 9));
        assert_eq!(set, vec![iv(0, 9)]);
    }

    #[test]
    fn insert_before_existing() {
        let mut set = IntSet::from(iv(50, 100));
        set.insert(iv(0, 30));
        assert_eq!(set, vec![iv(0, 30), iv(50, 100)]);
    }

    #[test]
    fn insert_bridging_several_elements_merges_all() {
        let mut set = IntSet::from(vec![iv(0, 10), iv(20, 30), iv(40, 50), iv(70, 80)]);
        set.insert(iv(5, 45));
        assert_eq!(set, vec![iv(0, 50), iv(70, 80)]);
    }

    #[test]
    fn insert_full_absorbs_everything() {
        let mut set = IntSet::from(vec![iv(0, 10), Interval::pos_inf(20)]);
        set.insert(Interval::ALL);
        assert_eq!(set, vec![Interval::ALL]);
        set.insert(iv(3, 4));
        assert_eq!(set, vec![Interval::ALL]);
    }

    #[test]
    fn insert_rays_closing_the_line() {
        let mut set = IntSet::new();
        set.add_neg_inf(4);
        set.add_pos_inf(5);
        assert_eq!(set, vec![Interval::ALL]);
    }

    #[test]
    fn add_ints_collapses_runs() {
        let mut set = IntSet::new();
        set.add_ints(&[3, 1, 2, 7, 5]);
        assert_eq!(set.to_string(), "{1:3, 5, 7}");
    }

    // ── Remove ────────────────────────────────────────────────────────

    #[test]
    fn remove_rays_from_full() {
        let mut set = IntSet::all();
        set.remove_intervals([Interval::pos_inf(5000), Interval::neg_inf(-5000)]);
        assert_eq!(set.to_string(), "{-4999:4999}");
    }

    #[test]
    fn remove_ints_punches_holes() {
        let mut set = IntSet::all();
        set.remove_intervals([Interval::pos_inf(500), Interval::neg_inf(-500)]);
        set.remove_ints(&[12, 14, 16]);
        assert_eq!(set.to_string(), "{-499:11, 13, 15, 17:499}");
    }

    #[test]
    fn remove_everything() {
        let mut set = IntSet::from(vec![iv(0, 3), iv(8, 9)]);
        set.remove(iv(-10, 10));
        assert!(set.is_empty());
    }

    // ── Optimize ──────────────────────────────────────────────────────

    #[test]
    fn optimize_is_noop_on_normalized_set() {
        let mut set = IntSet::from(vec![iv(0, 3), iv(8, 9), Interval::pos_inf(20)]);
        let before = set.clone();
        set.optimize();
        assert_eq!(set, before);
    }

    // ── Queries ───────────────────────────────────────────────────────

    #[test]
    fn contains_checks_every_element() {
        let set = IntSet::from(vec![Interval::neg_inf(-100), iv(-10, 10), Interval::pos_inf(100)]);
        assert!(set.contains(-1000));
        assert!(set.contains(0));
        assert!(set.contains(100));
        assert!(!set.contains(50));
        assert!(!IntSet::new().contains(0));
    }

    #[test]
    fn subset_relations() {
        let small = IntSet::from(iv(2, 4));
        let big = IntSet::from(vec![iv(0, 5), iv(9, 9)]);
        assert!(small.is_subset_of(&big));
        assert!(small.is_proper_subset_of(&big));
        assert!(big.is_subset_of(&big));
        assert!(!big.is_proper_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(IntSet::new().is_proper_subset_of(&small));
    }

    // ── Operators ─────────────────────────────────────────────────────

    #[test]
    fn operators_delegate_to_set_operations() {
        let a = IntSet::from(vec![iv(-10, -5), iv(5, 10), Interval::pos_inf(25)]);
        let b = IntSet::from(vec![iv(-8, -3), iv(2, 6)]);
        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a & &b, a.intersection(&b));
        assert_eq!(&a - &b, a.difference(&b));
        assert_eq!(&a ^ &b, a.symmetric_difference(&b));
        assert_eq!(!&a, a.complement());
    }

    // ── Iterators ─────────────────────────────────────────────────────

    #[test]
    fn into_iter_owned_and_borrowed() {
        let set = IntSet::from(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!((&set).into_iter().count(), 2);
        let collected: Vec<_> = set.into_iter().collect();
        assert_eq!(collected, vec![iv(0, 10), iv(20, 30)]);
    }

    // ── Serde ─────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serialize_deserialize_roundtrip() {
            let set = IntSet::from(vec![Interval::neg_inf(-3), iv(0, 4), Interval::pos_inf(9)]);
            let json = serde_json::to_string(&set).unwrap();
            let restored: IntSet = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, set);
        }

        #[test]
        fn json_format() {
            let set = IntSet::from(vec![iv(1, 3), Interval::pos_inf(9)]);
            let json = serde_json::to_string(&set).unwrap();
            assert_eq!(json, r#"[{"Finite":[1,3]},{"RayUp":9}]"#);
            let full = serde_json::to_string(&IntSet::all()).unwrap();
            assert_eq!(full, r#"["Full"]"#);
        }

        #[test]
        fn deserialize_normalizes() {
            let json = r#"[{"Finite":[5,9]},{"Finite":[4,0]},{"RayDown":-10}]"#;
            let set: IntSet = serde_json::from_str(json).unwrap();
            assert_eq!(set.to_string(), "{-∞:-10, 0:9}");
        }
    }
}
