//! Overflow-safe counting of set members.

use super::int_set::IntSet;
use super::interval::{Interval, Shape};
use crate::error::CardinalityError;

impl Interval {
    /// Number of integers in the interval.
    ///
    /// `hi.abs_diff(lo)` is computed in unsigned space, so ranges spanning
    /// zero never overflow a signed subtraction; only `[i64::MIN, i64::MAX]`
    /// itself, whose size is `2^64`, reports [`CardinalityError::Overflow`].
    pub fn count(&self) -> Result<u64, CardinalityError> {
        match self.shape() {
            Shape::Finite(lo, hi) => hi
                .abs_diff(lo)
                .checked_add(1)
                .ok_or(CardinalityError::Overflow),
            Shape::Full | Shape::RayDown(_) | Shape::RayUp(_) => Err(CardinalityError::Unbounded),
        }
    }
}

impl IntSet {
    /// Returns the number of integers in the set.
    ///
    /// An unbounded element takes precedence over arithmetic overflow, so a
    /// set with any ray reports [`CardinalityError::Unbounded`] even if its
    /// finite part would not fit in a `u64`.
    pub fn cardinality(&self) -> Result<u64, CardinalityError> {
        if self.iter().any(Interval::is_unbounded) {
            return Err(CardinalityError::Unbounded);
        }
        self.iter().try_fold(0u64, |total, interval| {
            total
                .checked_add(interval.count()?)
                .ok_or(CardinalityError::Overflow)
        })
    }
}
