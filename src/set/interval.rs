//! Convex pieces of ℤ: finite ranges, rays and the full line.

use std::fmt::Display;

use smallvec::{smallvec, SmallVec};

use super::bound::Bound;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four shapes an [`Interval`] can take.
///
/// `Finite(lo, hi)` always satisfies `lo <= hi` once it is wrapped in an
/// [`Interval`]; converting a reversed pair swaps the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// All of ℤ.
    Full,
    /// `[lo, hi]`.
    Finite(i64, i64),
    /// `(−∞, hi]`.
    RayDown(i64),
    /// `[lo, +∞)`.
    RayUp(i64),
}

/// One convex, non-empty piece of ℤ.
///
/// Intervals are immutable values; every combinator returns new intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Shape", into = "Shape")
)]
pub struct Interval(Shape);

/// Pieces left over after subtracting one interval from another.
pub type Pieces = SmallVec<[Interval; 2]>;

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// The full line `(−∞, +∞)`.
    pub const ALL: Interval = Interval(Shape::Full);

    /// The single integer `n`.
    pub const fn int(n: i64) -> Self {
        Self(Shape::Finite(n, n))
    }

    /// The closed range between `a` and `b`, in either order.
    pub const fn range(a: i64, b: i64) -> Self {
        if b < a {
            Self(Shape::Finite(b, a))
        } else {
            Self(Shape::Finite(a, b))
        }
    }

    /// The ray `(−∞, n]`.
    pub const fn neg_inf(n: i64) -> Self {
        Self(Shape::RayDown(n))
    }

    /// The ray `[n, +∞)`.
    pub const fn pos_inf(n: i64) -> Self {
        Self(Shape::RayUp(n))
    }

    pub const fn all() -> Self {
        Self::ALL
    }

    /// Builds the interval spanning `[lower, upper]`, or `None` if that span is empty.
    pub fn from_bounds(lower: Bound, upper: Bound) -> Option<Self> {
        match (lower, upper) {
            (Bound::NegInf, Bound::PosInf) => Some(Self::ALL),
            (Bound::NegInf, Bound::Finite(hi)) => Some(Self::neg_inf(hi)),
            (Bound::Finite(lo), Bound::PosInf) => Some(Self::pos_inf(lo)),
            (Bound::Finite(lo), Bound::Finite(hi)) if lo <= hi => Some(Self::range(lo, hi)),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Accessors
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    pub const fn shape(&self) -> Shape {
        self.0
    }

    pub const fn is_full(&self) -> bool {
        matches!(self.0, Shape::Full)
    }

    /// True for `Full` and both ray shapes.
    pub const fn is_unbounded(&self) -> bool {
        !matches!(self.0, Shape::Finite(..))
    }

    pub const fn lower(&self) -> Bound {
        match self.0 {
            Shape::Full | Shape::RayDown(_) => Bound::NegInf,
            Shape::Finite(lo, _) | Shape::RayUp(lo) => Bound::Finite(lo),
        }
    }

    pub const fn upper(&self) -> Bound {
        match self.0 {
            Shape::Full | Shape::RayUp(_) => Bound::PosInf,
            Shape::Finite(_, hi) | Shape::RayDown(hi) => Bound::Finite(hi),
        }
    }

    /// Returns true if `n` lies inside this interval.
    pub fn contains(&self, n: i64) -> bool {
        match self.0 {
            Shape::Full => true,
            Shape::RayDown(hi) => n <= hi,
            Shape::RayUp(lo) => n >= lo,
            Shape::Finite(lo, hi) => lo <= n && n <= hi,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Relations
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// True if the two intervals share at least one integer.
    pub fn is_overlapping(&self, other: &Interval) -> bool {
        self.lower() <= other.upper() && other.lower() <= self.upper()
    }

    /// True if the intervals do not overlap but no integer lies between them.
    ///
    /// `Full` has no outside and counts as adjacent to everything.
    pub fn is_adjacent(&self, other: &Interval) -> bool {
        if self.is_full() || other.is_full() {
            return true;
        }
        if self.is_overlapping(other) {
            return false;
        }
        fn touches(upper: Bound, lower: Bound) -> bool {
            match (upper.value(), lower.value()) {
                (Some(hi), Some(lo)) => hi.checked_add(1) == Some(lo),
                _ => false,
            }
        }
        touches(self.upper(), other.lower()) || touches(other.upper(), self.lower())
    }

    /// True if every integer of `self` also lies in `other`.
    pub fn is_within(&self, other: &Interval) -> bool {
        other.lower() <= self.lower() && self.upper() <= other.upper()
    }

    /// True if `self` is a proper superset of `other`.
    pub fn is_super(&self, other: &Interval) -> bool {
        other.is_within(self) && self != other
    }
}

// ─────────────────────────────────────────────────────────────────────
// Combinators
// ─────────────────────────────────────────────────────────────────────

impl Interval {
    /// Returns the single interval spanning both operands.
    ///
    /// Only meaningful when the operands overlap or are adjacent; for
    /// separated operands the result also covers the gap between them.
    pub fn join(&self, other: &Interval) -> Interval {
        let lower = self.lower().min(other.lower());
        let upper = self.upper().max(other.upper());
        Self::from_bounds(lower, upper).unwrap_or_else(|| inconsistent("join", self, other))
    }

    /// Returns the intersection of both operands, if it is non-empty.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        if self == other || other.is_full() || other.is_super(self) {
            return Some(*self);
        }
        if self.is_super(other) {
            return Some(*other);
        }
        if !self.is_overlapping(other) {
            return None;
        }
        let lower = self.lower().max(other.lower());
        let upper = self.upper().min(other.upper());
        let overlap =
            Self::from_bounds(lower, upper).unwrap_or_else(|| inconsistent("intersect", self, other));
        Some(overlap)
    }

    /// Returns `self \ other` as zero, one or two intervals in ascending order.
    pub fn subtract(&self, other: &Interval) -> Pieces {
        if self == other || other.is_full() || other.is_super(self) {
            return Pieces::new();
        }
        if !self.is_overlapping(other) {
            return smallvec![*self];
        }

        use Shape::*;
        let pieces = match (self.0, other.0) {
            (Full, RayDown(y)) => [after(y), None],
            (Full, RayUp(x)) => [before(x), None],
            (Full, Finite(x, y)) => [before(x), after(y)],

            (RayDown(hi), RayDown(y)) if y < hi => [span(y + 1, hi), None],
            (RayDown(_), RayUp(x)) => [before(x), None],
            (RayDown(hi), Finite(x, y)) if y < hi => [before(x), span(y + 1, hi)],
            (RayDown(_), Finite(x, _)) => [before(x), None],

            (RayUp(lo), RayUp(x)) if lo < x => [span(lo, x - 1), None],
            (RayUp(_), RayDown(y)) => [after(y), None],
            (RayUp(lo), Finite(x, y)) if lo < x => [span(lo, x - 1), after(y)],
            (RayUp(_), Finite(_, y)) => [after(y), None],

            (Finite(_, hi), RayDown(y)) if y < hi => [span(y + 1, hi), None],
            (Finite(lo, _), RayUp(x)) if lo < x => [span(lo, x - 1), None],
            (Finite(lo, hi), Finite(x, y)) if lo < x && y < hi => {
                [span(lo, x - 1), span(y + 1, hi)]
            }
            (Finite(lo, hi), Finite(x, y)) if x <= lo && y < hi => [span(y + 1, hi), None],
            (Finite(lo, hi), Finite(x, y)) if lo < x && hi <= y => [span(lo, x - 1), None],

            _ => inconsistent("subtract", self, other),
        };
        pieces.into_iter().flatten().collect()
    }
}

/// `(−∞, x-1]`, empty when `x` is the smallest representable integer.
fn before(x: i64) -> Option<Interval> {
    x.checked_sub(1).map(Interval::neg_inf)
}

/// `[y+1, +∞)`, empty when `y` is the largest representable integer.
fn after(y: i64) -> Option<Interval> {
    y.checked_add(1).map(Interval::pos_inf)
}

fn span(lo: i64, hi: i64) -> Option<Interval> {
    (lo <= hi).then_some(Interval::range(lo, hi))
}

#[cold]
fn inconsistent(op: &str, a: &Interval, b: &Interval) -> ! {
    tracing::error!(op, %a, %b, "interval combinator reached an impossible operand combination");
    panic!("{op}: impossible operand combination {a} and {b}");
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Shape> for Interval {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Finite(a, b) => Self::range(a, b),
            other => Self(other),
        }
    }
}

impl From<Interval> for Shape {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

impl From<i64> for Interval {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Shape::Full => write!(f, "-∞:∞"),
            Shape::RayDown(hi) => write!(f, "-∞:{}", hi),
            Shape::RayUp(lo) => write!(f, "{}:∞", lo),
            Shape::Finite(lo, hi) if lo == hi => write!(f, "{}", lo),
            Shape::Finite(lo, hi) => write!(f, "{}:{}", lo, hi),
        }
    }
}
