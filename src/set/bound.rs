//! Extended integer endpoints.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An interval endpoint: an integer or one of the symbols −∞ / +∞.
///
/// The derived ordering follows variant order, so
/// `NegInf < Finite(_) < PosInf` and finite bounds compare by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bound {
    NegInf,
    Finite(i64),
    PosInf,
}

impl Bound {
    pub const fn is_finite(&self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    /// Returns the integer value of a finite bound.
    pub const fn value(&self) -> Option<i64> {
        match self {
            Bound::Finite(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Bound::Finite(n)
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::NegInf => write!(f, "-∞"),
            Bound::Finite(n) => write!(f, "{}", n),
            Bound::PosInf => write!(f, "∞"),
        }
    }
}
