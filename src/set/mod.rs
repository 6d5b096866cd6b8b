//! Intervals over the extended integers and the normalized sets built from them.
//!
//! [`Interval`] is the leaf value type: one convex piece of ℤ, possibly
//! unbounded. [`IntSet`] keeps an ascending, disjoint, non-adjacent list of
//! intervals and exposes the usual set algebra on top of it.

mod bound;
mod cardinality;
mod int_set;
mod interval;

pub use bound::Bound;
pub use int_set::IntSet;
pub use interval::{Interval, Pieces, Shape};
