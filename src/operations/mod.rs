//! Set operations over normalized interval sets.
//!
//! Every binary operation decomposes into per-element [`Interval`](crate::set::Interval)
//! combinator calls, collects the pieces into a fresh set and re-normalizes it
//! with [`IntSet::optimize`](crate::set::IntSet::optimize). Complement is the
//! exception: it scans the gaps between elements directly.

mod complement;
mod difference;
mod intersection;
mod union;


pub use complement::compute_complement;
pub use difference::{compute_difference, compute_symmetric_difference};
pub use intersection::compute_intersection;
pub use union::compute_union;

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::set::Interval;

    pub fn is_normalized(_intervals: &[Interval]) -> bool {
        true
    }
}
