//! intset - set algebra over subsets of ℤ.
//!
//! Sets are built from single integers, finite ranges and rays reaching
//! −∞ or +∞, and support union, intersection, difference, symmetric
//! difference, complement, membership, subset tests and cardinality.
//!
//! ```rust
//! use intset::{IntSet, Interval};
//!
//! let a = IntSet::from(vec![
//!     Interval::range(-300, -30),
//!     Interval::neg_inf(-500),
//!     Interval::pos_inf(500),
//! ]);
//! let b = IntSet::from(Interval::range(-47, 23));
//!
//! assert_eq!(a.union(&b).to_string(), "{-∞:-500, -300:23, 500:∞}");
//! assert_eq!(a.intersection(&b).to_string(), "{-47:-30}");
//! assert_eq!(a.complement().to_string(), "{-499:-301, -29:499}");
//! assert_eq!(b.cardinality(), Ok(71));
//! ```

pub mod error;
pub mod operations;
pub mod parse;
pub mod set;

pub use error::{CardinalityError, ParseError};
pub use set::{Bound, IntSet, Interval, Shape};
