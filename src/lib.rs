//! Set algebra over hash sets, with a compact range encoding for sets of
//! integers.
//!
//! This crate provides [`Set`], an unordered collection of unique elements,
//! together with the usual set operations (intersection, union, difference,
//! subset and equality checks) and a run-length style encoding of integer
//! sets into [`SetRange`]s.
//!
//! # Features
//!
//! - **Aliasing-aware operations**: [`Set::union`] and [`Set::minus`] return
//!   one of their inputs unchanged when the operation is a no-op, expressed
//!   as a borrowed [`Cow`](std::borrow::Cow)
//! - **Shared empty sets**: [`Set::range`] hands out a statically allocated
//!   empty set when the range is empty
//! - **Range encoding** of integer sets, with a text form (`1-3, 6, 7`) that
//!   parses back into a set
//! - **Serialization support** via serde and rkyv (optional)
//!
//! # Examples
//!
//! ```
//! use smol_set::{Set, SetRange, set};
//!
//! let a = Set::range(1, 5);
//! let b = Set::range(3, 8);
//!
//! assert_eq!(a.intersection(&b), set![3, 4, 5]);
//! assert_eq!(*a.minus(&b), set![1, 2]);
//! assert_eq!(*a.union(&b), Set::range(1, 8).into_owned());
//!
//! let s = set![1, 2, 3, 5, 6, 7, 9, 10];
//! assert_eq!(
//!     *s.ranges(),
//!     [
//!         SetRange::Run(1, 3),
//!         SetRange::Run(5, 7),
//!         SetRange::Single(9),
//!         SetRange::Single(10),
//!     ]
//! );
//! assert_eq!(s.ranges().to_string(), "1-3, 5-7, 9, 10");
//! ```
//!
//! # Aliasing
//!
//! Operations that may return one of their inputs do so through
//! [`Cow::Borrowed`](std::borrow::Cow::Borrowed); everything else returns a
//! fresh set. Call [`Cow::into_owned`](std::borrow::Cow::into_owned) when an
//! independent copy is needed.

#![warn(missing_docs)]

// Module declarations
mod integer;
mod macros;
mod range;
mod set;
mod set_ops;
pub mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use integer::Integer;
pub use range::{RangeIter, Ranges, SetRange};
pub use set::{IntoIter, Iter, Set, SetHasher};
pub use traits::ParseSetError;
