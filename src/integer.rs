//! Integer element types usable with ranges.

use core::{fmt, hash::Hash, str::FromStr};

use crate::Set;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that can be the element of a [`Set::range`] or
/// be encoded with [`Set::ranges`].
///
/// This trait is sealed and implemented for every primitive integer type.
/// Each implementation owns one statically allocated empty set, which is
/// what [`Set::empty`] and empty [`Set::range`]s hand out.
pub trait Integer:
    Copy + Ord + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static + sealed::Sealed
{
    /// Returns `self + 1`, or `None` on overflow.
    fn successor(self) -> Option<Self>;

    /// Returns `high - self` as a `usize`, or `None` if it does not fit.
    ///
    /// `self` must not be greater than `high`.
    fn distance(self, high: Self) -> Option<usize>;

    /// Returns the shared empty set for this type.
    fn empty_set() -> &'static Set<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn distance(self, high: Self) -> Option<usize> {
                    usize::try_from(high.abs_diff(self)).ok()
                }

                fn empty_set() -> &'static Set<Self> {
                    static EMPTY: Set<$t> = Set::new();
                    &EMPTY
                }
            }
        )*
    };
}

impl_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
