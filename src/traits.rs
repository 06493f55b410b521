//! Trait implementations for `Set`.

use std::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::{
    Set,
    set::{IntoIter, Iter},
};

/// Errors that can occur when parsing the range text form of a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSetError {
    /// A bound is not a valid integer of the element type.
    InvalidNumber {
        /// The text that failed to parse
        text: String,
        /// Byte offset of the text in the input
        pos: usize,
    },

    /// A run whose lower bound is greater than its upper bound.
    ReversedRun {
        /// The offending entry
        entry: String,
        /// Byte offset of the entry in the input
        pos: usize,
    },
}

impl fmt::Display for ParseSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { text, pos } => {
                write!(f, "invalid integer '{text}' at position {pos}")
            }
            Self::ReversedRun { entry, pos } => {
                write!(
                    f,
                    "run '{entry}' at position {pos} has a lower bound greater than its upper bound"
                )
            }
        }
    }
}

impl std::error::Error for ParseSetError {}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.into_iter().collect()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Set Operator Implementations
// ============================================================================

impl<T: Hash + Eq + Clone> BitAnd for &Set<T> {
    type Output = Set<T>;

    /// Returns the intersection of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_set::set;
    ///
    /// let c = &set![0, 1] & &set![1, 2];
    /// assert_eq!(c, set![1]);
    /// ```
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq> BitAndAssign<&Self> for Set<T> {
    /// Keeps only the elements also present in `rhs`.
    #[inline]
    fn bitand_assign(&mut self, rhs: &Self) {
        self.intersection_with(rhs);
    }
}

impl<T: Hash + Eq + Clone> BitOr for &Set<T> {
    type Output = Set<T>;

    /// Returns the union of two sets as a fresh set.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_set::set;
    ///
    /// let c = &set![0, 1] | &set![1, 2];
    /// assert_eq!(c, set![0, 1, 2]);
    /// ```
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).into_owned()
    }
}

impl<T: Hash + Eq + Clone> BitOrAssign<&Self> for Set<T> {
    /// Adds every element of `rhs`.
    #[inline]
    fn bitor_assign(&mut self, rhs: &Self) {
        self.union_with(rhs);
    }
}

impl<T: Hash + Eq + Clone> Sub for &Set<T> {
    type Output = Set<T>;

    /// Returns the elements of `self` not in `rhs` as a fresh set.
    ///
    /// # Examples
    ///
    /// ```
    /// use smol_set::set;
    ///
    /// let c = &set![0, 1, 2] - &set![1];
    /// assert_eq!(c, set![0, 2]);
    /// ```
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs).into_owned()
    }
}

impl<T: Hash + Eq> SubAssign<&Self> for Set<T> {
    /// Removes every element of `rhs`.
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        self.minus_with(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set;

    #[test]
    fn test_debug_uses_set_notation() {
        assert_eq!(format!("{:?}", Set::<u8>::new()), "{}");
        assert_eq!(format!("{:?}", set![3]), "{3}");
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        assert_eq!(set![1, 2, 3], set![3, 1, 2]);
        assert_ne!(set![1, 2, 3], set![1, 2]);
        assert_eq!(Set::<u8>::default(), Set::new());
    }

    #[test]
    fn test_assign_operators() {
        let mut s = set![1, 2, 3];
        s |= &set![4];
        assert_eq!(s, set![1, 2, 3, 4]);
        s &= &set![2, 3, 4, 5];
        assert_eq!(s, set![2, 3, 4]);
        s -= &set![3];
        assert_eq!(s, set![2, 4]);
    }

    #[test]
    fn test_vec_conversions() {
        let s = Set::from(vec![5, 5, 6]);
        assert_eq!(s.len(), 2);

        let mut v: Vec<i32> = s.into();
        v.sort_unstable();
        assert_eq!(v, vec![5, 6]);
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseSetError::InvalidNumber {
            text: "x".into(),
            pos: 3,
        };
        assert_eq!(err.to_string(), "invalid integer 'x' at position 3");
    }
}
