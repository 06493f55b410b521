//! Implementations of set operations for `Set`.

use std::{borrow::Cow, hash::Hash};

use crate::{Set, macros::trace};

impl<T: Hash + Eq> Set<T> {
    /// Adds every element of `other` to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::set;
    /// let mut a = set![10];
    /// a.union_with(&set![20]);
    /// assert_eq!(a, set![10, 20]);
    /// ```
    pub fn union_with(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.inner.extend(other.iter().cloned());
    }

    /// Keeps only the elements of `self` that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::set;
    /// let mut a = set![10, 20];
    /// a.intersection_with(&set![10]);
    /// assert_eq!(a, set![10]);
    /// ```
    pub fn intersection_with(&mut self, other: &Self) {
        self.inner.retain(|element| other.contains(element));
    }

    /// Removes every element of `other` from `self`.
    pub fn minus_with(&mut self, other: &Self) {
        if other.len() < self.len() {
            for element in other {
                self.inner.remove(element);
            }
        } else {
            self.inner.retain(|element| !other.contains(element));
        }
    }

    /// Creates a new set that is the intersection of this set and another
    /// set.
    ///
    /// The intersection contains only elements present in both sets, and is
    /// empty if either set is.
    ///
    /// Time complexity: O(n) where n is the size of the smaller set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// let a = Set::range(1, 5);
    /// assert_eq!(a.intersection(&Set::range(5, 8)), set![5]);
    /// assert!(a.intersection(&Set::range(6, 8)).is_empty());
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter(|element| large.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements of `self` that are not in `extract`.
    ///
    /// When the two sets are disjoint nothing would be removed, and `self`
    /// itself is returned borrowed rather than copied. Otherwise a fresh set
    /// is built.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::borrow::Cow;
    /// # use smol_set::{Set, set};
    /// let a = Set::range(1, 5);
    /// assert_eq!(*a.minus(&Set::range(3, 8)), set![1, 2]);
    ///
    /// let unchanged = a.minus(&Set::range(6, 8));
    /// assert!(matches!(unchanged, Cow::Borrowed(s) if std::ptr::eq(s, &*a)));
    /// ```
    #[must_use]
    pub fn minus<'a>(&'a self, extract: &Self) -> Cow<'a, Self>
    where
        T: Clone,
    {
        if self.is_disjoint(extract) {
            trace!(len = self.len(), "minus is a no-op, returning source");
            return Cow::Borrowed(self);
        }

        Cow::Owned(
            self.iter()
                .filter(|element| !extract.contains(*element))
                .cloned()
                .collect(),
        )
    }

    /// Returns a set of all the elements in `self` combined with all the
    /// elements in `other`.
    ///
    /// If one set is a subset of the other, the larger one is returned
    /// borrowed: `other` when `self ⊆ other`, else `self` when
    /// `other ⊆ self`. Only when neither contains the other is a fresh set
    /// built.
    ///
    /// Time complexity: O(n + m).
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::borrow::Cow;
    /// # use smol_set::{Set, set};
    /// let a = Set::range(1, 5);
    /// let b = Set::range(7, 8);
    /// assert_eq!(*a.union(&b), set![1, 2, 3, 4, 5, 7, 8]);
    ///
    /// let wide = Set::range(1, 8);
    /// assert!(matches!(a.union(&wide), Cow::Borrowed(s) if std::ptr::eq(s, &*wide)));
    /// ```
    #[must_use]
    pub fn union<'a>(&'a self, other: &'a Self) -> Cow<'a, Self>
    where
        T: Clone,
    {
        if self.is_subset_of(other) {
            trace!(len = other.len(), "union short-circuit, returning right operand");
            Cow::Borrowed(other)
        } else if other.is_subset_of(self) {
            trace!(len = self.len(), "union short-circuit, returning left operand");
            Cow::Borrowed(self)
        } else {
            let mut result = self.clone();
            result.union_with(other);
            Cow::Owned(result)
        }
    }

    /// Returns a new set holding the elements for which `predicate` returns
    /// `true`.
    ///
    /// The predicate is called once per element, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// let s = Set::range(1, 5).filter(|e| *e < 5);
    /// assert_eq!(s, set![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }
}
