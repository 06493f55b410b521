//! `Set` struct and core implementation.

use std::{
    borrow::{Borrow, Cow},
    collections::{HashSet, hash_set},
    hash::{BuildHasherDefault, DefaultHasher, Hash},
};

use crate::{Integer, Ranges, SetRange};

/// The hasher used by every [`Set`].
///
/// It is deterministic and can be built in a `const` context, which is what
/// allows the shared empty sets to be plain `static`s.
pub type SetHasher = BuildHasherDefault<DefaultHasher>;

/// An iterator over the elements of a [`Set`], in unspecified order.
pub type Iter<'a, T> = hash_set::Iter<'a, T>;

/// An owning iterator over the elements of a [`Set`], in unspecified order.
pub type IntoIter<T> = hash_set::IntoIter<T>;

/// An unordered collection of unique elements.
///
/// # Overview
///
/// `Set` is a thin wrapper around a hash set that provides the set algebra of
/// this crate: construction, predicates, and the set operations
/// ([`intersection`](Set::intersection), [`union`](Set::union) and so on).
/// Elements only need [`Hash`] and [`Eq`].
///
/// # Aliasing
///
/// Operations that can be no-ops ([`union`](Set::union),
/// [`minus`](Set::minus)) and [`Set::range`] for an empty range return a
/// [`Cow`]. A borrowed result points at one of the inputs or at the shared
/// empty set of the element type; it is never a copy.
///
/// # Examples
///
/// ```
/// use smol_set::{Set, set};
///
/// let mut s = Set::new();
/// s.insert("a");
/// s.insert("b");
/// s.insert("a");
///
/// assert_eq!(s.len(), 2);
/// assert!(s.contains("a"));
/// assert_eq!(s, set!["b", "a"]);
/// ```
#[derive(Clone)]
#[repr(transparent)]
pub struct Set<T> {
    pub(crate) inner: HashSet<T, SetHasher>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// This does not allocate and can be used to initialize a `static`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::Set;
    /// static NOTHING: Set<u8> = Set::new();
    /// assert!(NOTHING.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: HashSet::with_hasher(BuildHasherDefault::new()),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// assert!(Set::<u32>::new().is_empty());
    /// assert!(!set![1, 2, 3].is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set has exactly one element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// assert!(Set::singleton(7).is_singleton());
    /// assert!(!set![1, 2].is_singleton());
    /// assert!(!Set::<u32>::new().is_singleton());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.inner.len() == 1
    }

    /// Returns some element of the set, or `None` if the set is empty.
    ///
    /// No ordering is implied: the element returned is whichever one the
    /// underlying table yields first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// assert_eq!(Set::singleton(4).first(), Some(&4));
    /// assert!(set![1, 2].first().is_some());
    /// assert_eq!(Set::<u32>::new().first(), None);
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.inner.iter().next()
    }

    /// Returns an iterator over the elements, in unspecified order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Removes every element from the set.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, SetHasher::default()),
        }
    }

    /// Creates a set holding exactly `value`.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(value);
        set
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the value was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    /// Removes `value` from the set.
    ///
    /// Returns `true` if the value was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value)
    }

    /// Returns `true` if `value` is an element of the set.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// assert!(Set::new().is_subset_of(&set![6, 7, 8]));
    /// assert!(set![1, 2].is_subset_of(&set![1, 2, 3]));
    /// assert!(!set![1, 5].is_subset_of(&set![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.inner.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` and `other` have no element in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.inner.iter().any(|element| large.contains(element))
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// Equality is defined as
    ///
    /// ```text
    /// a.is_equal(b) == a.is_subset_of(b) && b.is_subset_of(a)
    /// ```
    ///
    /// with a cardinality check up front. This is also what `==` uses.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other) && other.is_subset_of(self)
    }

    /// Returns all elements as a vector.
    ///
    /// No assumption should be made on the order of the result.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Integer> Set<T> {
    /// Returns the shared empty set of this element type.
    ///
    /// Every call returns a reference to the same statically allocated set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::Set;
    /// assert!(core::ptr::eq(Set::<i64>::empty(), Set::<i64>::empty()));
    /// ```
    #[must_use]
    pub fn empty() -> &'static Self {
        T::empty_set()
    }

    /// Returns the set of integers `from..=to`.
    ///
    /// If `from > to` the shared empty set is returned, borrowed. Otherwise a
    /// fresh set is built; `from == to` gives a singleton.
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{Set, set};
    /// assert!(Set::range(1, 0).is_empty());
    /// assert_eq!(*Set::range(0, 0), set![0]);
    /// assert_eq!(*Set::range(1, 5), set![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn range(from: T, to: T) -> Cow<'static, Self> {
        if from > to {
            Cow::Borrowed(T::empty_set())
        } else if from == to {
            Cow::Owned(Self::singleton(from))
        } else {
            Cow::Owned(SetRange::Run(from, to).iter().collect())
        }
    }

    /// Encodes the set as sorted runs of consecutive integers.
    ///
    /// Runs of one or two integers are emitted as [`SetRange::Single`]
    /// entries, longer runs as a single [`SetRange::Run`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use smol_set::{SetRange, set};
    /// let s = set![10, 1, 2, 3, 6, 7];
    /// assert_eq!(
    ///     *s.ranges(),
    ///     [
    ///         SetRange::Run(1, 3),
    ///         SetRange::Single(6),
    ///         SetRange::Single(7),
    ///         SetRange::Single(10),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn ranges(&self) -> Ranges<T> {
        let mut sorted = self.to_vec();
        sorted.sort_unstable();
        Ranges::encode(&sorted)
    }

    /// Builds a set by expanding every range in `ranges`.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = SetRange<T>>,
    {
        let mut set = Self::new();
        for range in ranges {
            set.extend(range.iter());
        }
        set
    }
}
