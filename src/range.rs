//! Compact range encoding of integer sets.
//!
//! The set `{1, 2, 3, 6, 7, 10, 11, 12}` can be written as
//!
//! ```text
//! 1-3, 6, 7, 10-12
//! ```
//!
//! and is encoded as a sequence of [`SetRange`] entries:
//!
//! ```text
//! [Run(1, 3), Single(6), Single(7), Run(10, 12)]
//! ```

use core::{fmt, iter::FusedIterator, ops::Deref, str::FromStr};

use crate::{Integer, Set, macros::trace, traits::ParseSetError};

/// One entry of a [`Ranges`] encoding.
///
/// With the `serde` feature, a `Single(n)` serializes as `n` and a
/// `Run(low, high)` as the pair `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum SetRange<T> {
    /// A single integer.
    Single(T),
    /// The inclusive run `low..=high`.
    Run(T, T),
}

impl<T: Integer> SetRange<T> {
    /// Returns the smallest integer covered by this entry.
    #[must_use]
    pub fn low(&self) -> T {
        match *self {
            Self::Single(n) | Self::Run(n, _) => n,
        }
    }

    /// Returns the largest integer covered by this entry.
    #[must_use]
    pub fn high(&self) -> T {
        match *self {
            Self::Single(n) | Self::Run(_, n) => n,
        }
    }

    /// Returns `true` if `n` lies within this entry.
    #[must_use]
    pub fn contains(&self, n: T) -> bool {
        self.low() <= n && n <= self.high()
    }

    /// Returns an iterator over every integer covered by this entry, in
    /// ascending order.
    ///
    /// A `Run` whose `low` is greater than its `high` covers nothing.
    pub fn iter(&self) -> RangeIter<T> {
        RangeIter {
            next: Some(self.low()),
            high: self.high(),
        }
    }
}

impl<T: Integer> IntoIterator for SetRange<T> {
    type Item = T;
    type IntoIter = RangeIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Integer> fmt::Display for SetRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Run(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

/// An iterator over the integers covered by a [`SetRange`].
///
/// Created by [`SetRange::iter`]. Stops at the upper bound without
/// overflowing, even when it is the type's maximum.
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    next: Option<T>,
    high: T,
}

impl<T: Integer> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let n = self.next.filter(|n| *n <= self.high)?;
        self.next = if n == self.high { None } else { n.successor() };
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(n) = self.next.filter(|n| *n <= self.high) else {
            return (0, Some(0));
        };
        match n.distance(self.high).and_then(|d| d.checked_add(1)) {
            Some(len) => (len, Some(len)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Integer> FusedIterator for RangeIter<T> {}

/// The range encoding of an integer set, in ascending order.
///
/// Produced by [`Set::ranges`]. Dereferences to a slice of [`SetRange`]s,
/// displays as `1-3, 6, 7, 10-12`, and parses back from that form.
///
/// # Examples
///
/// ```
/// use smol_set::{Ranges, Set, set};
///
/// let ranges: Ranges<u32> = "1-3, 6, 7, 10-12".parse().unwrap();
/// assert_eq!(ranges.len(), 4);
/// assert_eq!(ranges.to_set(), set![1, 2, 3, 6, 7, 10, 11, 12]);
/// assert_eq!(ranges.to_set().ranges(), ranges);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranges<T>(Vec<SetRange<T>>);

impl<T: Integer> Ranges<T> {
    /// Encodes a sorted, duplicate-free slice of integers.
    pub(crate) fn encode(sorted: &[T]) -> Self {
        let mut ranges = Vec::new();
        for run in sorted.chunk_by(|a, b| a.successor() == Some(*b)) {
            match *run {
                [] => {}
                [n] => ranges.push(SetRange::Single(n)),
                [low, high] => {
                    ranges.push(SetRange::Single(low));
                    ranges.push(SetRange::Single(high));
                }
                [low, .., high] => ranges.push(SetRange::Run(low, high)),
            }
        }
        Self(ranges)
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[SetRange<T>] {
        &self.0
    }

    /// Consumes the encoding and returns its entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<SetRange<T>> {
        self.0
    }

    /// Expands the encoding back into a set.
    #[must_use]
    pub fn to_set(&self) -> Set<T> {
        Set::from_ranges(self.0.iter().copied())
    }

    /// Returns the first entry whose `low` is greater than its `high`, if any.
    pub(crate) fn find_reversed(&self) -> Option<&SetRange<T>> {
        self.0.iter().find(|range| range.low() > range.high())
    }
}

impl<T> Deref for Ranges<T> {
    type Target = [SetRange<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<SetRange<T>>> for Ranges<T> {
    fn from(ranges: Vec<SetRange<T>>) -> Self {
        Self(ranges)
    }
}

impl<T> From<Ranges<T>> for Vec<SetRange<T>> {
    fn from(ranges: Ranges<T>) -> Self {
        ranges.0
    }
}

impl<T> FromIterator<SetRange<T>> for Ranges<T> {
    fn from_iter<I: IntoIterator<Item = SetRange<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Ranges<T> {
    type Item = SetRange<T>;
    type IntoIter = std::vec::IntoIter<SetRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ranges<T> {
    type Item = &'a SetRange<T>;
    type IntoIter = core::slice::Iter<'a, SetRange<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Integer> fmt::Display for Ranges<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl<T: Integer> FromStr for Ranges<T> {
    type Err = ParseSetError;

    /// Parses entries of the form `n` or `low-high`, separated by commas.
    ///
    /// Whitespace around entries is ignored and an empty (or blank) string
    /// is the empty encoding. The range separator is the first `-` after the
    /// first character, so negative bounds such as `-5--3` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self(Vec::new()));
        }

        let mut ranges = Vec::new();
        let mut offset = 0;
        for raw in s.split(',') {
            let entry = raw.trim();
            let pos = offset + (raw.len() - raw.trim_start().len());
            offset += raw.len() + 1;
            ranges.push(parse_entry(entry, pos)?);
        }
        Ok(Self(ranges))
    }
}

fn parse_entry<T: Integer>(entry: &str, pos: usize) -> Result<SetRange<T>, ParseSetError> {
    let number = |text: &str, at: usize| {
        let at = at + (text.len() - text.trim_start().len());
        let text = text.trim();
        text.parse::<T>().map_err(|_| {
            trace!(text, pos = at, "rejected range entry");
            ParseSetError::InvalidNumber {
                text: text.into(),
                pos: at,
            }
        })
    };

    match entry.get(1..).and_then(|rest| rest.find('-')) {
        None => number(entry, pos).map(SetRange::Single),
        Some(i) => {
            let low = number(&entry[..=i], pos)?;
            let high = number(&entry[i + 2..], pos + i + 2)?;
            if low > high {
                trace!(entry, pos, "rejected reversed run");
                return Err(ParseSetError::ReversedRun {
                    entry: entry.into(),
                    pos,
                });
            }
            Ok(SetRange::Run(low, high))
        }
    }
}

impl<T: Integer> FromStr for Set<T> {
    type Err = ParseSetError;

    /// Parses a set from its range text form, e.g. `1-3, 6, 7, 10-12`.
    ///
    /// Runs are expanded element by element, so the cost in time and memory
    /// grows with the size of the resulting set rather than the length of
    /// the text: `0-20000000` is eleven bytes and twenty million elements.
    /// Parse into [`Ranges`] first to inspect the runs of untrusted input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ranges<T>>().map(|ranges| ranges.to_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set;

    #[test]
    fn test_encode_run_lengths() {
        assert!(Ranges::<u8>::encode(&[]).is_empty());
        assert_eq!(*Ranges::encode(&[4u8]), [SetRange::Single(4)]);
        assert_eq!(
            *Ranges::encode(&[4u8, 5]),
            [SetRange::Single(4), SetRange::Single(5)]
        );
        assert_eq!(*Ranges::encode(&[4u8, 5, 6]), [SetRange::Run(4, 6)]);
    }

    #[test]
    fn test_encode_at_type_bounds() {
        let ranges = Ranges::encode(&[253u8, 254, 255]);
        assert_eq!(*ranges, [SetRange::Run(253, 255)]);
        assert_eq!(ranges.to_set(), set![253u8, 254, 255]);
    }

    #[test]
    fn test_range_iter() {
        assert_eq!(SetRange::Single(3).iter().collect::<Vec<_>>(), vec![3]);
        assert_eq!(
            SetRange::Run(-1, 2).iter().collect::<Vec<i32>>(),
            vec![-1, 0, 1, 2]
        );
        assert_eq!(SetRange::Run(5, 2).iter().count(), 0);
        assert_eq!(SetRange::Run(i8::MAX - 1, i8::MAX).iter().count(), 2);
    }

    #[test]
    fn test_range_iter_size_hint() {
        let mut it = SetRange::Run(1u8, 5).iter();
        assert_eq!(it.size_hint(), (5, Some(5)));
        it.next();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.by_ref().count(), 4);
        assert_eq!(it.size_hint(), (0, Some(0)));

        assert_eq!(SetRange::Single(-7i64).iter().size_hint(), (1, Some(1)));
        assert_eq!(SetRange::Run(5, 2).iter().size_hint(), (0, Some(0)));
        assert_eq!(
            SetRange::Run(u8::MIN, u8::MAX).iter().size_hint(),
            (256, Some(256))
        );
        assert_eq!(
            SetRange::Run(i8::MIN, i8::MAX).iter().size_hint(),
            (256, Some(256))
        );
        assert_eq!(
            SetRange::Run(0u128, u128::MAX).iter().size_hint(),
            (usize::MAX, None)
        );
    }

    #[test]
    fn test_bounds_and_contains() {
        let run = SetRange::Run(10, 12);
        assert_eq!(run.low(), 10);
        assert_eq!(run.high(), 12);
        assert!(run.contains(11));
        assert!(!run.contains(13));
        assert!(SetRange::Single(7).contains(7));
    }

    #[test]
    fn test_parse_offsets() {
        let err = "1, x, 3".parse::<Ranges<u32>>().unwrap_err();
        assert_eq!(
            err,
            ParseSetError::InvalidNumber {
                text: "x".into(),
                pos: 3
            }
        );

        let err = "1-3,  9-4".parse::<Ranges<u32>>().unwrap_err();
        assert_eq!(
            err,
            ParseSetError::ReversedRun {
                entry: "9-4".into(),
                pos: 6
            }
        );

        let err = "1-z".parse::<Ranges<u32>>().unwrap_err();
        assert_eq!(
            err,
            ParseSetError::InvalidNumber {
                text: "z".into(),
                pos: 2
            }
        );

        let err = "1 - z".parse::<Ranges<u32>>().unwrap_err();
        assert_eq!(
            err,
            ParseSetError::InvalidNumber {
                text: "z".into(),
                pos: 4
            }
        );

        let err = "7,  2 -  q".parse::<Set<u32>>().unwrap_err();
        assert_eq!(
            err,
            ParseSetError::InvalidNumber {
                text: "q".into(),
                pos: 9
            }
        );
    }

    #[test]
    fn test_parse_negative_bounds() {
        let ranges: Ranges<i32> = "-5--3, -1, 2".parse().unwrap();
        assert_eq!(
            *ranges,
            [
                SetRange::Run(-5, -3),
                SetRange::Single(-1),
                SetRange::Single(2)
            ]
        );
        assert_eq!(ranges.to_string(), "-5--3, -1, 2");
    }

    #[test]
    fn test_find_reversed() {
        let ranges = Ranges::from(vec![SetRange::Single(1), SetRange::Run(9u8, 4)]);
        assert_eq!(ranges.find_reversed(), Some(&SetRange::Run(9, 4)));
        assert_eq!(set![1u8, 2, 3].ranges().find_reversed(), None);
    }
}
