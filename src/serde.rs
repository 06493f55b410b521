//! Serde implementations for `Set` and `Ranges`.
//!
//! By default a [`Set`] serializes as a sequence of its elements, in
//! unspecified order. Integer sets can instead be serialized in range form or
//! as a sorted sequence through the [`ranges`] and [`sorted`] modules:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use smol_set::Set;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Allocation {
//!     #[serde(with = "smol_set::serde::ranges")]
//!     cpus: Set<u32>,
//! }
//! ```

use core::{fmt, hash::Hash, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::{Integer, Ranges, Set, SetRange};

// Caps preallocation driven by untrusted size hints.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for Set<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    /// Deserializes a set from a sequence of elements. Duplicates collapse.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for SetVisitor<T>
        where
            T: Deserialize<'de> + Hash + Eq,
        {
            type Value = Set<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of set elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
                let mut set = Set::with_capacity(capacity);
                while let Some(element) = seq.next_element()? {
                    set.insert(element);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for Ranges<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for Ranges<T>
where
    T: Integer + Deserialize<'de>,
{
    /// Deserializes a range list, rejecting runs whose bounds are reversed.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ranges = Ranges::from(Vec::<SetRange<T>>::deserialize(deserializer)?);
        if let Some(reversed) = ranges.find_reversed() {
            return Err(de::Error::invalid_value(
                de::Unexpected::Other(&reversed.to_string()),
                &"a run with low <= high",
            ));
        }
        Ok(ranges)
    }
}

/// Module for serializing and deserializing an integer [`Set`] in range
/// form, e.g. `[[1, 3], 6, 7, [10, 12]]`.
pub mod ranges {
    use super::*;

    /// Serialize the [`Set`] as its range encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<T, S>(set: &Set<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Integer + Serialize,
        S: Serializer,
    {
        set.ranges().serialize(serializer)
    }

    /// Deserialize a [`Set`] from a range encoding.
    ///
    /// Overlapping entries are accepted and simply merge. Every run is
    /// expanded element by element, so the cost in time and memory is
    /// proportional to the size of the resulting set, not of the input: a
    /// single entry such as `[0, 4294967295]` builds a set of 2^32 integers.
    /// Bound the runs before deserializing untrusted input.
    ///
    /// # Errors
    ///
    /// Returns an error if a run has its lower bound above its upper bound or
    /// if deserialization fails.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Set<T>, D::Error>
    where
        T: Integer + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ranges::deserialize(deserializer).map(|ranges| ranges.to_set())
    }
}

/// Module for serializing and deserializing an integer [`Set`] as a sorted
/// sequence of integers.
pub mod sorted {
    use super::*;

    /// Serialize the [`Set`] as an ascending sequence of integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<T, S>(set: &Set<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Integer + Serialize,
        S: Serializer,
    {
        let mut sorted = set.to_vec();
        sorted.sort_unstable();
        serializer.collect_seq(sorted)
    }

    /// Deserialize a [`Set`] from a strictly ascending sequence of integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is not sorted, holds duplicates, or
    /// if deserialization fails.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Set<T>, D::Error>
    where
        T: Integer + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        struct SortedVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for SortedVisitor<T>
        where
            T: Integer + Deserialize<'de>,
        {
            type Value = Set<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sorted sequence of integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
                let mut set = Set::with_capacity(capacity);
                let mut last = None;
                while let Some(element) = seq.next_element::<T>()? {
                    if let Some(last) = last
                        && last >= element
                    {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Other(&element.to_string()),
                            &"sorted sequence",
                        ));
                    }
                    last = Some(element);
                    set.insert(element);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SortedVisitor(PhantomData))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set;
    use ::serde::{Deserialize, Serialize};
    use serde_test::{
        Token, assert_de_tokens, assert_de_tokens_error, assert_ser_tokens, assert_tokens,
    };

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct RangesWrapper {
        #[serde(with = "ranges")]
        set: Set<u32>,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct SortedWrapper {
        #[serde(with = "sorted")]
        set: Set<u32>,
    }

    #[test]
    fn test_set_round_trip_singleton() {
        assert_tokens(
            &set![7u32],
            &[Token::Seq { len: Some(1) }, Token::U32(7), Token::SeqEnd],
        );
    }

    #[test]
    fn test_set_deserialize_collapses_duplicates() {
        assert_de_tokens(
            &set![1u32, 2],
            &[
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(1),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_set_range_untagged() {
        assert_tokens(&SetRange::Single(9u32), &[Token::U32(9)]);
        assert_tokens(
            &SetRange::Run(1u32, 3),
            &[
                Token::Tuple { len: 2 },
                Token::U32(1),
                Token::U32(3),
                Token::TupleEnd,
            ],
        );
    }

    #[test]
    fn test_ranges_wrapper() {
        let wrapper = RangesWrapper {
            set: set![1, 2, 3, 6, 7, 10, 11, 12],
        };
        assert_ser_tokens(
            &wrapper,
            &[
                Token::Struct {
                    name: "RangesWrapper",
                    len: 1,
                },
                Token::Str("set"),
                Token::Seq { len: Some(4) },
                Token::Tuple { len: 2 },
                Token::U32(1),
                Token::U32(3),
                Token::TupleEnd,
                Token::U32(6),
                Token::U32(7),
                Token::Tuple { len: 2 },
                Token::U32(10),
                Token::U32(12),
                Token::TupleEnd,
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_ranges_wrapper_deserialize() {
        assert_de_tokens(
            &RangesWrapper {
                set: set![4, 5, 6, 9],
            },
            &[
                Token::Struct {
                    name: "RangesWrapper",
                    len: 1,
                },
                Token::Str("set"),
                Token::Seq { len: Some(2) },
                Token::Seq { len: Some(2) },
                Token::U32(4),
                Token::U32(6),
                Token::SeqEnd,
                Token::U32(9),
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_ranges_rejects_reversed_run() {
        assert_de_tokens_error::<Ranges<u32>>(
            &[
                Token::Seq { len: Some(1) },
                Token::Seq { len: Some(2) },
                Token::U32(6),
                Token::U32(4),
                Token::SeqEnd,
                Token::SeqEnd,
            ],
            "invalid value: 6-4, expected a run with low <= high",
        );
    }

    #[test]
    fn test_sorted_wrapper() {
        assert_tokens(
            &SortedWrapper {
                set: set![3, 1, 2],
            },
            &[
                Token::Struct {
                    name: "SortedWrapper",
                    len: 1,
                },
                Token::Str("set"),
                Token::Seq { len: Some(3) },
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_sorted_rejects_unsorted() {
        assert_de_tokens_error::<SortedWrapper>(
            &[
                Token::Struct {
                    name: "SortedWrapper",
                    len: 1,
                },
                Token::Str("set"),
                Token::Seq { len: Some(2) },
                Token::U32(2),
                Token::U32(1),
            ],
            "invalid value: 1, expected sorted sequence",
        );
    }

    #[test]
    fn test_sorted_rejects_duplicates() {
        assert_de_tokens_error::<SortedWrapper>(
            &[
                Token::Struct {
                    name: "SortedWrapper",
                    len: 1,
                },
                Token::Str("set"),
                Token::Seq { len: Some(2) },
                Token::U32(1),
                Token::U32(1),
            ],
            "invalid value: 1, expected sorted sequence",
        );
    }
}
