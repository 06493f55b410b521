//! Rkyv implementation for `Set`.

use core::hash::Hash;

use rkyv::{
    Archive, Deserialize, Serialize,
    rancor::Fallible,
    ser::{Allocator, Writer},
    vec::{ArchivedVec, VecResolver},
};

use crate::Set;

/// The archived version of a [`Set`]: its elements, in unspecified order.
pub type ArchivedSet<T> = ArchivedVec<<T as Archive>::Archived>;

/// The resolver for [`Set`].
pub type SetResolver = VecResolver;

impl<T: Archive> Archive for Set<T> {
    type Archived = ArchivedSet<T>;
    type Resolver = SetResolver;

    fn resolve(&self, resolver: Self::Resolver, out: rkyv::Place<Self::Archived>) {
        ArchivedVec::resolve_from_len(self.len(), resolver, out);
    }
}

impl<T, S> Serialize<S> for Set<T>
where
    T: Serialize<S>,
    S: Fallible + Allocator + Writer + ?Sized,
{
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        ArchivedVec::<T::Archived>::serialize_from_iter::<T, _, _>(self.iter(), serializer)
    }
}

impl<T, D> Deserialize<Set<T>, D> for ArchivedSet<T>
where
    T: Archive + Hash + Eq,
    T::Archived: Deserialize<T, D>,
    D: Fallible + ?Sized,
{
    fn deserialize(&self, deserializer: &mut D) -> Result<Set<T>, D::Error> {
        let mut set = Set::with_capacity(self.len());
        for element in self.iter() {
            set.insert(element.deserialize(deserializer)?);
        }
        Ok(set)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_archive() {
        let set = Set::range(5u32, 9).into_owned();

        // Serialize
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&set).unwrap();

        // Deserialize back
        let deserialized: Set<u32> =
            rkyv::api::high::from_bytes::<_, rkyv::rancor::Error>(&bytes).unwrap();
        assert_eq!(deserialized, set);
    }

    #[test]
    fn test_archived_elements() {
        let set = Set::from([10u16, 20, 30]);
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&set).unwrap();

        let archived =
            rkyv::access::<ArchivedSet<u16>, rkyv::rancor::Error>(&bytes).unwrap();
        let mut elements: Vec<u16> = archived.iter().map(|e| e.to_native()).collect();
        elements.sort_unstable();
        assert_eq!(elements, vec![10, 20, 30]);
    }

    #[test]
    fn test_empty_archive() {
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(Set::<i64>::empty()).unwrap();
        let deserialized: Set<i64> =
            rkyv::api::high::from_bytes::<_, rkyv::rancor::Error>(&bytes).unwrap();
        assert!(deserialized.is_empty());
    }
}
