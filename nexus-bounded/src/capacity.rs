//! Capacity bounds and their lenient construction.
//!
//! A list is either unbounded or bounded by a positive element count fixed
//! at construction. Hints that cannot be read as a positive integer (zero,
//! negatives, values out of `usize` range, and with the `serde` feature any
//! non-integer value) silently produce an unbounded list. Construction
//! never fails.

use core::num::NonZeroUsize;

/// Maximum element count of a [`BoundedList`](crate::BoundedList).
///
/// # Example
///
/// ```
/// use nexus_bounded::Capacity;
///
/// assert_eq!(Capacity::from(33).max(), 33);
/// assert_eq!(Capacity::from(0).max(), -1);
/// assert_eq!(Capacity::from(-5).max(), -1);
/// assert_eq!(Capacity::from(None::<usize>).max(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    /// No bound; `add` only fails if the storage backend does.
    #[default]
    Unbounded,
    /// At most this many elements.
    Bounded(NonZeroUsize),
}

impl Capacity {
    /// Returns the bound, or `None` when unbounded.
    #[inline]
    pub const fn get(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(n) => Some(n.get()),
        }
    }

    /// Returns the bound as reported by `max()`: the bound itself, or `-1`
    /// when unbounded.
    ///
    /// Hints are clamped to [`Capacity::LIMIT`], so this is exact for any
    /// capacity built through `From`. A `Bounded` variant constructed
    /// directly above that limit reports `isize::MAX`.
    #[inline]
    pub fn max(self) -> isize {
        match self.get() {
            Some(n) => isize::try_from(n).unwrap_or(isize::MAX),
            None => -1,
        }
    }

    /// Returns `true` if there is no bound.
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    /// Returns `true` if `len` elements leave no room for another.
    #[inline]
    pub const fn is_reached(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => false,
            Capacity::Bounded(n) => len >= n.get(),
        }
    }
}

impl Capacity {
    /// Largest bound a hint produces. No list can hold more elements than
    /// `isize::MAX`, and `max()` reports this value exactly.
    pub const LIMIT: NonZeroUsize = match NonZeroUsize::new(isize::MAX as usize) {
        Some(n) => n,
        None => unreachable!(),
    };

    fn bounded(n: NonZeroUsize) -> Self {
        if n > Self::LIMIT {
            tracing::trace!(hint = n.get(), "capacity hint clamped to isize::MAX");
            return Capacity::Bounded(Self::LIMIT);
        }
        Capacity::Bounded(n)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(n: NonZeroUsize) -> Self {
        Capacity::bounded(n)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(hint: Option<usize>) -> Self {
        hint.map_or(Capacity::Unbounded, Capacity::from)
    }
}

macro_rules! impl_from_integer_hint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Capacity {
                #[allow(irrefutable_let_patterns)]
                fn from(hint: $ty) -> Self {
                    let Ok(n) = usize::try_from(hint) else {
                        tracing::trace!(%hint, "capacity hint out of range, list is unbounded");
                        return Capacity::Unbounded;
                    };
                    NonZeroUsize::new(n).map_or(Capacity::Unbounded, Capacity::bounded)
                }
            }
        )*
    };
}

impl_from_integer_hint!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Construction settings for a [`BoundedList`](crate::BoundedList).
///
/// With the `serde` feature this can be read from any self-describing
/// format. The `capacity` field is lenient: anything but a positive integer
/// means unbounded, and a missing field means unbounded.
///
/// ```
/// use nexus_bounded::{BoundedList, Capacity, ListConfig};
///
/// let config = ListConfig { capacity: Capacity::from(2) };
/// let list: BoundedList<u32> = BoundedList::from_config(&config);
/// assert_eq!(list.max(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    /// Maximum element count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: Capacity,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};

    use super::Capacity;

    impl Serialize for Capacity {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_i64(self.max() as i64)
        }
    }

    impl<'de> Deserialize<'de> for Capacity {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(CapacityVisitor)
        }
    }

    struct CapacityVisitor;

    impl CapacityVisitor {
        fn unusable<E>(self, what: &str) -> Result<Capacity, E> {
            tracing::debug!(hint = what, "non-integer capacity hint, list is unbounded");
            Ok(Capacity::Unbounded)
        }
    }

    impl<'de> Visitor<'de> for CapacityVisitor {
        type Value = Capacity;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a capacity hint")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Capacity, E> {
            Ok(Capacity::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Capacity, E> {
            Ok(Capacity::from(v))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Capacity, E> {
            Ok(Capacity::from(v))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Capacity, E> {
            Ok(Capacity::from(v))
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> Result<Capacity, E> {
            self.unusable("float")
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Capacity, E> {
            self.unusable("bool")
        }

        fn visit_str<E: de::Error>(self, _: &str) -> Result<Capacity, E> {
            self.unusable("string")
        }

        fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Capacity, E> {
            self.unusable("bytes")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Capacity, E> {
            Ok(Capacity::Unbounded)
        }

        fn visit_none<E: de::Error>(self) -> Result<Capacity, E> {
            Ok(Capacity::Unbounded)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Capacity, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Capacity, A::Error> {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            self.unusable("sequence")
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Capacity, A::Error> {
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            self.unusable("map")
        }
    }
}
