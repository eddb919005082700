//! Arena storage with stable keys.
//!
//! A [`BoundedList`](crate::BoundedList) never holds pointers between its
//! nodes. Nodes live in a [`Storage`] arena and link to each other by
//! [`Key`]. A key stays valid until its slot is removed, so re-linking a
//! chain never aliases a node mutably.
//!
//! Two backends ship with the crate:
//!
//! | Storage | Capacity | Allocation on insert | Use Case |
//! |---------|----------|----------------------|----------|
//! | `slab::Slab<T>` | Growable | May reallocate | Default, unbounded lists |
//! | [`FixedStorage<T, K>`] | Fixed (runtime) | Never | Preallocated bounded lists |

use core::fmt;

use crate::Key;

/// Slab-like arena with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **Sentinel safety**: [`Key::NONE`] is never returned by `try_insert`,
///   and lookups with it return `None`
/// - **Slot reuse**: removed slots can be reused by future inserts
pub trait Storage<T> {
    /// Handle type for this arena.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the arena has no free slot.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, Full<T>>;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value and frees all slots.
    fn clear(&mut self);
}

/// Error returned when a value cannot be stored because there is no room.
///
/// Carries the rejected value so the caller can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is full")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

// =============================================================================
// FixedStorage - runtime capacity, allocated once, free-stack slot reuse
// =============================================================================

/// Fixed-capacity arena allocated once at construction.
///
/// Slots are handed out from a free stack, so the most recently freed slot
/// is reused first. Nothing allocates after construction.
///
/// # Example
///
/// ```
/// use nexus_bounded::{FixedStorage, Storage};
///
/// let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(4);
/// assert_eq!(storage.capacity(), 4);
///
/// let key = storage.try_insert(42).unwrap();
/// assert_eq!(storage.get(key), Some(&42));
/// ```
#[derive(Debug)]
pub struct FixedStorage<T, K: Key = u32> {
    slots: Box<[Option<T>]>,
    free: Vec<K>,
}

impl<T, K: Key> FixedStorage<T, K> {
    /// Creates an arena with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or does not fit the key type.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            capacity <= K::NONE.as_usize(),
            "capacity exceeds key type maximum"
        );

        let mut free = Vec::with_capacity(capacity);
        free.extend((0..capacity).rev().map(K::from_usize));

        Self {
            slots: (0..capacity).map(|_| None).collect(),
            free,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }
}

impl<T, K: Key> Storage<T> for FixedStorage<T, K> {
    type Key = K;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<K, Full<T>> {
        let Some(key) = self.free.pop() else {
            return Err(Full(value));
        };
        self.slots[key.as_usize()] = Some(value);
        Ok(key)
    }

    #[inline]
    fn remove(&mut self, key: K) -> Option<T> {
        let value = self.slots.get_mut(key.as_usize())?.take()?;
        self.free.push(key);
        Some(value)
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        self.slots.get(key.as_usize())?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.slots.get_mut(key.as_usize())?.as_mut()
    }

    #[inline]
    fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.free.clear();
        self.free.extend((0..self.slots.len()).rev().map(K::from_usize));
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<usize, Full<T>> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        slab::Slab::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let storage: FixedStorage<u64> = FixedStorage::with_capacity(16);
        assert!(storage.is_empty());
        assert!(!storage.is_full());
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.capacity(), 16);
    }

    #[test]
    fn capacity_is_exact() {
        let storage: FixedStorage<u64> = FixedStorage::with_capacity(100);
        assert_eq!(storage.capacity(), 100);
    }

    #[test]
    fn insert_get_remove() {
        let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(16);

        let key = storage.try_insert(42).unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(key), Some(&42));

        assert_eq!(storage.remove(key), Some(42));
        assert_eq!(storage.get(key), None);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(16);

        let key = storage.try_insert(10).unwrap();
        *storage.get_mut(key).unwrap() = 20;

        assert_eq!(storage.get(key), Some(&20));
    }

    #[test]
    fn fill_to_capacity() {
        let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(3);

        let k0 = storage.try_insert(0).unwrap();
        let k1 = storage.try_insert(1).unwrap();
        let k2 = storage.try_insert(2).unwrap();
        assert!(storage.is_full());

        let err = storage.try_insert(3);
        assert_eq!(err, Err(Full(3)));
        assert_eq!(err.unwrap_err().into_inner(), 3);

        assert_eq!(storage.get(k0), Some(&0));
        assert_eq!(storage.get(k1), Some(&1));
        assert_eq!(storage.get(k2), Some(&2));
    }

    #[test]
    fn slots_hand_out_in_order_then_reuse_lifo() {
        let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(4);

        let k0 = storage.try_insert(0).unwrap();
        let k1 = storage.try_insert(1).unwrap();
        assert_eq!((k0, k1), (0, 1));

        storage.remove(k0);
        assert_eq!(storage.try_insert(2).unwrap(), k0);
    }

    #[test]
    fn remove_twice_and_out_of_range() {
        let mut storage: FixedStorage<u64> = FixedStorage::with_capacity(4);

        let key = storage.try_insert(42).unwrap();
        assert_eq!(storage.remove(key), Some(42));
        assert_eq!(storage.remove(key), None);
        assert_eq!(storage.remove(99), None);
        assert_eq!(storage.get(u32::NONE), None);
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn clear_frees_every_slot() {
        let mut storage: FixedStorage<String> = FixedStorage::with_capacity(2);
        storage.try_insert("a".into()).unwrap();
        storage.try_insert("b".into()).unwrap();
        assert!(storage.is_full());

        storage.clear();
        assert!(storage.is_empty());
        assert_eq!(storage.try_insert("c".into()).unwrap(), 0);
    }

    #[test]
    fn drop_cleans_up() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut storage: FixedStorage<DropCounter> = FixedStorage::with_capacity(8);
            storage.try_insert(DropCounter).unwrap();
            storage.try_insert(DropCounter).unwrap();
            storage.try_insert(DropCounter).unwrap();
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn u8_keys() {
        let mut storage: FixedStorage<u64, u8> = FixedStorage::with_capacity(255);
        let key = storage.try_insert(42).unwrap();
        assert_eq!(storage.get(key), Some(&42));
    }

    #[test]
    #[should_panic(expected = "capacity exceeds key type maximum")]
    fn capacity_beyond_key_range_panics() {
        let _ = FixedStorage::<u64, u8>::with_capacity(256);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = FixedStorage::<u64>::with_capacity(0);
    }

    mod slab_tests {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut storage = slab::Slab::new();

            let key = storage.try_insert(42).unwrap();
            assert_eq!(Storage::get(&storage, key), Some(&42));

            assert_eq!(Storage::remove(&mut storage, key), Some(42));
            assert_eq!(Storage::get(&storage, key), None);
            assert_eq!(Storage::remove(&mut storage, key), None);
        }

        #[test]
        fn sentinel_lookup_is_none() {
            let mut storage: slab::Slab<u64> = slab::Slab::new();
            storage.insert(1);
            assert_eq!(Storage::get(&storage, usize::NONE), None);
        }

        #[test]
        fn slot_reuse() {
            let mut storage = slab::Slab::new();

            let k1 = storage.try_insert(1).unwrap();
            Storage::remove(&mut storage, k1);

            let k2 = storage.try_insert(2).unwrap();
            assert_eq!(k1, k2);
        }
    }
}
