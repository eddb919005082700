//! Capacity-bounded singly-linked list over an owned arena.
//!
//! Nodes are stored in the list's own [`Storage`] and chained by [`Key`].
//! Removal re-links the predecessor's `next` to the successor and drops the
//! node from the arena, so nothing outside the list can observe a removed
//! node.
//!
//! # Sentinel Returns
//!
//! Nothing here panics or returns an error on bad input:
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | `add` on a full list | `false`, list unchanged |
//! | `get`/`remove*` out of range or on an empty list | `None`, list unchanged |
//! | `remove_element` without a match | `false` |
//! | `index_of` without a match | `None` |
//! | `count` without a match | `0` |
//!
//! Callers that want the rejected value back use [`BoundedList::try_add`],
//! which returns it inside [`Full`].
//!
//! # Example
//!
//! ```
//! use nexus_bounded::BoundedList;
//!
//! let mut list: BoundedList<&str> = BoundedList::new(1);
//!
//! assert!(list.add("x"));
//! assert!(!list.add("y"));
//! assert_eq!(list.remove_first(), Some("x"));
//! assert!(list.add("y"));
//! assert!(!list.add("x"));
//! ```
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `add`, `remove_first`, `front`, `back` | O(1) |
//! | `get`, `remove`, `remove_last` | O(n), walks from the head |
//! | `index_of`, `count`, `remove_element` | O(n) linear scan |

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::num::NonZeroUsize;

use slab::Slab;
use tracing::trace;

use crate::{Capacity, ElementEq, FixedStorage, Full, Key, ListConfig, Storage};

/// Growable list storage backed by `slab::Slab`.
pub type SlabListStorage<T> = Slab<ListNode<T, usize>>;

/// Preallocated list storage backed by [`FixedStorage`].
pub type FixedListStorage<T, K = u32> = FixedStorage<ListNode<T, K>, K>;

/// One link in the chain: a value and the key of the next node.
///
/// Users only see `&T`/`&mut T`; the node is an implementation detail that
/// appears in storage type signatures.
#[derive(Debug)]
pub struct ListNode<T, K: Key = usize> {
    data: T,
    next: K,
}

impl<T, K: Key> ListNode<T, K> {
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            next: K::NONE,
        }
    }
}

/// An ordered container with an optional maximum element count.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (default [`SlabListStorage<T>`])
/// - `K`: Key type (default `usize`)
///
/// # Example
///
/// ```
/// use nexus_bounded::BoundedList;
///
/// let mut list = BoundedList::unbounded();
/// for x in 0..10 {
///     list.add(format!("Element #{x}"));
/// }
///
/// assert_eq!(list.index_of(&"Element #5".to_string()), Some(5));
/// assert!(list.remove_element(&"Element #5".to_string()));
/// assert_eq!(list.index_of(&"Element #9".to_string()), Some(8));
/// assert_eq!(list.max(), -1);
/// ```
pub struct BoundedList<T, S = SlabListStorage<T>, K: Key = usize>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    storage: S,
    head: K,
    tail: K,
    len: usize,
    capacity: Capacity,
    _marker: PhantomData<T>,
}

impl<T> BoundedList<T> {
    /// Creates an empty slab-backed list.
    ///
    /// A positive integer bounds the list; anything else (zero, negative,
    /// `None`) leaves it unbounded.
    #[inline]
    pub fn new(capacity: impl Into<Capacity>) -> Self {
        Self::with_storage(Slab::new(), capacity)
    }

    /// Creates an empty list without a bound.
    #[inline]
    pub fn unbounded() -> Self {
        Self::new(Capacity::Unbounded)
    }

    /// Creates an empty list configured by `config`.
    #[inline]
    pub fn from_config(config: &ListConfig) -> Self {
        Self::new(config.capacity)
    }
}

impl<T, K: Key> BoundedList<T, FixedListStorage<T, K>, K> {
    /// Creates a bounded list whose nodes live in an arena allocated up
    /// front, so `add` never allocates.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` does not fit the key type.
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    /// use nexus_bounded::{BoundedList, FixedListStorage};
    ///
    /// let cap = NonZeroUsize::new(2).unwrap();
    /// let mut list: BoundedList<u64, FixedListStorage<u64>, u32> = BoundedList::fixed(cap);
    /// assert!(list.add(1));
    /// assert!(list.add(2));
    /// assert!(!list.add(3));
    /// ```
    pub fn fixed(capacity: NonZeroUsize) -> Self {
        Self::with_storage(FixedStorage::with_capacity(capacity.get()), capacity)
    }
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

// =============================================================================
// Base impl - works with any Storage
// =============================================================================

impl<T, S, K: Key> BoundedList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Creates an empty list over the given storage.
    ///
    /// Any values already in `storage` are dropped.
    pub fn with_storage(mut storage: S, capacity: impl Into<Capacity>) -> Self {
        storage.clear();
        Self {
            storage,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            capacity: capacity.into(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if a further `add` would be rejected by the bound.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.capacity.is_reached(self.len)
    }

    /// Returns the configured bound.
    #[inline]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns the bound, or `-1` for an unbounded list.
    #[inline]
    pub fn max(&self) -> isize {
        self.capacity.max()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends `value` at the tail.
    ///
    /// Returns `false` and leaves the list unchanged if it is full.
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.try_add(value).is_ok()
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the list is at its bound or the storage
    /// has no free slot.
    pub fn try_add(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            trace!(len = self.len, "add rejected: list at capacity");
            return Err(Full(value));
        }

        let key = match self.storage.try_insert(ListNode::new(value)) {
            Ok(key) => key,
            Err(Full(node)) => {
                trace!(len = self.len, "add rejected: storage is full");
                return Err(Full(node.data));
            }
        };

        if self.tail.is_some() {
            if let Some(tail) = self.storage.get_mut(self.tail) {
                tail.next = key;
            }
        } else {
            self.head = key;
        }

        self.tail = key;
        self.len += 1;
        Ok(())
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let key = self.key_at(index)?;
        self.storage.get(key).map(|node| &node.data)
    }

    /// Returns the element at `index` mutably, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let key = self.key_at(index)?;
        self.storage.get_mut(key).map(|node| &mut node.data)
    }

    /// Returns the head element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage.get(self.head).map(|node| &node.data)
    }

    /// Returns the tail element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.storage.get(self.tail).map(|node| &node.data)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Detaches and returns the head element.
    #[inline]
    pub fn remove_first(&mut self) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let node = self.storage.remove(self.head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Detaches and returns the tail element.
    ///
    /// Walks from the head to find the tail's predecessor.
    #[inline]
    pub fn remove_last(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove(last)
    }

    /// Detaches and returns the element at `index`, or `None` if out of
    /// range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }

        let prev = self.key_at(index - 1)?;
        self.unlink_after(prev)
    }

    /// Removes every element. The bound is kept.
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing list");
        self.storage.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S, K> {
        Iter {
            storage: &self.storage,
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn key_at(&self, index: usize) -> Option<K> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return Some(self.tail);
        }

        let mut key = self.head;
        for _ in 0..index {
            key = self.storage.get(key)?.next;
        }
        Some(key)
    }

    /// Removes the node after `prev`, relinking `prev` to its successor.
    fn unlink_after(&mut self, prev: K) -> Option<T> {
        let key = self.storage.get(prev)?.next;
        let next = self.storage.get(key)?.next;

        self.storage.get_mut(prev)?.next = next;
        let node = self.storage.remove(key)?;
        if key == self.tail {
            self.tail = prev;
        }

        self.len -= 1;
        Some(node.data)
    }
}

// =============================================================================
// Equality-based operations
// =============================================================================

impl<T: ElementEq, S, K: Key> BoundedList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Returns the position of the first element equal to `value`.
    ///
    /// See [`ElementEq`] for what "equal" means for each element type.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item.element_eq(value))
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the number of elements equal to `value`.
    #[inline]
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|item| item.element_eq(value)).count()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` if nothing matched. Later duplicates stay in place.
    pub fn remove_element(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }
}

impl<T: fmt::Debug, S, K: Key> fmt::Debug for BoundedList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S, K: Key> Extend<T> for BoundedList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    /// Appends values until the list is full; the rest are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.add(value) {
                break;
            }
        }
    }
}

impl<T> FromIterator<T> for BoundedList<T> {
    /// Collects into an unbounded list.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::unbounded();
        list.extend(iter);
        list
    }
}

impl<'a, T, S, K: Key> IntoIterator for &'a BoundedList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S, K: Key> IntoIterator for BoundedList<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = T;
    type IntoIter = IntoIter<T, S, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements, head to tail.
pub struct Iter<'a, T, S, K: Key> {
    storage: &'a S,
    current: K,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, S, K: Key + 'a> Iterator for Iter<'a, T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.storage.get(self.current)?;
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, K: Key + 'a> ExactSizeIterator for Iter<'a, T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}

impl<'a, T: 'a, S, K: Key + 'a> FusedIterator for Iter<'a, T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}

/// Owning iterator that drains a list head to tail.
pub struct IntoIter<T, S, K: Key>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    list: BoundedList<T, S, K>,
}

impl<T, S, K: Key> Iterator for IntoIter<T, S, K>
where
    S: Storage<ListNode<T, K>, Key = K>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.remove_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, S, K: Key> ExactSizeIterator for IntoIter<T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}

impl<T, S, K: Key> FusedIterator for IntoIter<T, S, K> where
    S: Storage<ListNode<T, K>, Key = K>
{
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    /// Walks the chain and checks it against `len`, `tail` and the arena.
    fn assert_invariants<T, S, K: Key + fmt::Debug>(list: &BoundedList<T, S, K>)
    where
        S: Storage<ListNode<T, K>, Key = K>,
    {
        let mut steps = 0;
        let mut last = K::NONE;
        let mut key = list.head;
        while key.is_some() {
            last = key;
            key = list.storage.get(key).expect("chain points at a free slot").next;
            steps += 1;
            assert!(steps <= list.len, "chain is longer than len");
        }
        assert_eq!(steps, list.len);
        assert_eq!(last, list.tail);
        assert_eq!(list.storage.len(), list.len);
        if let Some(n) = list.capacity.get() {
            assert!(list.len <= n);
        }
    }

    fn collect<T: Clone, S, K: Key>(list: &BoundedList<T, S, K>) -> Vec<T>
    where
        S: Storage<ListNode<T, K>, Key = K>,
    {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: BoundedList<u64> = BoundedList::unbounded();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.max(), -1);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        assert_invariants(&list);
    }

    #[test]
    fn capacity_hints() {
        assert_eq!(BoundedList::<u8>::new(33).max(), 33);
        assert_eq!(BoundedList::<u8>::new(0).max(), -1);
        assert_eq!(BoundedList::<u8>::new(-3).max(), -1);
        assert_eq!(BoundedList::<u8>::default().max(), -1);
    }

    #[test]
    fn add_preserves_order() {
        let mut list = BoundedList::unbounded();
        for i in 0..5u64 {
            assert!(list.add(i));
        }

        assert_eq!(list.len(), 5);
        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4]);
        for i in 0..5 {
            assert_eq!(list.get(i), Some(&(i as u64)));
        }
        assert_eq!(list.get(5), None);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&4));
        assert_invariants(&list);
    }

    #[test]
    fn add_rejects_at_capacity() {
        let mut list = BoundedList::new(2);
        assert!(list.add('a'));
        assert!(list.add('b'));
        assert!(list.is_full());
        assert!(!list.add('c'));
        assert_eq!(list.len(), 2);
        assert_eq!(collect(&list), vec!['a', 'b']);
        assert_invariants(&list);
    }

    #[test]
    fn try_add_returns_rejected_value() {
        let mut list = BoundedList::new(1);
        assert_eq!(list.try_add(String::from("kept")), Ok(()));

        let err = list.try_add(String::from("rejected")).unwrap_err();
        assert_eq!(err.to_string(), "container is full");
        assert_eq!(err.into_inner(), "rejected");
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut list: BoundedList<u64> = (1..=3).collect();
        *list.get_mut(1).unwrap() *= 10;
        assert_eq!(collect(&list), vec![1, 20, 3]);
        assert!(list.get_mut(3).is_none());
    }

    #[test]
    fn remove_first_and_last() {
        let mut list: BoundedList<u64> = (0..4).collect();

        assert_eq!(list.remove_first(), Some(0));
        assert_eq!(list.remove_last(), Some(3));
        assert_invariants(&list);
        assert_eq!(collect(&list), vec![1, 2]);

        assert_eq!(list.remove_last(), Some(2));
        assert_eq!(list.remove_last(), Some(1));
        assert_eq!(list.remove_last(), None);
        assert_eq!(list.remove_first(), None);
        assert_invariants(&list);
    }

    #[test]
    fn remove_by_index_relinks() {
        let mut list: BoundedList<u64> = (0..5).collect();

        assert_eq!(list.remove(2), Some(2));
        assert_invariants(&list);
        assert_eq!(collect(&list), vec![0, 1, 3, 4]);

        assert_eq!(list.remove(3), Some(4));
        assert_invariants(&list);
        assert_eq!(list.back(), Some(&3));

        assert!(list.add(9));
        assert_eq!(collect(&list), vec![0, 1, 3, 9]);
        assert_invariants(&list);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut list: BoundedList<u64> = (0..2).collect();
        assert_eq!(list.remove(2), None);
        assert_eq!(list.remove(100), None);
        assert_eq!(list.len(), 2);

        let mut empty: BoundedList<u64> = BoundedList::unbounded();
        assert_eq!(empty.remove(0), None);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn remove_element_takes_first_match_only() {
        let mut list: BoundedList<&str> = ["a", "b", "a", "c", "a"].into_iter().collect();

        assert!(list.remove_element(&"a"));
        assert_eq!(collect(&list), vec!["b", "a", "c", "a"]);
        assert_eq!(list.count(&"a"), 2);

        assert!(list.remove_element(&"a"));
        assert!(list.remove_element(&"a"));
        assert!(!list.remove_element(&"a"));
        assert_eq!(collect(&list), vec!["b", "c"]);
        assert_invariants(&list);
    }

    #[test]
    fn index_of_and_count_use_identity_for_rc() {
        let a = Rc::new((0, "An Obj"));
        let twin = Rc::new((0, "An Obj"));

        let mut list = BoundedList::unbounded();
        list.add(Rc::clone(&a));
        list.add(Rc::clone(&a));

        assert_eq!(list.index_of(&a), Some(0));
        assert_eq!(list.index_of(&twin), None);
        assert_eq!(list.count(&a), 2);
        assert_eq!(list.count(&twin), 0);
        assert!(list.contains(&a));
        assert!(!list.remove_element(&twin));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_values_are_stored_and_matched() {
        let mut list: BoundedList<Option<&str>> = BoundedList::unbounded();
        list.add(None);
        list.add(Some("Something"));
        list.add(None);

        assert_eq!(list.len(), 3);
        assert_eq!(list.index_of(&None), Some(0));
        assert_eq!(list.count(&None), 2);
        assert_eq!(list.index_of(&Some("Something")), Some(1));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut list = BoundedList::new(3);
        list.extend([1u64, 2, 3]);
        assert!(list.is_full());

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.max(), 3);
        assert_invariants(&list);

        list.extend([4, 5, 6, 7]);
        assert_eq!(collect(&list), vec![4, 5, 6]);
    }

    #[test]
    fn extend_stops_at_capacity() {
        let mut list = BoundedList::new(2);
        list.extend(0..10u64);
        assert_eq!(collect(&list), vec![0, 1]);
    }

    #[test]
    fn iterators() {
        let list: BoundedList<u64> = (0..4).collect();

        let iter = list.iter();
        assert_eq!(iter.len(), 4);

        let doubled: Vec<_> = (&list).into_iter().map(|x| x * 2).collect();
        assert_eq!(doubled, vec![0, 2, 4, 6]);

        let mut owned = list.into_iter();
        assert_eq!(owned.len(), 4);
        assert_eq!(owned.next(), Some(0));
        assert_eq!(owned.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn debug_lists_elements() {
        let list: BoundedList<u64> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn fixed_storage_list() {
        let cap = NonZeroUsize::new(3).unwrap();
        let mut list: BoundedList<u64, FixedListStorage<u64>, u32> = BoundedList::fixed(cap);

        assert_eq!(list.max(), 3);
        assert!(list.add(1));
        assert!(list.add(2));
        assert!(list.add(3));
        assert!(!list.add(4));

        assert_eq!(list.remove(1), Some(2));
        assert!(list.add(4));
        assert_eq!(collect(&list), vec![1, 3, 4]);
        assert_invariants(&list);

        list.clear();
        assert!(list.add(5));
        assert_invariants(&list);
    }

    #[test]
    fn storage_smaller_than_bound_rejects() {
        let storage: FixedListStorage<u64> = FixedStorage::with_capacity(1);
        let mut list: BoundedList<u64, _, u32> = BoundedList::with_storage(storage, 5);

        assert!(list.add(1));
        assert_eq!(list.try_add(2), Err(Full(2)));
        assert_eq!(list.len(), 1);
        assert_invariants(&list);
    }

    #[test]
    fn with_storage_discards_previous_contents() {
        let mut storage: SlabListStorage<u64> = Slab::new();
        storage.insert(ListNode::new(7));

        let list: BoundedList<u64> = BoundedList::with_storage(storage, None::<usize>);
        assert!(list.is_empty());
        assert_invariants(&list);
    }

    #[test]
    fn iterate_u8_keyed_fixed_storage_at_key_limit() {
        let cap = NonZeroUsize::new(255).unwrap();
        let mut list: BoundedList<u32, FixedListStorage<u32, u8>, u8> = BoundedList::fixed(cap);
        list.extend(0..300);
        assert_eq!(list.len(), 255);
        assert!(list.iter().copied().eq(0..255));

        assert_eq!(list.remove_last(), Some(254));
        assert!(list.add(999));
        assert_eq!(list.back(), Some(&999));
        assert_eq!(list.iter().len(), 255);
        assert_invariants(&list);
    }

    #[test]
    fn drop_releases_elements() {
        let shared = Rc::new(());
        {
            let mut list = BoundedList::unbounded();
            for _ in 0..4 {
                list.add(Rc::clone(&shared));
            }
            list.remove(1);
            assert_eq!(Rc::strong_count(&shared), 4);
        }
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
