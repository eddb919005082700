//! Capacity-bounded ordered containers over an owned arena.
//!
//! [`BoundedList`] is a singly-linked list whose nodes live in a slab-like
//! [`Storage`] owned by the list. It backs small in-memory collections such
//! as the children of a tree node.
//!
//! # Design
//!
//! ```text
//! BoundedList     - head/tail keys, length, capacity bound
//!     │
//!     └── Storage (Slab / FixedStorage) - owns ListNode { data, next }
//! ```
//!
//! - **Keys, not pointers**: nodes link by [`Key`]; unlinking never
//!   aliases a node mutably.
//! - **Optional bound**: a positive capacity rejects further inserts;
//!   anything else means unbounded ([`Capacity`]).
//! - **Sentinel failures**: out-of-range positions, missing matches and
//!   full lists are reported through `None`/`false`, never panics.
//! - **Explicit equality**: searches use [`ElementEq`], which compares
//!   primitives by value and shared composites (`Rc`, `Arc`, objects in a
//!   [`Value`]) by identity.
//!
//! # Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use nexus_bounded::BoundedList;
//!
//! let item = Rc::new(String::from("shared"));
//!
//! let mut list = BoundedList::new(10);
//! list.add(Rc::clone(&item));
//! list.add(Rc::clone(&item));
//! list.add(Rc::clone(&item));
//!
//! assert_eq!(list.count(&item), 3);
//! assert_eq!(list.count(&Rc::new(String::from("shared"))), 0);
//!
//! list.clear();
//! assert_eq!(list.count(&item), 0);
//! assert_eq!(list.max(), 10);
//! ```
//!
//! # Storage Options
//!
//! | Storage | Constructor | Allocation on `add` |
//! |---------|-------------|---------------------|
//! | [`SlabListStorage`] | [`BoundedList::new`] | May reallocate |
//! | [`FixedListStorage`] | [`BoundedList::fixed`] | Never |
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Capacity`] and [`ListConfig`]

#![warn(missing_docs)]

pub mod capacity;
pub mod equality;
pub mod key;
pub mod list;
pub mod storage;
pub mod value;

pub use capacity::{Capacity, ListConfig};
pub use equality::ElementEq;
pub use key::Key;
pub use list::{BoundedList, FixedListStorage, IntoIter, Iter, ListNode, SlabListStorage};
pub use storage::{FixedStorage, Full, Storage};
pub use value::{Kind, Value};
