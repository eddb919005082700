//! Element equality used by searches and value-based removal.
//!
//! [`BoundedList::index_of`](crate::BoundedList::index_of),
//! [`count`](crate::BoundedList::count) and
//! [`remove_element`](crate::BoundedList::remove_element) decide matches
//! through [`ElementEq`] rather than `PartialEq`. Each element type picks
//! its policy explicitly:
//!
//! - primitive-like types (numbers, `bool`, `char`, text) compare by value;
//! - shared composites (`Rc<T>`, `Arc<T>`) compare by identity, never by
//!   their contents;
//! - `Option<T>` treats two `None`s as equal and delegates otherwise;
//! - any other type opts in by implementing the trait, which is how a
//!   composite gets custom equality.
//!
//! There is no blanket impl over `PartialEq`.

use std::rc::Rc;
use std::sync::Arc;

/// Equality policy for list elements.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use nexus_bounded::ElementEq;
///
/// // Value equality for primitives
/// assert!(String::from("a").element_eq(&String::from("a")));
///
/// // Identity equality for shared composites
/// let a = Rc::new(vec![1, 2]);
/// let b = Rc::new(vec![1, 2]);
/// assert!(a.element_eq(&Rc::clone(&a)));
/// assert!(!a.element_eq(&b));
/// ```
///
/// # Custom Equality
///
/// ```
/// use nexus_bounded::{BoundedList, ElementEq};
///
/// struct Order {
///     id: u64,
///     qty: u64,
/// }
///
/// // Orders match on id alone
/// impl ElementEq for Order {
///     fn element_eq(&self, other: &Self) -> bool {
///         self.id == other.id
///     }
/// }
///
/// let mut list = BoundedList::unbounded();
/// list.add(Order { id: 1, qty: 10 });
/// assert_eq!(list.index_of(&Order { id: 1, qty: 99 }), Some(0));
/// ```
pub trait ElementEq {
    /// Returns `true` if `self` and `other` count as the same element.
    fn element_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_value_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ElementEq for $ty {
                #[inline]
                fn element_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_value_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String, Box<str>,
);

impl ElementEq for &str {
    #[inline]
    fn element_eq(&self, other: &Self) -> bool {
        *self == *other
    }
}

impl<T: ?Sized> ElementEq for Rc<T> {
    #[inline]
    fn element_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> ElementEq for Arc<T> {
    #[inline]
    fn element_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ElementEq> ElementEq for Option<T> {
    #[inline]
    fn element_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.element_eq(b),
            _ => false,
        }
    }
}
