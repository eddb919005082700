//! Dynamically-kinded list elements.
//!
//! [`Value`] lets one list mix empty values, primitives and shared objects.
//! Its [`ElementEq`] impl requires the same kind on both sides: `Int(1)`
//! matches neither `Float(1.0)` nor `Text("1")`. Objects match only when
//! they are the same allocation.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::ElementEq;

/// A list element whose kind is decided at runtime.
///
/// # Example
///
/// ```
/// use nexus_bounded::{BoundedList, Value};
///
/// let obj = Value::object(vec![1, 2, 3]);
///
/// let mut list = BoundedList::unbounded();
/// list.add(Value::Empty);
/// list.add(Value::from("Something"));
/// list.add(Value::from(44));
/// list.add(obj.clone());
///
/// assert_eq!(list.index_of(&Value::from(44)), Some(2));
/// assert_eq!(list.index_of(&Value::from("44")), None);
/// assert_eq!(list.index_of(&obj), Some(3));
/// assert_eq!(list.index_of(&Value::object(vec![1, 2, 3])), None);
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// The empty value.
    #[default]
    Empty,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// A shared composite, compared by identity.
    Object(Rc<dyn Any>),
}

/// The kind of a [`Value`], without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Empty`]
    Empty,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Float`]
    Float,
    /// [`Value::Text`]
    Text,
    /// [`Value::Object`]
    Object,
}

impl Value {
    /// Wraps a composite in a new shared allocation.
    ///
    /// Every call creates a distinct identity; clone the returned value to
    /// refer to the same object again.
    pub fn object<T: Any>(value: T) -> Self {
        Value::Object(Rc::new(value))
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Empty => Kind::Empty,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns `true` for [`Value::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns the text content, if this is [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, if this is [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrows the object as `T`, if this is an object of that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => obj.downcast_ref(),
            _ => None,
        }
    }
}

impl ElementEq for Value {
    fn element_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => f.write_str("Empty"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Object(obj) => write!(f, "Object({:p})", Rc::as_ptr(obj).cast::<()>()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Empty, Into::into)
    }
}
