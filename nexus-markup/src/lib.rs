//! HTML-like node tree whose children live in a [`BoundedList`].
//!
//! Elements own a possibly bounded list of `Rc<Node>` children; text nodes
//! are leaves. [`TableRow`] is an element restricted to `td`/`th` cells.
//!
//! ```
//! use std::rc::Rc;
//! use nexus_markup::{CellKind, Node, TableRow};
//!
//! let mut row = TableRow::new();
//! row.add_cell("total", CellKind::Data);
//! assert!(!row.add_cell_node(Rc::new(Node::element("p"))));
//!
//! let mut table = Node::element("table");
//! table.add_child(Rc::new(row.into_node()));
//! assert_eq!(table.to_string(), "<table><tr><td>total</td></tr></table>");
//! ```
//!
//! [`BoundedList`]: nexus_bounded::BoundedList

#![warn(missing_docs)]

pub mod node;
pub mod table;

pub use node::{Node, TEXT_NODE_NAME, escape};
pub use table::{CellKind, TableRow};
