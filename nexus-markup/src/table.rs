//! Table rows whose children are restricted to cells.

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::Node;

/// The two cell elements a row accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// A body cell, `<td>`.
    #[default]
    Data,
    /// A header cell, `<th>`.
    Header,
}

impl CellKind {
    /// Returns the element name.
    pub const fn tag(self) -> &'static str {
        match self {
            CellKind::Data => "td",
            CellKind::Header => "th",
        }
    }

    /// Maps an element name to a cell kind. Anything but `th` is a data
    /// cell.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "th" {
            CellKind::Header
        } else {
            CellKind::Data
        }
    }

    fn of(node: &Node) -> Option<Self> {
        match node.name() {
            "td" => Some(CellKind::Data),
            "th" => Some(CellKind::Header),
            _ => None,
        }
    }
}

/// A `<tr>` element.
///
/// ```
/// use nexus_markup::{CellKind, TableRow};
///
/// let mut row = TableRow::new();
/// row.add_cell("Name", CellKind::Header);
/// row.add_cell("Qty", CellKind::Header);
///
/// assert_eq!(row.cell_count(), 2);
/// assert_eq!(row.to_string(), "<tr><th>Name</th><th>Qty</th></tr>");
/// ```
#[derive(Debug)]
pub struct TableRow {
    node: Node,
}

impl TableRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self {
            node: Node::element("tr"),
        }
    }

    /// Appends a cell of `kind` holding `text` as stored.
    pub fn add_cell(&mut self, text: impl Into<String>, kind: CellKind) -> bool {
        self.push_cell(kind, Node::text(text))
    }

    /// Appends a cell of `kind` holding `text` with `&`, `<` and `>`
    /// replaced by entities.
    pub fn add_escaped_cell(&mut self, text: &str, kind: CellKind) -> bool {
        self.push_cell(kind, Node::escaped_text(text))
    }

    fn push_cell(&mut self, kind: CellKind, content: Node) -> bool {
        let mut cell = Node::element(kind.tag());
        if !cell.add_child(Rc::new(content)) {
            return false;
        }
        self.node.add_child(Rc::new(cell))
    }

    /// Appends an existing cell.
    ///
    /// Returns `false` unless `cell` is a `td` or `th` element.
    pub fn add_cell_node(&mut self, cell: Rc<Node>) -> bool {
        if CellKind::of(&cell).is_none() {
            debug!(child = cell.name(), "row rejected a non-cell child");
            return false;
        }
        self.node.add_child(cell)
    }

    /// Returns the cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&Rc<Node>> {
        self.node.child(index)
    }

    /// Returns the number of cells.
    pub fn cell_count(&self) -> usize {
        self.node.child_count()
    }

    /// Iterates over the cells.
    pub fn cells(&self) -> impl Iterator<Item = &Rc<Node>> {
        self.node.children()
    }

    /// Returns the underlying `tr` element.
    pub fn as_node(&self) -> &Node {
        &self.node
    }

    /// Unwraps the row into its `tr` element.
    pub fn into_node(self) -> Node {
        self.node
    }
}

impl Default for TableRow {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node, f)
    }
}
