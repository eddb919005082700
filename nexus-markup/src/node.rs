//! Element and text nodes.

use std::fmt;
use std::rc::Rc;

use nexus_bounded::{BoundedList, Capacity};
use tracing::debug;

/// Name reported by text nodes.
pub const TEXT_NODE_NAME: &str = "#text";

/// A markup node: either a named element owning a bounded list of children,
/// or a leaf holding text.
///
/// Children are shared as `Rc<Node>` and searched by identity, so two
/// structurally identical children are still distinct.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use nexus_markup::Node;
///
/// let mut ul = Node::element_with_limit("ul", 2);
/// let a = Rc::new(Node::element("li"));
///
/// assert!(ul.add_child(Rc::clone(&a)));
/// assert!(ul.add_child(Rc::new(Node::element("li"))));
/// assert!(!ul.add_child(Rc::new(Node::element("li"))));
///
/// assert_eq!(ul.index_of_child(&a), Some(0));
/// assert_eq!(ul.index_of_child(&Rc::new(Node::element("li"))), None);
/// ```
#[derive(Debug)]
pub struct Node {
    kind: NodeKind,
}

#[derive(Debug)]
enum NodeKind {
    Element {
        name: String,
        children: BoundedList<Rc<Node>>,
    },
    Text(String),
}

impl Node {
    /// Creates an element without a child limit.
    pub fn element(name: impl Into<String>) -> Self {
        Self::element_with_limit(name, Capacity::Unbounded)
    }

    /// Creates an element whose child count is bounded by `limit`.
    ///
    /// The limit is coerced like any list capacity: a positive integer
    /// bounds the children, anything else leaves them unbounded.
    pub fn element_with_limit(name: impl Into<String>, limit: impl Into<Capacity>) -> Self {
        Self {
            kind: NodeKind::Element {
                name: name.into(),
                children: BoundedList::new(limit),
            },
        }
    }

    /// Creates a text node. Text nodes never have children.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(content.into()),
        }
    }

    /// Creates a text node with `&`, `<` and `>` replaced by entities.
    pub fn escaped_text(content: &str) -> Self {
        Self::text(escape(content))
    }

    /// Returns the element name, or [`TEXT_NODE_NAME`] for text nodes.
    pub fn name(&self) -> &str {
        match &self.kind {
            NodeKind::Element { name, .. } => name,
            NodeKind::Text(_) => TEXT_NODE_NAME,
        }
    }

    /// Returns `true` for text nodes.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Returns the content of a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(content) => Some(content),
            NodeKind::Element { .. } => None,
        }
    }

    /// Returns the child limit, or `-1` for unbounded elements and text
    /// nodes.
    pub fn child_limit(&self) -> isize {
        match &self.kind {
            NodeKind::Element { children, .. } => children.max(),
            NodeKind::Text(_) => -1,
        }
    }

    /// Appends a child.
    ///
    /// Returns `false` if this is a text node or the child limit has been
    /// reached.
    pub fn add_child(&mut self, child: Rc<Node>) -> bool {
        match &mut self.kind {
            NodeKind::Element { name, children } => {
                let added = children.add(child);
                if !added {
                    debug!(element = %name, limit = children.max(), "child rejected: limit reached");
                }
                added
            }
            NodeKind::Text(_) => {
                debug!(child = child.name(), "child rejected: text nodes have no children");
                false
            }
        }
    }

    /// Returns the child at `index`.
    pub fn child(&self, index: usize) -> Option<&Rc<Node>> {
        self.child_list()?.get(index)
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.child_list().map_or(0, |children| children.len())
    }

    /// Iterates over the children. Empty for text nodes.
    pub fn children(&self) -> impl Iterator<Item = &Rc<Node>> {
        self.child_list().into_iter().flatten()
    }

    /// Returns the position of `child`, compared by identity.
    pub fn index_of_child(&self, child: &Rc<Node>) -> Option<usize> {
        self.child_list()?.index_of(child)
    }

    /// Removes the first occurrence of `child`, compared by identity.
    pub fn remove_child(&mut self, child: &Rc<Node>) -> bool {
        match &mut self.kind {
            NodeKind::Element { children, .. } => children.remove_element(child),
            NodeKind::Text(_) => false,
        }
    }

    /// Removes the child at `index`.
    pub fn remove_child_at(&mut self, index: usize) -> Option<Rc<Node>> {
        match &mut self.kind {
            NodeKind::Element { children, .. } => children.remove(index),
            NodeKind::Text(_) => None,
        }
    }

    fn child_list(&self) -> Option<&BoundedList<Rc<Node>>> {
        match &self.kind {
            NodeKind::Element { children, .. } => Some(children),
            NodeKind::Text(_) => None,
        }
    }
}

/// Renders the node as markup. Text is written as stored.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Text(content) => f.write_str(content),
            NodeKind::Element { name, children } => {
                write!(f, "<{name}>")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{name}>")
            }
        }
    }
}

/// Replaces `&`, `<` and `>` with their entities.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
