//! core::graph
//!
//! Command graph nodes and navigation.
//!
//! # Architecture
//!
//! The command graph is a tree grown on demand from a single root:
//! - [`Container`] nodes are either the root or an object of some
//!   [`ObjectKind`], optionally narrowed by a selector
//! - [`CallNode`] is a terminal leaf naming a command on its parent container
//! - Every non-root node holds a shared link to its parent; children are never
//!   stored, they are computed from the static schema
//!
//! # Invariants
//!
//! - Parent chains are finite and always end at the root
//! - A call is always a leaf: only containers expose [`Container::navigate`]
//! - Nodes are immutable once created
//!
//! # Example
//!
//! ```
//! use cmdgraph::core::graph::{Container, GraphNode};
//!
//! let screen = Container::Root.navigate("screen", Some("1")).unwrap();
//! let layout = screen.as_container().unwrap().navigate("layout", None).unwrap();
//! assert_eq!(layout.path(), "screen[1].layout");
//!
//! let call = layout.as_container().unwrap().navigate("next", None).unwrap();
//! assert!(matches!(call, GraphNode::Call(_)));
//! assert_eq!(call.path(), "screen[1].layout.next");
//! ```

use std::fmt;
use std::mem;
use std::sync::Arc;

use thiserror::Error;

use super::path::format_path;
use super::schema::{self, ROOT_CHILDREN};
use super::types::{ObjectKind, SelectorStep};

/// Errors from graph navigation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A selector was given for a name that is not a child kind here.
    #[error("given node is not an object: {name}")]
    NotAnObject { name: String },
}

/// A node that other nodes can be navigated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    /// The graph root.
    Root,
    /// An object of some kind.
    Object(Arc<ObjectNode>),
}

/// An object node: one instance of an [`ObjectKind`].
///
/// `Drop`, `PartialEq` and `Debug` walk the parent chain in a loop, so
/// arbitrarily deep chains never recurse.
pub struct ObjectNode {
    kind: ObjectKind,
    selector: Option<String>,
    parent: Container,
}

/// A terminal node naming a command to invoke on its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallNode {
    name: String,
    parent: Container,
}

/// Any node in the command graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphNode {
    Root,
    Object(Arc<ObjectNode>),
    Call(CallNode),
}

impl Container {
    /// Navigate from this container to a named child.
    ///
    /// - A name listed in [`children`](Self::children) produces a new object
    ///   node, with or without a selector.
    /// - Any other name with a selector fails with
    ///   [`GraphError::NotAnObject`].
    /// - Any other name without a selector produces a [`CallNode`].
    ///
    /// # Example
    ///
    /// ```
    /// use cmdgraph::core::graph::{Container, GraphError};
    ///
    /// let status = Container::Root.navigate("status", None).unwrap();
    /// assert_eq!(status.path(), "status");
    ///
    /// let err = Container::Root.navigate("status", Some("1")).unwrap_err();
    /// assert_eq!(err, GraphError::NotAnObject { name: "status".into() });
    /// ```
    pub fn navigate(&self, name: &str, selector: Option<&str>) -> Result<GraphNode, GraphError> {
        if let Some(kind) = schema::lookup(self.children(), name) {
            tracing::trace!(parent = ?self.object_kind(), %kind, ?selector, "navigate to object");
            return Ok(GraphNode::Object(Arc::new(ObjectNode {
                kind,
                selector: selector.map(str::to_string),
                parent: self.clone(),
            })));
        }

        if selector.is_some() {
            tracing::debug!(
                parent = ?self.object_kind(),
                command = name,
                ?selector,
                "selector on non-object"
            );
            return Err(GraphError::NotAnObject {
                name: name.to_string(),
            });
        }

        tracing::trace!(parent = ?self.object_kind(), command = name, "navigate to call");
        Ok(GraphNode::Call(CallNode {
            name: name.to_string(),
            parent: self.clone(),
        }))
    }

    /// Object kinds reachable one step from here.
    pub fn children(&self) -> &'static [ObjectKind] {
        match self {
            Container::Root => ROOT_CHILDREN,
            Container::Object(node) => node.children(),
        }
    }

    /// The parent container, or `None` for the root.
    pub fn parent(&self) -> Option<&Container> {
        match self {
            Container::Root => None,
            Container::Object(node) => Some(&node.parent),
        }
    }

    /// The object kind, or `None` for the root.
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            Container::Root => None,
            Container::Object(node) => Some(node.kind),
        }
    }

    /// The selector of this container, if any.
    pub fn selector(&self) -> Option<&str> {
        match self {
            Container::Root => None,
            Container::Object(node) => node.selector(),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Container::Root)
    }

    /// The selector chain from the root down to this container.
    pub fn selectors(&self) -> Vec<SelectorStep> {
        let mut steps = Vec::new();
        let mut current = self;

        while let Container::Object(node) = current {
            steps.push(SelectorStep::new(node.kind, node.selector.clone()));
            current = &node.parent;
        }

        steps.reverse();
        steps
    }

    /// The canonical path of this container. Empty for the root.
    pub fn path(&self) -> String {
        format_path(&self.selectors())
    }

    /// All ancestors, from the immediate parent up to and including the root.
    pub fn ancestors(&self) -> Vec<Container> {
        let mut result = Vec::new();
        let mut current = self.parent();

        while let Some(parent) = current {
            result.push(parent.clone());
            current = parent.parent();
        }

        result
    }

    /// Number of object links between the root and this container.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;

        while let Container::Object(node) = current {
            depth += 1;
            current = &node.parent;
        }

        depth
    }
}

impl ObjectNode {
    pub fn object_kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    pub fn parent(&self) -> &Container {
        &self.parent
    }

    /// Object kinds reachable from an object of this kind.
    pub fn children(&self) -> &'static [ObjectKind] {
        schema::children_of(self.kind)
    }
}

impl Drop for ObjectNode {
    fn drop(&mut self) {
        // Unlink uniquely owned ancestors one at a time. A shared ancestor
        // stays alive and is released by its last owner.
        let mut parent = mem::replace(&mut self.parent, Container::Root);

        while let Container::Object(node) = parent {
            match Arc::try_unwrap(node) {
                Ok(mut inner) => parent = mem::replace(&mut inner.parent, Container::Root),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for ObjectNode {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);

        loop {
            if a.kind != b.kind || a.selector != b.selector {
                return false;
            }
            match (&a.parent, &b.parent) {
                (Container::Root, Container::Root) => return true,
                (Container::Object(pa), Container::Object(pb)) => {
                    if Arc::ptr_eq(pa, pb) {
                        return true;
                    }
                    a = pa.as_ref();
                    b = pb.as_ref();
                }
                _ => return false,
            }
        }
    }
}

impl Eq for ObjectNode {}

impl fmt::Debug for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectNode")
            .field("kind", &self.kind)
            .field("selector", &self.selector)
            .field("parent", &self.parent.path())
            .finish()
    }
}

impl CallNode {
    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The container the command would be invoked on.
    pub fn parent(&self) -> &Container {
        &self.parent
    }

    /// The parent's selector chain; a call adds no step of its own.
    pub fn selectors(&self) -> Vec<SelectorStep> {
        self.parent.selectors()
    }

    /// The parent's path with the command name appended.
    pub fn path(&self) -> String {
        let parent_path = self.parent.path();
        if parent_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", parent_path, self.name)
        }
    }
}

impl GraphNode {
    /// The node as a container, or `None` for a call.
    pub fn as_container(&self) -> Option<Container> {
        match self {
            GraphNode::Root => Some(Container::Root),
            GraphNode::Object(node) => Some(Container::Object(Arc::clone(node))),
            GraphNode::Call(_) => None,
        }
    }

    /// The node as a call, or `None` for a container.
    pub fn as_call(&self) -> Option<&CallNode> {
        match self {
            GraphNode::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, GraphNode::Call(_))
    }

    /// The parent container, or `None` for the root.
    pub fn parent(&self) -> Option<&Container> {
        match self {
            GraphNode::Root => None,
            GraphNode::Object(node) => Some(&node.parent),
            GraphNode::Call(call) => Some(&call.parent),
        }
    }

    /// The object kind of an object node.
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            GraphNode::Object(node) => Some(node.kind),
            _ => None,
        }
    }

    /// The command name of a call node.
    pub fn name(&self) -> Option<&str> {
        self.as_call().map(CallNode::name)
    }

    /// Object kinds reachable from this node. Always empty for a call.
    pub fn children(&self) -> &'static [ObjectKind] {
        match self {
            GraphNode::Root => ROOT_CHILDREN,
            GraphNode::Object(node) => node.children(),
            GraphNode::Call(_) => &[],
        }
    }

    /// The selector chain from the root to this node.
    pub fn selectors(&self) -> Vec<SelectorStep> {
        match self {
            GraphNode::Call(call) => call.selectors(),
            _ => self
                .as_container()
                .map(|c| c.selectors())
                .unwrap_or_default(),
        }
    }

    /// The canonical path of this node.
    pub fn path(&self) -> String {
        match self {
            GraphNode::Call(call) => call.path(),
            _ => format_path(&self.selectors()),
        }
    }
}

impl From<Container> for GraphNode {
    fn from(container: Container) -> Self {
        match container {
            Container::Root => GraphNode::Root,
            Container::Object(node) => GraphNode::Object(node),
        }
    }
}
