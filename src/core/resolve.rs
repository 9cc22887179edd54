//! core::resolve
//!
//! Resolve a full client-supplied address into a graph node.
//!
//! # Lifecycle
//!
//! 1. Parse the textual path into segments ([`parse_path`])
//! 2. Navigate from the root one segment at a time
//! 3. Hand the resulting node (or its [`Address`]) to the caller
//!
//! A call can only appear as the last segment: a command name followed by
//! more segments is rejected rather than silently truncated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::graph::{Container, GraphError, GraphNode};
use super::path::{parse_path, PathError, PathSegment};
use super::types::SelectorStep;

/// Errors from resolving an address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("'{call}' is a command and cannot be followed by '{remaining}'")]
    CallNotTerminal { call: String, remaining: String },
}

/// Navigate from the root through each segment in turn.
///
/// # Example
///
/// ```
/// use cmdgraph::core::path::PathSegment;
/// use cmdgraph::core::resolve::resolve;
///
/// let node = resolve(&[
///     PathSegment::new("group", Some("work".into())),
///     PathSegment::new("info", None),
/// ])
/// .unwrap();
/// assert_eq!(node.path(), "group[work].info");
/// ```
pub fn resolve(segments: &[PathSegment]) -> Result<GraphNode, ResolveError> {
    let mut node = GraphNode::Root;

    for (index, segment) in segments.iter().enumerate() {
        let container = match node.as_container() {
            Some(container) => container,
            None => {
                let remaining = segments[index..]
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(".");
                return Err(ResolveError::CallNotTerminal {
                    call: node.path(),
                    remaining,
                });
            }
        };
        node = container.navigate(&segment.name, segment.selector.as_deref())?;
    }

    tracing::debug!(path = %node.path(), call = node.is_call(), "resolved address");
    Ok(node)
}

/// Parse and resolve a textual path.
///
/// # Example
///
/// ```
/// use cmdgraph::core::resolve::resolve_path;
///
/// let node = resolve_path("screen[1].layout").unwrap();
/// assert_eq!(node.path(), "screen[1].layout");
///
/// assert!(resolve_path("status[1]").is_err());
/// ```
pub fn resolve_path(input: &str) -> Result<GraphNode, ResolveError> {
    let segments = parse_path(input)?;
    resolve(&segments)
}

/// Resolve a path to the container it names, or `None` if it names a call.
pub fn resolve_container(input: &str) -> Result<Option<Container>, ResolveError> {
    Ok(resolve_path(input)?.as_container())
}

/// A serializable snapshot of a resolved node.
///
/// This is what gets handed to the object registry: the selector chain
/// locating the target object, plus the command name when the address
/// ends in a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Canonical path of the node.
    pub path: String,
    /// Selector chain from the root to the target object.
    pub selectors: Vec<SelectorStep>,
    /// Command name, if the node is a call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
}

impl GraphNode {
    /// Snapshot this node as an [`Address`].
    pub fn address(&self) -> Address {
        Address {
            path: self.path(),
            selectors: self.selectors(),
            call: self.name().map(str::to_string),
        }
    }
}

impl From<&GraphNode> for Address {
    fn from(node: &GraphNode) -> Self {
        node.address()
    }
}
