//! core::types
//!
//! Strong types for command graph concepts.
//!
//! # Types
//!
//! - [`ObjectKind`] - One of the six addressable object kinds
//! - [`SelectorStep`] - A single `(kind, selector)` link in a node's address
//!
//! # Validation
//!
//! Object kinds are a closed set. Parsing an unknown kind name fails at
//! construction time, so a [`SelectorStep`] can never name a kind the graph
//! does not know about.
//!
//! # Examples
//!
//! ```
//! use cmdgraph::core::types::{ObjectKind, SelectorStep};
//!
//! let kind: ObjectKind = "screen".parse().unwrap();
//! assert_eq!(kind, ObjectKind::Screen);
//!
//! let step = SelectorStep::selected(ObjectKind::Screen, "1");
//! assert_eq!(step.to_string(), "screen[1]");
//!
//! assert!("desktop".parse::<ObjectKind>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown object kind: {0}")]
    UnknownObjectKind(String),
}

/// The kind of a container object in the command graph.
///
/// Kind names are lowercase on the wire and in rendered paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Bar,
    Group,
    Layout,
    Screen,
    Widget,
    Window,
}

impl ObjectKind {
    /// Every object kind, in canonical order.
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::Bar,
        ObjectKind::Group,
        ObjectKind::Layout,
        ObjectKind::Screen,
        ObjectKind::Widget,
        ObjectKind::Window,
    ];

    /// The lowercase name used in paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Bar => "bar",
            ObjectKind::Group => "group",
            ObjectKind::Layout => "layout",
            ObjectKind::Screen => "screen",
            ObjectKind::Widget => "widget",
            ObjectKind::Window => "window",
        }
    }

    /// Look up a kind by its exact lowercase name.
    ///
    /// Returns `None` for anything that is not one of the six kind names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl FromStr for ObjectKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TypeError::UnknownObjectKind(s.to_string()))
    }
}

impl AsRef<str> for ObjectKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One link of a node's address: the object kind plus an optional selector.
///
/// A missing selector means "the default instance of this kind" relative to
/// the parent (for example the current group or the focused window).
///
/// # Example
///
/// ```
/// use cmdgraph::core::types::{ObjectKind, SelectorStep};
///
/// assert_eq!(SelectorStep::bare(ObjectKind::Layout).to_string(), "layout");
/// assert_eq!(
///     SelectorStep::selected(ObjectKind::Group, "work").to_string(),
///     "group[work]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorStep {
    /// The object kind at this step.
    pub kind: ObjectKind,
    /// The selector, if any.
    pub selector: Option<String>,
}

impl SelectorStep {
    /// Create a step from a kind and optional selector.
    pub fn new(kind: ObjectKind, selector: Option<String>) -> Self {
        Self { kind, selector }
    }

    /// Create a step with no selector.
    pub fn bare(kind: ObjectKind) -> Self {
        Self::new(kind, None)
    }

    /// Create a step with a selector.
    pub fn selected(kind: ObjectKind, selector: impl Into<String>) -> Self {
        Self::new(kind, Some(selector.into()))
    }
}

impl fmt::Display for SelectorStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selector {
            Some(selector) => write!(f, "{}[{}]", self.kind, selector),
            None => write!(f, "{}", self.kind),
        }
    }
}
