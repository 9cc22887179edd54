//! cmdgraph - An addressable command graph
//!
//! cmdgraph turns short dotted paths such as `screen[1].layout` or
//! `group[work].info` into typed graph nodes: either a reference to an object
//! (a bar, group, layout, screen, widget or window, optionally narrowed by a
//! selector) or a command call on one. Clients never see object identities,
//! only paths.
//!
//! # Architecture
//!
//! - [`core`] - Object kinds, schema, graph nodes, path rendering and resolution
//! - [`cli`] - Command-line interface (parses args, prints resolved nodes)
//! - [`ui`] - Output formatting and logging setup
//!
//! # Correctness Invariants
//!
//! 1. Which kinds are reachable from which is fixed static schema
//! 2. A known kind always navigates to an object; an unknown name with a
//!    selector is an error; an unknown bare name is a command call
//! 3. Calls are leaves
//! 4. Rendering a node's path never fails
//!
//! # Example
//!
//! ```
//! use cmdgraph::core::graph::Container;
//!
//! let group = Container::Root.navigate("group", Some("work")).unwrap();
//! let info = group.as_container().unwrap().navigate("info", None).unwrap();
//! assert_eq!(info.path(), "group[work].info");
//! ```

pub mod cli;
pub mod core;
pub mod ui;
