//! core
//!
//! Core domain types, schema, and navigation for the command graph.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ObjectKind, SelectorStep
//! - [`schema`] - Static adjacency table between object kinds
//! - [`graph`] - Graph nodes and navigation
//! - [`path`] - Canonical path rendering and parsing
//! - [`resolve`] - Resolution of full addresses from the root
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The schema is static data, never mutated
//! - Nodes are immutable and share parent links
//! - Rendering is total; only navigation can fail

pub mod config;
pub mod graph;
pub mod path;
pub mod resolve;
pub mod schema;
pub mod types;
