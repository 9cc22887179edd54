//! ui
//!
//! User-facing output and logging.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`logging`] - Tracing subscriber setup
//!
//! # Design
//!
//! Command results go to stdout through [`output`]; diagnostics go to stderr
//! through `tracing`.

pub mod logging;
pub mod output;
