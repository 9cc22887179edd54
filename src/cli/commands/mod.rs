//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the core to resolve paths
//! 3. Formats and displays output
//!
//! Handlers never build graph nodes by hand; everything goes through
//! [`crate::core::resolve`].

mod children;
mod completion;
mod config_cmd;
mod resolve;
mod schema_cmd;

// Re-export command functions for testing and direct invocation
pub use children::children;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use resolve::resolve;
pub use schema_cmd::{render_schema, schema};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Resolve { path } => resolve::resolve(ctx, &path),
        Command::Children { path } => children::children(ctx, path.as_deref().unwrap_or("")),
        Command::Schema => schema_cmd::schema(ctx),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
