//! cli
//!
//! Command-line interface layer for cmdgraph.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call into [`crate::core`] for all path handling.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::logging;
use crate::ui::output::{Format, Verbosity};
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Per-invocation settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Output format
    pub format: Format,
    /// Loaded configuration
    pub config: Config,
    /// Explicit config file from `--config`
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Build a context from flags and loaded config.
    pub fn new(cli: &Cli, config: Config) -> Self {
        let debug = cli.debug || config.debug();
        Self {
            verbosity: Verbosity::from_flags(cli.quiet, debug),
            format: Format::select(cli.json, cli.format, config.format()),
            config,
            config_path: cli.config.clone(),
        }
    }

    pub fn json(&self) -> bool {
        self.format == Format::Json
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = load_config(&cli)?;
    logging::init(logging::level_for(cli.quiet, cli.debug || config.debug()));

    let ctx = Context::new(&cli, config);
    tracing::debug!(command = ?cli.command, "dispatching");

    commands::dispatch(cli.command, &ctx)
}

/// Load config from `--config` if given, else from the default locations.
///
/// A `--config` file that does not exist yet is treated as empty so that
/// `config set` can create it.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) if path.exists() => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        Some(_) => Ok(Config::default()),
        None => Config::load().context("Failed to load config"),
    }
}
