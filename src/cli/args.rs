//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the default search
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output
//! - `--format <text|json>`: Output format, overriding the `format` config key

use crate::ui::output::Format;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmdgraph - Resolve object paths in the command graph
#[derive(Parser, Debug)]
#[command(name = "cmdgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON (same as `--format json`)
    #[arg(long, global = true, conflicts_with = "format")]
    pub json: bool,

    /// Output format, overriding the configured default
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a path to an object or a command call
    #[command(
        name = "resolve",
        long_about = "Resolve a dotted path against the command graph.\n\n\
            Each segment is either an object kind reachable from the previous \
            segment, optionally narrowed with a [selector], or a command name. \
            A command name ends the path.",
        after_help = "\
EXAMPLES:
    # The layout of the second screen
    cmdgraph resolve 'screen[1].layout'

    # A command on a named group
    cmdgraph resolve 'group[work].info'

    # A command on the root
    cmdgraph resolve status

    # Address as JSON, for handing to another tool
    cmdgraph resolve --json 'window.group'"
    )]
    Resolve {
        /// Dotted path, e.g. `screen[1].layout`
        path: String,
    },

    /// List the object kinds reachable from a path
    #[command(
        name = "children",
        after_help = "\
EXAMPLES:
    # Kinds reachable from the root
    cmdgraph children

    # Kinds reachable from a window
    cmdgraph children window"
    )]
    Children {
        /// Dotted path (defaults to the root)
        path: Option<String>,
    },

    /// Print the adjacency table between object kinds
    Schema,

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    cmdgraph completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    cmdgraph completion zsh >> ~/.zshrc

    # Fish
    cmdgraph completion fish > ~/.config/fish/completions/cmdgraph.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cmdgraph", "resolve", "screen[1]", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        match cli.command {
            Command::Resolve { path } => assert_eq!(path, "screen[1]"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::try_parse_from(["cmdgraph", "schema", "--format", "text"]).unwrap();
        assert_eq!(cli.format, Some(Format::Text));
        assert!(!cli.json);
    }

    #[test]
    fn json_and_format_conflict() {
        assert!(Cli::try_parse_from(["cmdgraph", "--json", "--format", "text", "schema"]).is_err());
    }

    #[test]
    fn children_path_is_optional() {
        let cli = Cli::try_parse_from(["cmdgraph", "children"]).unwrap();
        assert!(matches!(cli.command, Command::Children { path: None }));
    }
}
