//! ui::logging
//!
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Levels
//!
//! - default: `warn`
//! - `--debug` (or `debug = true` in config): `debug`
//! - `--quiet`: `error`
//!
//! `CMDGRAPH_LOG` overrides the level with a full `EnvFilter` directive,
//! e.g. `CMDGRAPH_LOG=cmdgraph::core::graph=trace`.
//!
//! Log lines always go to stderr so stdout stays parseable.

use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "CMDGRAPH_LOG";

/// Pick the default level from CLI flags.
pub fn level_for(quiet: bool, debug: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
