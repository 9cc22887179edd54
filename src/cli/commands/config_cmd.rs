//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::{Config, GlobalConfig, PathsConfig};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Known configuration keys.
const KEYS: &[&str] = &["format", "debug", "paths.show_children"];

/// `config list --json` output.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    loaded_from: Option<&'a Path>,
    values: BTreeMap<&'static str, String>,
}

/// Get a configuration value (defaults applied).
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = value_of(&ctx.config, key)?;

    if ctx.json() {
        output::print_json(&BTreeMap::from([(key, value)]))?;
    } else {
        output::print(value, ctx.verbosity);
    }

    Ok(())
}

/// Set a configuration value and write the config file.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut global = ctx.config.global.clone();
    apply(&mut global, key, value)?;

    let path = target_path(ctx)?;
    Config::write_to(&path, &global)
        .with_context(|| format!("Failed to write config {}", path.display()))?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let listing = listing(&ctx.config)?;
    if let Ok(target) = target_path(ctx) {
        output::debug(format!("config set writes to {}", target.display()), ctx.verbosity);
    }

    if ctx.json() {
        output::print_json(&listing)?;
        return Ok(());
    }

    match listing.loaded_from {
        Some(path) => output::print(format!("# Loaded from {}", path.display()), ctx.verbosity),
        None => output::print("# Defaults (no config file)", ctx.verbosity),
    }
    for key in KEYS {
        output::print(format!("{} = {}", key, listing.values[key]), ctx.verbosity);
    }

    Ok(())
}

fn listing(config: &Config) -> Result<Listing<'_>> {
    let values: BTreeMap<_, _> = KEYS
        .iter()
        .map(|&key| Ok((key, value_of(config, key)?)))
        .collect::<Result<_>>()?;

    Ok(Listing {
        loaded_from: config.loaded_from(),
        values,
    })
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    Ok(match key {
        "format" => config.format().to_string(),
        "debug" => config.debug().to_string(),
        "paths.show_children" => config.show_children().to_string(),
        _ => bail!("Unknown configuration key: {}", key),
    })
}

fn apply(global: &mut GlobalConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "format" => global.format = Some(value.to_string()),
        "debug" => global.debug = Some(parse_bool(value)?),
        "paths.show_children" => {
            global
                .paths
                .get_or_insert_with(PathsConfig::default)
                .show_children = Some(parse_bool(value)?);
        }
        _ => bail!("Unknown configuration key: {}", key),
    }

    global.validate()?;
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    value
        .parse()
        .with_context(|| format!("Expected 'true' or 'false', got '{}'", value))
}

/// Where `config set` writes: `--config`, else the loaded file, else the
/// canonical location.
fn target_path(ctx: &Context) -> Result<PathBuf> {
    if let Some(path) = &ctx.config_path {
        return Ok(path.clone());
    }
    if let Some(path) = ctx.config.loaded_from() {
        return Ok(path.to_path_buf());
    }
    Ok(Config::global_config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_known_keys() {
        let mut global = GlobalConfig::default();
        apply(&mut global, "format", "json").unwrap();
        apply(&mut global, "debug", "true").unwrap();
        apply(&mut global, "paths.show_children", "false").unwrap();

        assert_eq!(global.format.as_deref(), Some("json"));
        assert_eq!(global.debug, Some(true));
        assert_eq!(global.paths.and_then(|p| p.show_children), Some(false));
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut global = GlobalConfig::default();
        assert!(apply(&mut global, "trunk", "main").is_err());
    }

    #[test]
    fn apply_rejects_invalid_values() {
        let mut global = GlobalConfig::default();
        assert!(apply(&mut global, "format", "yaml").is_err());
        assert!(apply(&mut global, "debug", "maybe").is_err());
    }

    #[test]
    fn listing_covers_every_key() {
        let config = Config::default();
        let listing = listing(&config).unwrap();
        assert!(listing.loaded_from.is_none());
        assert_eq!(listing.values.len(), KEYS.len());

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["values"]["format"], "text");
        assert_eq!(json["values"]["paths.show_children"], "true");
        assert!(json["loaded_from"].is_null());
    }

    #[test]
    fn values_have_defaults() {
        let config = Config::default();
        assert_eq!(value_of(&config, "format").unwrap(), "text");
        assert_eq!(value_of(&config, "debug").unwrap(), "false");
        assert_eq!(value_of(&config, "paths.show_children").unwrap(), "true");
        assert!(value_of(&config, "nope").is_err());
    }
}
