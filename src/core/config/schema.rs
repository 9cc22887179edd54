//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! In order of precedence:
//! 1. `$CMDGRAPH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/cmdgraph/config.toml`
//! 3. `~/.cmdgraph/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `format` must name a
//! known output format).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// format = "json"
/// debug = false
///
/// [paths]
/// show_children = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default output format ("text" or "json")
    pub format: Option<String>,

    /// Enable debug logging by default
    pub debug: Option<bool>,

    /// Path display settings
    pub paths: Option<PathsConfig>,
}

impl GlobalConfig {
    /// Valid output formats.
    pub const VALID_FORMATS: &'static [&'static str] = &["text", "json"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if !Self::VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid format '{}', must be one of: {}",
                    format,
                    Self::VALID_FORMATS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Path display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// List reachable kinds when resolving an object
    pub show_children: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GlobalConfig::default();
        assert!(config.format.is_none());
        assert!(config.debug.is_none());
        assert!(config.paths.is_none());
    }

    #[test]
    fn valid_formats() {
        for format in GlobalConfig::VALID_FORMATS {
            let config = GlobalConfig {
                format: Some(format.to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn invalid_format() {
        let config = GlobalConfig {
            format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = GlobalConfig {
            format: Some("json".to_string()),
            debug: Some(true),
            paths: Some(PathsConfig {
                show_children: Some(false),
            }),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            format = "text"
            trunk = "main"
        "#;

        let result: Result<GlobalConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
