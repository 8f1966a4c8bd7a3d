//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config <FILE>` or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Description used by `setup` when none is given on the command line.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults { description: None },
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `--config <FILE>` must exist and parse; the default
    /// location is optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))
            }
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    let text = std::fs::read_to_string(&path).with_context(|| {
                        format!("Failed to read config file {}", path.display())
                    })?;
                    toml::from_str(&text)
                        .with_context(|| format!("Failed to parse config file {}", path.display()))
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.siteforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "siteforge", "siteforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".siteforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_description_is_empty() {
        assert!(AppConfig::default().defaults.description.is_none());
    }

    #[test]
    fn parse_partial_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [defaults]
            description = "Community site"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.description.as_deref(), Some("Community site"));
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn load_missing_explicit_file_errors() {
        let missing = PathBuf::from("/nonexistent/siteforge.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
