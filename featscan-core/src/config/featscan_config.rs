//! Top-level featscan configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, ParserConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "featscan.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Host overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FEATSCAN_*`)
/// 3. Project config (`featscan.toml` in project root)
/// 4. User config (`~/.featscan/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FeatscanConfig {
    pub parser: ParserConfig,
    pub catalog: CatalogConfig,
}

/// Overrides supplied by the embedding tool (CLI flags, editor settings).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tolerant: Option<bool>,
    pub max_source_bytes: Option<u64>,
    pub features: Option<Vec<String>>,
}

impl FeatscanConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): host overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        ::tracing::debug!(root = %root.display(), "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &FeatscanConfig) -> Result<(), ConfigError> {
        if config.parser.max_source_bytes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "parser.max_source_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.parser.max_diagnostics == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "parser.max_diagnostics".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let catalog = &config.catalog;
        for (field, ids) in [
            ("catalog.enabled", &catalog.enabled),
            ("catalog.disabled", &catalog.disabled),
            ("catalog.editions", &catalog.editions),
        ] {
            if ids.iter().any(|id| id.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "entries must not be empty".to_string(),
                });
            }
        }
        if let Some(id) = catalog.enabled.iter().find(|id| catalog.disabled.contains(id)) {
            return Err(ConfigError::ValidationFailed {
                field: "catalog".to_string(),
                message: format!("feature '{id}' is both enabled and disabled"),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut FeatscanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FeatscanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it carries a value.
    fn merge(base: &mut FeatscanConfig, other: &FeatscanConfig) {
        // Parser
        if other.parser.tolerant.is_some() {
            base.parser.tolerant = other.parser.tolerant;
        }
        if other.parser.max_source_bytes.is_some() {
            base.parser.max_source_bytes = other.parser.max_source_bytes;
        }
        if other.parser.max_diagnostics.is_some() {
            base.parser.max_diagnostics = other.parser.max_diagnostics;
        }

        // Catalog
        if !other.catalog.enabled.is_empty() {
            base.catalog.enabled = other.catalog.enabled.clone();
        }
        if !other.catalog.disabled.is_empty() {
            base.catalog.disabled = other.catalog.disabled.clone();
        }
        if !other.catalog.editions.is_empty() {
            base.catalog.editions = other.catalog.editions.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FEATSCAN_TOLERANT`, `FEATSCAN_MAX_SOURCE_BYTES`, etc.
    fn apply_env_overrides(config: &mut FeatscanConfig) {
        if let Ok(val) = std::env::var("FEATSCAN_TOLERANT") {
            if let Ok(v) = val.parse::<bool>() {
                config.parser.tolerant = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FEATSCAN_MAX_SOURCE_BYTES") {
            if let Ok(v) = val.parse::<u64>() {
                config.parser.max_source_bytes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FEATSCAN_FEATURES") {
            config.catalog.enabled = split_list(&val);
        }
        if let Ok(val) = std::env::var("FEATSCAN_DISABLED_FEATURES") {
            config.catalog.disabled = split_list(&val);
        }
    }

    /// Apply host overrides (highest priority).
    fn apply_overrides(config: &mut FeatscanConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.tolerant {
            config.parser.tolerant = Some(v);
        }
        if let Some(v) = overrides.max_source_bytes {
            config.parser.max_source_bytes = Some(v);
        }
        if let Some(ref v) = overrides.features {
            config.catalog.enabled = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Comma-separated list, blanks dropped.
fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the user config path: `~/.featscan/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|h| PathBuf::from(h).join(".featscan").join("config.toml"))
}
