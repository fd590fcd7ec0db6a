//! Configuration file support for gomoderator.
//!
//! Provides YAML-based configuration through `gomoderator.config.yml` files,
//! including data structures, file loading, and validation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::reconciliation::domain::ResolutionStrategy;
use crate::reconciliation::services::MalformedRecordPolicy;
use crate::shared::error::ReconcileError;
use crate::shared::Result;

/// File name looked up in the plugin directory when no `--config` is given.
pub const CONFIG_FILENAME: &str = "gomoderator.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub go_binary: Option<String>,
    pub strategies: Option<Vec<ResolutionStrategy>>,
    pub exclude_modules: Option<Vec<String>>,
    pub malformed_records: Option<MalformedRecordPolicy>,
    pub format: Option<OutputFormat>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ReconcileError::ConfigError {
        path: path.to_path_buf(),
        details: format!("Failed to read file: {}", e),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReconcileError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(path, &config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if matches!(config.strategies.as_deref(), Some([])) {
        return Err(ReconcileError::ConfigError {
            path: path.to_path_buf(),
            details: "'strategies' must list at least one of: require-edit, fetch-upgrade"
                .to_string(),
        }
        .into());
    }

    if let Some(binary) = &config.go_binary {
        if binary.trim().is_empty() {
            return Err(ReconcileError::ConfigError {
                path: path.to_path_buf(),
                details: "'go_binary' must not be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
