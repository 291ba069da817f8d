//! Layered configuration: TOML file over compiled-in defaults.

pub mod defaults;
mod hash_config;
mod observability_config;
mod storage_config;
mod store_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use hash_config::HashConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
pub use store_config::StoreConfig;

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub storage: StorageConfig,
    pub hash: HashConfig,
    pub store: StoreConfig,
    pub observability: ObservabilityConfig,
}

impl WeightsConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk and validate.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: display.clone(),
            },
            _ => ConfigError::ParseError {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no backend can operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hash.namespace.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "hash.namespace".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(bound) = self.storage.max_abs_weight {
            if !bound.is_finite() || bound <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "storage.max_abs_weight".to_string(),
                    message: format!("must be a positive finite number, got {bound}"),
                });
            }
        }
        Ok(())
    }
}
