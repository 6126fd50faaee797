//! Top-level configuration with file + environment resolution.

mod analytics_config;
mod catalog_config;
pub mod defaults;
mod generation_config;
mod observability_config;
mod selection_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use analytics_config::AnalyticsConfig;
pub use catalog_config::CatalogConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ROADSAFE_*`)
/// 2. Config file passed to [`RoadSafeConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadSafeConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub selection: SelectionConfig,
    pub analytics: AnalyticsConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl RoadSafeConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a TOML file, apply `ROADSAFE_*` overrides, and validate.
    /// A missing file is not an error: defaults plus environment apply.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    /// Unparseable numeric values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ROADSAFE_CATALOG_PATH") {
            self.catalog.path = val;
        }
        if let Some(val) = lookup("ROADSAFE_DB_PATH") {
            self.storage.db_path = val;
        }
        if let Some(v) = lookup("ROADSAFE_READ_POOL_SIZE").and_then(|s| s.parse().ok()) {
            self.storage.read_pool_size = v;
        }
        if let Some(v) = lookup("ROADSAFE_TOP_K").and_then(|s| s.parse().ok()) {
            self.selection.top_k = v;
        }
        if let Some(v) = lookup("ROADSAFE_FALLBACK_K").and_then(|s| s.parse().ok()) {
            self.selection.fallback_k = v;
        }
        if let Some(v) = lookup("ROADSAFE_CITE_K").and_then(|s| s.parse().ok()) {
            self.selection.cite_k = v;
        }
        if let Some(val) = lookup("ROADSAFE_OLLAMA_URL") {
            self.generation.base_url = val;
        }
        if let Some(val) = lookup("ROADSAFE_MODEL") {
            self.generation.model = val;
        }
        if let Some(val) = lookup("ROADSAFE_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.read_pool_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("selection.top_k", self.selection.top_k),
            ("selection.fallback_k", self.selection.fallback_k),
            ("selection.cite_k", self.selection.cite_k),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if self.analytics.daily_window_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "analytics.daily_window_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::ValidationFailed {
                field: "generation.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.generation.top_p) {
            return Err(ConfigError::ValidationFailed {
                field: "generation.top_p".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }
}
