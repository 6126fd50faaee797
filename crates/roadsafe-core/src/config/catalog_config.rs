use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the intervention catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the processed catalog JSON.
    pub path: String,
    /// Accept a catalog with zero interventions instead of failing startup.
    pub allow_empty: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_CATALOG_PATH.to_string(),
            allow_empty: defaults::DEFAULT_ALLOW_EMPTY_CATALOG,
        }
    }
}
