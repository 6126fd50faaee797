use serde::{Deserialize, Serialize};

use super::defaults;

/// Bounds applied when turning matches into context and citations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Highest-scored matches handed to the generator.
    pub top_k: usize,
    /// Catalog records handed to the generator when nothing matched.
    pub fallback_k: usize,
    /// Highest-scored matches shown to the user as citations.
    pub cite_k: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            fallback_k: defaults::DEFAULT_FALLBACK_K,
            cite_k: defaults::DEFAULT_CITE_K,
        }
    }
}
