use serde::{Deserialize, Serialize};

use super::defaults;

/// Advisory generation backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Model name, e.g. "llama3.1:8b".
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    /// Request timeout for a single generation call.
    pub timeout_secs: u64,
    /// Timeout for the `/api/tags` health check.
    pub health_check_timeout_secs: u64,
    /// File holding the instruction preamble sent as the system prompt.
    pub system_prompt_path: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_GENERATION_BASE_URL.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            top_p: defaults::DEFAULT_TOP_P,
            timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            health_check_timeout_secs: defaults::DEFAULT_HEALTH_CHECK_TIMEOUT_SECS,
            system_prompt_path: defaults::DEFAULT_SYSTEM_PROMPT_PATH.to_string(),
        }
    }
}
