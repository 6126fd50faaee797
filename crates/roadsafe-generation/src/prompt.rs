//! Prompt assembly and system prompt loading.

use std::path::Path;

use roadsafe_core::constants::DEFAULT_SYSTEM_PROMPT;
use tracing::{debug, warn};

const ANALYSIS_INSTRUCTION: &str =
    "Please analyze the road safety problem and recommend appropriate interventions from the database above.";

/// Context block, then the user query, then the analysis instruction.
pub fn build_prompt(query: &str, context: &str) -> String {
    format!("\n{context}\n\nUSER QUERY: {query}\n\n{ANALYSIS_INSTRUCTION}\n")
}

/// Read the system prompt file, falling back to the built-in preamble when
/// it cannot be read.
pub fn load_system_prompt(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(prompt) => {
            debug!(path = %path.display(), chars = prompt.len(), "system prompt loaded");
            prompt
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "system prompt unavailable, using default");
            DEFAULT_SYSTEM_PROMPT.to_string()
        }
    }
}
