//! # roadsafe-generation
//!
//! Turns a query and its grounding context into advisory text through a
//! local Ollama server.

pub mod ollama;
pub mod prompt;

pub use ollama::OllamaGenerator;
pub use prompt::{build_prompt, load_system_prompt};
