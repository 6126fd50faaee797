/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column rule printed between interventions in generation context text.
pub const CONTEXT_RULE_WIDTH: usize = 50;

/// Maximum characters of context text shown in a debug preview.
pub const DEBUG_PREVIEW_CHARS: usize = 500;

/// Number of matched names listed in a debug preview.
pub const DEBUG_SAMPLE_SIZE: usize = 3;

/// System prompt used when no prompt file is available.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a Road Safety Expert AI assistant.";

/// Catalog entries considered by the priority ranking report.
pub const PRIORITY_RANKING_LIMIT: usize = 10;

/// Rows returned by the intervention-usage breakdown.
pub const INTERVENTION_USAGE_LIMIT: usize = 15;
