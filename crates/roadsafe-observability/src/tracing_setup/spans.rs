//! Span definitions for the request path: resolution, generation, usage recording.

/// Span around scoring and selection for one query.
#[macro_export]
macro_rules! resolve_span {
    ($query:expr) => {
        tracing::info_span!("roadsafe.resolve", query_len = $query.len())
    };
}

/// Span around one generation backend call.
#[macro_export]
macro_rules! generation_span {
    ($backend:expr) => {
        tracing::info_span!("roadsafe.generation", backend = %$backend)
    };
}

/// Span around one usage-log append.
#[macro_export]
macro_rules! usage_span {
    ($citations:expr) => {
        tracing::debug_span!("roadsafe.usage", citations = $citations)
    };
}

/// Span around a dashboard read.
#[macro_export]
macro_rules! dashboard_span {
    () => {
        tracing::info_span!("roadsafe.dashboard")
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RESOLVE: &str = "roadsafe.resolve";
    pub const GENERATION: &str = "roadsafe.generation";
    pub const USAGE: &str = "roadsafe.usage";
    pub const DASHBOARD: &str = "roadsafe.dashboard";
}
