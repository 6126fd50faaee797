//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

pub fn fallback_context_used(context_records: usize) {
    tracing::info!(
        event = "fallback_context_used",
        context_records = context_records,
        "no catalog matches, using catalog head as context"
    );
}

pub fn usage_recorded(event_id: i64, citations: usize, latency_ms: u128) {
    tracing::debug!(
        event = "usage_recorded",
        event_id = event_id,
        citations = citations,
        latency_ms = latency_ms as u64,
        "usage recorded"
    );
}

/// Usage-log failures are logged here and never returned to the caller.
pub fn usage_write_failed(error: &str) {
    tracing::warn!(
        event = "usage_write_failed",
        error = %error,
        "usage event dropped"
    );
}

pub fn generation_failed(backend: &str, error: &str) {
    tracing::warn!(
        event = "generation_failed",
        backend = %backend,
        error = %error,
        "advisory generation failed"
    );
}

pub fn advisory_answered(matched: usize, cited: usize, latency_ms: u128) {
    tracing::info!(
        event = "advisory_answered",
        matched = matched,
        cited = cited,
        latency_ms = latency_ms as u64,
        "advisory answered"
    );
}

pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
