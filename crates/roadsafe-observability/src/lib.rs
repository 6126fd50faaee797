//! # roadsafe-observability
//!
//! Tracing subscriber setup, span macros for the request path, structured
//! log events, and a tracker for failures that were suppressed rather than
//! surfaced to callers.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationEvent, DegradationTracker, RecoveryStatus, TrackedDegradation};
