//! Degradation tracking: failures absorbed by a fallback instead of an error.

pub mod tracker;

pub use tracker::{DegradationEvent, DegradationTracker, RecoveryStatus, TrackedDegradation};
