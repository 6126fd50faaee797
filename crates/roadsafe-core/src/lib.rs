//! # roadsafe-core
//!
//! Foundation crate for the road-safety intervention matcher.
//! Defines the intervention record, usage-log models, storage and generator
//! traits, errors, config, and constants. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intervention;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RoadSafeConfig;
pub use errors::{RoadSafeError, RoadSafeResult};
pub use intervention::InterventionRecord;
pub use models::{EventId, GroupField, MatchCitation, StoredUsageEvent, UsageEvent};
