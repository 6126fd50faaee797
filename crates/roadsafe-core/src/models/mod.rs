pub mod analytics;
pub mod usage;

pub use analytics::{
    DailyCount, FieldCount, GroupField, InterventionCount, QueryCount, SnapshotRequest,
    UsageSnapshot,
};
pub use usage::{EventId, MatchCitation, StoredUsageEvent, UsageEvent};
