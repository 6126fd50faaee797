use chrono::NaiveDate;

use crate::errors::RoadSafeResult;
use crate::models::{
    DailyCount, EventId, FieldCount, GroupField, InterventionCount, QueryCount, SnapshotRequest,
    StoredUsageEvent, UsageEvent, UsageSnapshot,
};

/// Append-only usage log + grouped reads.
///
/// Equal counts are ordered by first appearance in the log.
pub trait IUsageStorage: Send + Sync {
    // --- Write ---
    fn append(&self, event: &UsageEvent) -> RoadSafeResult<EventId>;

    // --- Read ---
    fn get_event(&self, id: EventId) -> RoadSafeResult<Option<StoredUsageEvent>>;
    /// Newest first.
    fn recent_events(&self, limit: usize) -> RoadSafeResult<Vec<StoredUsageEvent>>;

    // --- Aggregation ---
    fn total_events(&self) -> RoadSafeResult<usize>;
    fn top_by(&self, field: GroupField, limit: usize) -> RoadSafeResult<Vec<FieldCount>>;
    fn top_interventions(&self, limit: usize) -> RoadSafeResult<Vec<InterventionCount>>;
    /// Per-day counts for days on or after `since`, oldest first.
    fn daily_counts(&self, since: NaiveDate) -> RoadSafeResult<Vec<DailyCount>>;
    fn most_common_queries(&self, limit: usize) -> RoadSafeResult<Vec<QueryCount>>;
    fn snapshot(&self, request: &SnapshotRequest) -> RoadSafeResult<UsageSnapshot>;
}
