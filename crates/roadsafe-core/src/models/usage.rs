use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intervention::InterventionRecord;

/// Row id assigned by the usage store on append.
pub type EventId = i64;

/// An intervention surfaced to the user for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCitation {
    pub intervention_id: String,
    pub name: String,
    pub problem_type: String,
    pub category: String,
}

impl From<&InterventionRecord> for MatchCitation {
    fn from(record: &InterventionRecord) -> Self {
        Self {
            intervention_id: record.id.clone(),
            name: record.name.clone(),
            problem_type: record.problem_type.clone(),
            category: record.category.clone(),
        }
    }
}

/// One resolved query, as handed to the usage store.
/// The timestamp is assigned by the store at insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub query_text: String,
    pub response_latency: Duration,
    pub matched_count: usize,
    /// Citations in display order.
    pub citations: Vec<MatchCitation>,
}

impl UsageEvent {
    /// Build an event; `matched_count` is the number of citations.
    pub fn new(
        query_text: impl Into<String>,
        response_latency: Duration,
        citations: Vec<MatchCitation>,
    ) -> Self {
        Self {
            query_text: query_text.into(),
            response_latency,
            matched_count: citations.len(),
            citations,
        }
    }

    /// Build an event from the records cited to the user.
    pub fn from_records<'a, I>(query_text: impl Into<String>, response_latency: Duration, records: I) -> Self
    where
        I: IntoIterator<Item = &'a InterventionRecord>,
    {
        Self::new(
            query_text,
            response_latency,
            records.into_iter().map(MatchCitation::from).collect(),
        )
    }
}

/// A usage event read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUsageEvent {
    pub id: EventId,
    pub timestamp: DateTime<Utc>,
    pub event: UsageEvent,
}
