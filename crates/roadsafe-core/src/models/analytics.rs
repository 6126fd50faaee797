use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Citation field that usage can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    ProblemType,
    Category,
    /// Intervention name alone, across every problem type it was cited for.
    Name,
}

impl GroupField {
    /// Column holding this field in the citation table.
    pub fn column(self) -> &'static str {
        match self {
            GroupField::ProblemType => "problem_type",
            GroupField::Category => "category",
            GroupField::Name => "name",
        }
    }
}

/// Count of citations sharing one field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCount {
    pub value: String,
    pub count: usize,
}

/// Count of citations of one (name, problem type, category) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionCount {
    pub name: String,
    pub problem_type: String,
    pub category: String,
    pub count: usize,
}

/// Events logged on one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Number of events with exactly this query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCount {
    pub query_text: String,
    pub count: usize,
}

/// Limits for a combined aggregate read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotRequest {
    pub top_limit: usize,
    pub top_interventions_limit: usize,
    pub top_names_limit: usize,
    /// First calendar day included in the daily counts.
    pub daily_since: NaiveDate,
    pub common_queries_limit: usize,
}

/// Every aggregate, read from one consistent view of the usage log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub total_events: usize,
    pub top_problem_types: Vec<FieldCount>,
    pub top_categories: Vec<FieldCount>,
    pub top_interventions: Vec<InterventionCount>,
    /// Citation counts by intervention name.
    pub top_names: Vec<FieldCount>,
    pub daily_counts: Vec<DailyCount>,
    pub common_queries: Vec<QueryCount>,
}
