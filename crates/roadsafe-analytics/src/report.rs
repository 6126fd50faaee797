//! Report inputs for external PDF/spreadsheet renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roadsafe_core::errors::RoadSafeResult;
use roadsafe_core::models::{FieldCount, SnapshotRequest};

use crate::aggregator::AnalyticsAggregator;
use crate::priority::{Priority, Severity};

const REPORT_TOP_INTERVENTIONS: usize = 10;
const REPORT_TOP_GROUPS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedIntervention {
    pub name: String,
    pub count: usize,
    pub priority: Priority,
    pub estimated_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSeverity {
    pub problem_type: String,
    pub count: usize,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub total_events: usize,
    pub top_interventions: Vec<RankedIntervention>,
    pub problem_types: Vec<ProblemSeverity>,
    pub categories: Vec<FieldCount>,
}

/// Build the report summary from one consistent read of the usage log.
pub fn build_report(aggregator: &AnalyticsAggregator) -> RoadSafeResult<ReportSummary> {
    let generated_at = Utc::now();
    let usage = aggregator.storage_snapshot(&SnapshotRequest {
        top_limit: REPORT_TOP_GROUPS,
        top_interventions_limit: 0,
        top_names_limit: REPORT_TOP_INTERVENTIONS,
        // Only the grouped counts feed the report.
        daily_since: generated_at.date_naive(),
        common_queries_limit: 0,
    })?;

    Ok(ReportSummary {
        generated_at,
        total_events: usage.total_events,
        // Ranked by name alone, so citations under different problem types add up.
        top_interventions: usage
            .top_names
            .into_iter()
            .map(|i| {
                let priority = Priority::from_usage_count(i.count);
                RankedIntervention {
                    name: i.value,
                    count: i.count,
                    priority,
                    estimated_cost: priority.cost_band().to_string(),
                }
            })
            .collect(),
        problem_types: usage
            .top_problem_types
            .into_iter()
            .map(|p| ProblemSeverity {
                severity: Severity::from_count(p.count),
                problem_type: p.value,
                count: p.count,
            })
            .collect(),
        categories: usage.top_categories,
    })
}
