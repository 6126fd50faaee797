//! # roadsafe-analytics
//!
//! Read-side views over the usage log: the aggregates behind the dashboard,
//! report inputs for external renderers, and catalog-driven planning helpers
//! (compliance checklist, priority ranking).

pub mod aggregator;
pub mod checklist;
pub mod priority;
pub mod report;

pub use aggregator::{AnalyticsAggregator, DashboardSnapshot, InterventionUsage};
pub use checklist::{compliance_checklist, priority_ranking, ChecklistItem, ComplianceChecklist, PriorityRanking};
pub use priority::{Priority, Severity};
pub use report::{build_report, ProblemSeverity, RankedIntervention, ReportSummary};
