//! Planning helpers driven by catalog records rather than usage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use roadsafe_catalog::Catalog;
use roadsafe_core::InterventionRecord;

use crate::priority::Priority;

const CHECKLIST_TITLE: &str = "Road Safety Compliance Checklist";
const PENDING_REVIEW: &str = "Pending Review";
const CHECKLIST_TIMELINE: &str = "2-4 weeks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub intervention: String,
    pub standard: String,
    pub category: String,
    pub compliance_status: String,
    pub priority: Priority,
    pub estimated_timeline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceChecklist {
    pub title: String,
    pub generated_date: NaiveDate,
    pub items: Vec<ChecklistItem>,
}

/// One checklist row per record, in the order given.
pub fn compliance_checklist<'a, I>(records: I, generated_date: NaiveDate) -> ComplianceChecklist
where
    I: IntoIterator<Item = &'a InterventionRecord>,
{
    ComplianceChecklist {
        title: CHECKLIST_TITLE.to_string(),
        generated_date,
        items: records
            .into_iter()
            .map(|r| ChecklistItem {
                intervention: r.name.clone(),
                standard: r.standard_reference(),
                category: r.category.clone(),
                compliance_status: PENDING_REVIEW.to_string(),
                priority: Priority::from_category(&r.category),
                estimated_timeline: CHECKLIST_TIMELINE.to_string(),
            })
            .collect(),
    }
}

/// A catalog record annotated with planning estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRanking {
    #[serde(flatten)]
    pub record: InterventionRecord,
    pub priority: Priority,
    pub estimated_cost: String,
    pub timeline: String,
}

/// Planning estimates for the first `limit` catalog records.
pub fn priority_ranking(catalog: &Catalog, limit: usize) -> Vec<PriorityRanking> {
    catalog
        .head(limit)
        .iter()
        .map(|record| {
            let priority = Priority::from_category(&record.category);
            PriorityRanking {
                record: record.clone(),
                priority,
                estimated_cost: priority.cost_band().to_string(),
                timeline: priority.timeline().to_string(),
            }
        })
        .collect()
}
