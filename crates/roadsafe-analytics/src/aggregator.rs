//! AnalyticsAggregator: grouped reads over the usage log.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use roadsafe_catalog::Catalog;
use roadsafe_core::config::AnalyticsConfig;
use roadsafe_core::errors::RoadSafeResult;
use roadsafe_core::models::{
    DailyCount, FieldCount, GroupField, InterventionCount, QueryCount, SnapshotRequest,
    UsageSnapshot,
};
use roadsafe_core::traits::IUsageStorage;

const NO_DESCRIPTION: &str = "No description available";

/// Dashboard payload: usage aggregates plus the catalog size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub catalog_size: usize,
    #[serde(flatten)]
    pub usage: UsageSnapshot,
}

/// How often one intervention was cited, with its catalog description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionUsage {
    pub name: String,
    pub problem_type: String,
    pub category: String,
    pub count: usize,
    pub description: String,
}

#[derive(Clone)]
pub struct AnalyticsAggregator {
    storage: Arc<dyn IUsageStorage>,
    config: AnalyticsConfig,
}

impl AnalyticsAggregator {
    pub fn new(storage: Arc<dyn IUsageStorage>, config: AnalyticsConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn total_events(&self) -> RoadSafeResult<usize> {
        self.storage.total_events()
    }

    pub fn top_by(&self, field: GroupField, limit: usize) -> RoadSafeResult<Vec<FieldCount>> {
        self.storage.top_by(field, limit)
    }

    pub fn top_interventions(&self, limit: usize) -> RoadSafeResult<Vec<InterventionCount>> {
        self.storage.top_interventions(limit)
    }

    /// Daily counts for the trailing window ending today (UTC).
    pub fn daily_counts(&self, window_days: u32) -> RoadSafeResult<Vec<DailyCount>> {
        self.daily_counts_as_of(Utc::now().date_naive(), window_days)
    }

    /// Daily counts for days on or after `today - window_days`.
    pub fn daily_counts_as_of(&self, today: NaiveDate, window_days: u32) -> RoadSafeResult<Vec<DailyCount>> {
        self.storage.daily_counts(window_start(today, window_days))
    }

    pub fn most_common_queries(&self, limit: usize) -> RoadSafeResult<Vec<QueryCount>> {
        self.storage.most_common_queries(limit)
    }

    /// All dashboard aggregates from one consistent read.
    pub fn dashboard(&self, catalog: &Catalog) -> RoadSafeResult<DashboardSnapshot> {
        self.dashboard_as_of(catalog, Utc::now().date_naive())
    }

    pub fn dashboard_as_of(&self, catalog: &Catalog, today: NaiveDate) -> RoadSafeResult<DashboardSnapshot> {
        let request = SnapshotRequest {
            top_limit: self.config.top_limit,
            top_interventions_limit: self.config.top_interventions_limit,
            top_names_limit: self.config.top_interventions_limit,
            daily_since: window_start(today, self.config.daily_window_days),
            common_queries_limit: self.config.common_queries_limit,
        };
        let usage = self.storage.snapshot(&request)?;
        debug!(total_events = usage.total_events, "dashboard snapshot built");
        Ok(DashboardSnapshot {
            catalog_size: catalog.len(),
            usage,
        })
    }

    pub(crate) fn storage_snapshot(&self, request: &SnapshotRequest) -> RoadSafeResult<UsageSnapshot> {
        self.storage.snapshot(request)
    }

    /// Most cited interventions, enriched with the catalog description.
    pub fn intervention_usage(&self, catalog: &Catalog, limit: usize) -> RoadSafeResult<Vec<InterventionUsage>> {
        let counts = self.storage.top_interventions(limit)?;
        Ok(counts
            .into_iter()
            .map(|c| {
                let description = catalog
                    .find_by_name(&c.name)
                    .map(|r| r.description.clone())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string());
                InterventionUsage {
                    name: c.name,
                    problem_type: c.problem_type,
                    category: c.category,
                    count: c.count,
                    description,
                }
            })
            .collect())
    }
}

/// First day of a trailing window. Saturates at the earliest representable date.
pub fn window_start(today: NaiveDate, window_days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MIN)
}
