use serde::{Deserialize, Serialize};

use super::defaults;

/// Limits used when building the dashboard snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Rows in the top problem types and top categories lists.
    pub top_limit: usize,
    pub top_interventions_limit: usize,
    /// Trailing calendar window for daily counts.
    pub daily_window_days: u32,
    pub common_queries_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            top_limit: defaults::DEFAULT_TOP_LIMIT,
            top_interventions_limit: defaults::DEFAULT_TOP_INTERVENTIONS_LIMIT,
            daily_window_days: defaults::DEFAULT_DAILY_WINDOW_DAYS,
            common_queries_limit: defaults::DEFAULT_COMMON_QUERIES_LIMIT,
        }
    }
}
