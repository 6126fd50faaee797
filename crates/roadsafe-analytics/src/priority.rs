//! Priority and severity bands shared by the report and planning helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Priority from how often an intervention has been recommended.
    pub fn from_usage_count(count: usize) -> Self {
        match count {
            c if c > 5 => Priority::High,
            c if c > 2 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Priority from an intervention category. Unknown categories are Medium.
    pub fn from_category(category: &str) -> Self {
        match category {
            "Traffic Signs" | "Pedestrian Facilities" | "Speed Management" => Priority::High,
            "Road Markings" | "Lighting" => Priority::Medium,
            "Drainage" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn cost_band(self) -> &'static str {
        match self {
            Priority::High => "₹2,00,000 - ₹10,00,000",
            Priority::Medium => "₹50,000 - ₹2,00,000",
            Priority::Low => "₹5,000 - ₹50,000",
        }
    }

    pub fn timeline(self) -> &'static str {
        match self {
            Priority::High => "1-2 weeks",
            Priority::Medium => "2-4 weeks",
            Priority::Low => "4-8 weeks",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(label)
    }
}

/// How pressing a problem type is, from its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    pub fn from_count(count: usize) -> Self {
        match count {
            c if c > 4 => Severity::Critical,
            c if c > 2 => Severity::High,
            _ => Severity::Medium,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
        };
        f.write_str(label)
    }
}
