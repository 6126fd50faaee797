//! The intervention record: one standardized road-safety remedy tied to a
//! regulatory clause.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog entry. Immutable once the catalog is built.
///
/// Accepts the processed-database key names (`intervention_id`,
/// `intervention_name`) as aliases, and numeric ids or clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionRecord {
    #[serde(alias = "intervention_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub problem_type: String,
    pub category: String,
    #[serde(alias = "intervention_name")]
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub standard_code: String,
    #[serde(deserialize_with = "string_or_number")]
    pub clause: String,
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    #[serde(default)]
    pub road_types: BTreeSet<String>,
    #[serde(default)]
    pub environments: BTreeSet<String>,
}

impl InterventionRecord {
    /// `"<standard_code> Clause <clause>"`, the way standards are cited.
    pub fn standard_reference(&self) -> String {
        format!("{} Clause {}", self.standard_code, self.clause)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Deserialize a JSON string or number into its string form.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Str(s) => s,
        StringOrNumber::Int(i) => i.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_processed_database_keys() {
        let json = r#"{
            "intervention_id": 7,
            "problem_type": "Faded Marking",
            "category": "Road Marking",
            "intervention_name": "Edge Line",
            "description": "Continuous edge line",
            "standard_code": "IRC:35-2015",
            "clause": 3.2,
            "keywords": ["edge", "line", "edge"]
        }"#;
        let record: InterventionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.name, "Edge Line");
        assert_eq!(record.clause, "3.2");
        assert_eq!(record.keywords.len(), 2);
        assert!(record.road_types.is_empty());
        assert!(record.environments.is_empty());
        assert_eq!(record.standard_reference(), "IRC:35-2015 Clause 3.2");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{"id": "1", "problem_type": "x", "category": "y"}"#;
        assert!(serde_json::from_str::<InterventionRecord>(json).is_err());
    }
}
