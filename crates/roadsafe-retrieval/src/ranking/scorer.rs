//! Containment scorer.
//!
//! A catalog field scores when it occurs, case-insensitively, inside the
//! query (never the reverse). Fields that are empty or whitespace never match.

use roadsafe_core::InterventionRecord;

/// Points awarded per matching field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerWeights {
    pub problem_type: u32,
    pub name: u32,
    pub category: u32,
    /// Per matching keyword.
    pub keyword: u32,
    /// Per matching road type.
    pub road_type: u32,
    /// Per matching environment.
    pub environment: u32,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            problem_type: 10,
            name: 8,
            category: 5,
            keyword: 2,
            road_type: 3,
            environment: 3,
        }
    }
}

/// A record paired with its score for one query. Lives only for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub record: &'a InterventionRecord,
    pub score: u32,
}

/// Score every record against `query`.
///
/// Returns only records scoring above zero, highest first. Equal scores keep
/// catalog order.
pub fn score<'a>(
    query: &str,
    records: &'a [InterventionRecord],
    weights: &ScorerWeights,
) -> Vec<ScoredMatch<'a>> {
    let query = query.to_lowercase();
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ScoredMatch<'a>> = records
        .iter()
        .filter_map(|record| {
            let score = score_record(&query, record, weights);
            (score > 0).then_some(ScoredMatch { record, score })
        })
        .collect();

    // `sort_by` is stable: ties stay in catalog order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Score one record against an already lower-cased query.
pub fn score_record(query_lower: &str, record: &InterventionRecord, weights: &ScorerWeights) -> u32 {
    let mut score = 0;

    if occurs_in(query_lower, &record.problem_type) {
        score += weights.problem_type;
    }
    if occurs_in(query_lower, &record.name) {
        score += weights.name;
    }
    if occurs_in(query_lower, &record.category) {
        score += weights.category;
    }
    score += weights.keyword * count_in(query_lower, record.keywords.iter());
    score += weights.road_type * count_in(query_lower, record.road_types.iter());
    score += weights.environment * count_in(query_lower, record.environments.iter());

    score
}

fn occurs_in(query_lower: &str, field: &str) -> bool {
    !field.trim().is_empty() && query_lower.contains(&field.to_lowercase())
}

fn count_in<'a, I>(query_lower: &str, values: I) -> u32
where
    I: Iterator<Item = &'a String>,
{
    values.filter(|v| occurs_in(query_lower, v)).count() as u32
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn pothole() -> InterventionRecord {
        InterventionRecord {
            id: "1".to_string(),
            problem_type: "pothole".to_string(),
            category: "Road Maintenance".to_string(),
            name: "Pothole Repair".to_string(),
            description: String::new(),
            standard_code: "IRC:82-2015".to_string(),
            clause: "5.1".to_string(),
            keywords: set(&["pothole", "repair"]),
            road_types: BTreeSet::new(),
            environments: BTreeSet::new(),
        }
    }

    #[test]
    fn problem_type_and_keyword_contribute() {
        let records = vec![pothole()];
        let matches = score("there is a pothole on the road", &records, &ScorerWeights::default());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 12);
    }

    #[test]
    fn containment_is_case_insensitive() {
        let records = vec![pothole()];
        let matches = score("POTHOLE REPAIR needed", &records, &ScorerWeights::default());
        // problem_type 10 + name 8 + keywords 2 * 2
        assert_eq!(matches[0].score, 22);
    }

    #[test]
    fn query_inside_field_does_not_match() {
        let records = vec![pothole()];
        assert!(score("pot", &records, &ScorerWeights::default()).is_empty());
    }

    #[test]
    fn empty_fields_never_match() {
        let mut record = pothole();
        record.problem_type = String::new();
        record.category = " ".to_string();
        record.keywords = set(&["", "repair"]);
        let q = "please repair this";
        assert_eq!(score_record(q, &record, &ScorerWeights::default()), 2);
    }

    #[test]
    fn blank_query_matches_nothing() {
        let mut record = pothole();
        record.environments = set(&[" "]);
        let records = vec![record];
        assert!(score("", &records, &ScorerWeights::default()).is_empty());
        assert!(score("   ", &records, &ScorerWeights::default()).is_empty());
    }
}
