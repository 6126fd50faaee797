//! Aggregates stay consistent with the log for arbitrary append sequences.

use std::collections::HashMap;
use std::time::Duration;

use proptest::prelude::*;
use roadsafe_core::models::{GroupField, MatchCitation, UsageEvent};
use roadsafe_core::traits::IUsageStorage;
use roadsafe_storage::StorageEngine;

const PROBLEMS: &[&str] = &["pothole", "faded marking", "missing sign", "speeding"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_single_citation_counts_sum_to_total(picks in prop::collection::vec(0usize..4, 0..40)) {
        let store = StorageEngine::open_in_memory().unwrap();
        let mut expected: HashMap<&str, usize> = HashMap::new();

        for &i in &picks {
            let problem = PROBLEMS[i];
            *expected.entry(problem).or_default() += 1;
            let citation = MatchCitation {
                intervention_id: i.to_string(),
                name: format!("Intervention {i}"),
                problem_type: problem.to_string(),
                category: "Category".to_string(),
            };
            store
                .append(&UsageEvent::new("q", Duration::from_millis(1), vec![citation]))
                .unwrap();
        }

        let top = store.top_by(GroupField::ProblemType, usize::MAX).unwrap();
        let total = store.total_events().unwrap();
        prop_assert_eq!(total, picks.len());
        prop_assert_eq!(top.iter().map(|c| c.count).sum::<usize>(), total);
        prop_assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        for c in &top {
            prop_assert_eq!(expected.get(c.value.as_str()).copied(), Some(c.count));
        }
    }
}
