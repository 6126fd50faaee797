//! Property tests for scoring and selection.

use std::collections::BTreeSet;

use proptest::prelude::*;
use roadsafe_catalog::Catalog;
use roadsafe_core::InterventionRecord;
use roadsafe_retrieval::ranking::{score, score_record};
use roadsafe_retrieval::{ContextSelector, ScorerWeights};

const VOCAB: &[&str] = &[
    "pothole", "speeding", "school", "sign", "marking", "faded", "drain", "highway",
    "junction", "crossing", "lighting", "curve", "",
];

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(VOCAB).prop_map(str::to_string)
}

fn words(max: usize) -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(word(), 0..max)
}

fn record() -> impl Strategy<Value = (String, String, String, BTreeSet<String>, BTreeSet<String>)> {
    (word(), word(), word(), words(4), words(3))
}

fn catalog() -> impl Strategy<Value = Vec<InterventionRecord>> {
    prop::collection::vec(record(), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (problem_type, name, category, keywords, road_types))| InterventionRecord {
                id: (i + 1).to_string(),
                problem_type,
                category,
                name,
                description: String::new(),
                standard_code: "IRC".to_string(),
                clause: "1".to_string(),
                keywords,
                road_types,
                environments: BTreeSet::new(),
            })
            .collect()
    })
}

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..6).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_matches_are_positive_and_descending(records in catalog(), q in query()) {
        let matches = score(&q, &records, &ScorerWeights::default());
        prop_assert!(matches.iter().all(|m| m.score > 0));
        prop_assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn prop_ties_keep_catalog_order(records in catalog(), q in query()) {
        let matches = score(&q, &records, &ScorerWeights::default());
        for w in matches.windows(2) {
            if w[0].score == w[1].score {
                let a: usize = w[0].record.id.parse().unwrap();
                let b: usize = w[1].record.id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn prop_scoring_is_deterministic(records in catalog(), q in query()) {
        let weights = ScorerWeights::default();
        prop_assert_eq!(score(&q, &records, &weights), score(&q, &records, &weights));
    }

    #[test]
    fn prop_extending_query_never_lowers_score(records in catalog(), q in query(), extra in word()) {
        let weights = ScorerWeights::default();
        let base = q.to_lowercase();
        let extended = format!("{base} {extra}");
        for r in &records {
            prop_assert!(score_record(&extended, r, &weights) >= score_record(&base, r, &weights));
        }
    }

    #[test]
    fn prop_selection_respects_bounds(
        records in catalog(),
        q in query(),
        top_k in 1usize..8,
        fallback_k in 1usize..10,
        cite_k in 1usize..5,
    ) {
        let catalog = Catalog::from_records(records).unwrap();
        let matches = score(&q, catalog.records(), &ScorerWeights::default());
        let selector = ContextSelector { top_k, fallback_k, cite_k };
        let selection = selector.select(&matches, &catalog);

        if matches.is_empty() {
            prop_assert!(selection.used_fallback);
            prop_assert!(selection.citations.is_empty());
            prop_assert_eq!(selection.context.len(), fallback_k.min(catalog.len()));
        } else {
            prop_assert!(!selection.used_fallback);
            prop_assert_eq!(selection.context.len(), top_k.min(matches.len()));
            prop_assert_eq!(selection.citations.len(), cite_k.min(matches.len()));
            for (cited, m) in selection.citations.iter().zip(&matches) {
                prop_assert_eq!(&cited.id, &m.record.id);
            }
        }
    }
}
