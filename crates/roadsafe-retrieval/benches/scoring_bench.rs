//! Benchmarks for scoring and full resolution over a synthetic catalog.

use std::collections::BTreeSet;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roadsafe_catalog::Catalog;
use roadsafe_core::config::SelectionConfig;
use roadsafe_core::InterventionRecord;
use roadsafe_retrieval::ranking::score;
use roadsafe_retrieval::{RetrievalEngine, ScorerWeights};

const PROBLEMS: &[&str] = &["Pothole", "Faded Marking", "Missing Sign", "Speeding", "Waterlogging"];

fn synthetic_catalog(n: usize) -> Catalog {
    let records = (0..n)
        .map(|i| {
            let problem = PROBLEMS[i % PROBLEMS.len()];
            InterventionRecord {
                id: i.to_string(),
                problem_type: problem.to_string(),
                category: format!("Category {}", i % 7),
                name: format!("Intervention {i}"),
                description: "Placed at regular intervals along the carriageway".to_string(),
                standard_code: "IRC:67-2022".to_string(),
                clause: format!("{}.{}", i % 20, i % 5),
                keywords: problem.to_lowercase().split(' ').map(str::to_string).collect(),
                road_types: BTreeSet::from(["Highway".to_string()]),
                environments: BTreeSet::from(["General".to_string()]),
            }
        })
        .collect();
    Catalog::from_records(records).expect("synthetic catalog")
}

fn bench_score(c: &mut Criterion) {
    let catalog = synthetic_catalog(1_000);
    let weights = ScorerWeights::default();
    c.bench_function("score_1000_records", |b| {
        b.iter(|| {
            score(
                black_box("faded marking and potholes on the highway"),
                catalog.records(),
                &weights,
            )
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let engine = RetrievalEngine::new(Arc::new(synthetic_catalog(1_000)), SelectionConfig::default());
    c.bench_function("resolve_and_render_1000_records", |b| {
        b.iter(|| {
            let resolution = engine.resolve(black_box("missing sign near the highway"));
            resolution.context_text()
        })
    });
}

criterion_group!(benches, bench_score, bench_resolve);
criterion_main!(benches);
