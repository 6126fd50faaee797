//! Aggregator and report helpers over an in-memory usage store.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use roadsafe_analytics::{
    build_report, compliance_checklist, priority_ranking, AnalyticsAggregator, Priority, Severity,
};
use roadsafe_catalog::{parse_catalog, Catalog};
use roadsafe_core::config::AnalyticsConfig;
use roadsafe_core::constants::{INTERVENTION_USAGE_LIMIT, PRIORITY_RANKING_LIMIT};
use roadsafe_core::models::{GroupField, MatchCitation, UsageEvent};
use roadsafe_core::traits::IUsageStorage;
use roadsafe_storage::StorageEngine;

fn catalog() -> Catalog {
    let json = test_fixtures::load_fixture_text(test_fixtures::SAMPLE_CATALOG);
    parse_catalog(&json, "fixture").unwrap()
}

fn setup() -> (Arc<StorageEngine>, AnalyticsAggregator, Catalog) {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let aggregator = AnalyticsAggregator::new(store.clone(), AnalyticsConfig::default());
    (store, aggregator, catalog())
}

/// Log one event citing the catalog records with the given ids.
fn log(store: &StorageEngine, catalog: &Catalog, query: &str, ids: &[&str]) {
    let records = ids.iter().map(|id| catalog.get(id).unwrap());
    store
        .append(&UsageEvent::from_records(query, Duration::from_millis(40), records))
        .unwrap();
}

#[test]
fn top_problem_types_across_events() {
    let (store, aggregator, catalog) = setup();
    log(&store, &catalog, "pothole", &["4"]);
    log(&store, &catalog, "pothole again", &["4"]);
    log(&store, &catalog, "faded lines", &["1"]);

    assert_eq!(aggregator.total_events().unwrap(), 3);
    let top = aggregator.top_by(GroupField::ProblemType, 5).unwrap();
    let pairs: Vec<_> = top.iter().map(|c| (c.value.as_str(), c.count)).collect();
    assert_eq!(pairs, [("Pothole", 2), ("Faded Marking", 1)]);
}

#[test]
fn dashboard_includes_catalog_size_and_limits() {
    let (store, aggregator, catalog) = setup();
    for (i, id) in ["1", "2", "3", "4", "5", "6", "7"].into_iter().enumerate() {
        log(&store, &catalog, &format!("query {i}"), &[id]);
    }

    let dashboard = aggregator.dashboard(&catalog).unwrap();
    assert_eq!(dashboard.catalog_size, 12);
    assert_eq!(dashboard.usage.total_events, 7);
    assert_eq!(dashboard.usage.top_problem_types.len(), 5);
    assert_eq!(dashboard.usage.top_categories.len(), 5);
    assert_eq!(dashboard.usage.top_interventions.len(), 7);
    assert_eq!(dashboard.usage.common_queries.len(), 7);
    assert_eq!(dashboard.usage.daily_counts.len(), 1);
    assert_eq!(dashboard.usage.daily_counts[0].count, 7);

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["catalog_size"], 12);
    assert_eq!(json["total_events"], 7);
}

#[test]
fn daily_window_is_inclusive_of_its_first_day() {
    let (store, aggregator, _) = setup();
    let event = UsageEvent::new("q", Duration::ZERO, vec![]);
    store.append_at(&event, Utc.with_ymd_and_hms(2026, 10, 11, 23, 59, 0).unwrap()).unwrap();
    store.append_at(&event, Utc.with_ymd_and_hms(2026, 10, 12, 0, 0, 0).unwrap()).unwrap();
    store.append_at(&event, Utc.with_ymd_and_hms(2026, 10, 19, 7, 0, 0).unwrap()).unwrap();

    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let days = aggregator.daily_counts_as_of(today, 7).unwrap();
    let dates: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, ["2026-10-12", "2026-10-19"]);

    let dashboard = aggregator.dashboard_as_of(&catalog(), today).unwrap();
    assert_eq!(dashboard.usage.daily_counts, days);
}

#[test]
fn intervention_usage_enriches_with_description() {
    let (store, aggregator, catalog) = setup();
    log(&store, &catalog, "q1", &["3", "9"]);
    log(&store, &catalog, "q2", &["9"]);
    store
        .append(&UsageEvent::new(
            "q3",
            Duration::ZERO,
            vec![roadsafe_core::MatchCitation {
                intervention_id: "99".to_string(),
                name: "Retired Treatment".to_string(),
                problem_type: "Legacy".to_string(),
                category: "Other".to_string(),
            }],
        ))
        .unwrap();

    let usage = aggregator.intervention_usage(&catalog, INTERVENTION_USAGE_LIMIT).unwrap();
    assert_eq!(usage[0].name, "Speed Limit Sign");
    assert_eq!(usage[0].count, 2);
    assert_eq!(usage[0].description, catalog.get("9").unwrap().description);
    let retired = usage.iter().find(|u| u.name == "Retired Treatment").unwrap();
    assert_eq!(retired.description, "No description available");
}

#[test]
fn report_assigns_priority_and_severity() {
    let (store, aggregator, catalog) = setup();
    for _ in 0..6 {
        log(&store, &catalog, "pothole", &["4"]);
    }
    for _ in 0..3 {
        log(&store, &catalog, "speeding", &["3"]);
    }
    log(&store, &catalog, "curve", &["11"]);

    let report = build_report(&aggregator).unwrap();
    assert_eq!(report.total_events, 10);

    let by_name = |name: &str| report.top_interventions.iter().find(|i| i.name == name).unwrap();
    assert_eq!(by_name("Pothole Repair").priority, Priority::High);
    assert_eq!(by_name("Pothole Repair").estimated_cost, "₹2,00,000 - ₹10,00,000");
    assert_eq!(by_name("Speed Hump").priority, Priority::Medium);
    assert_eq!(by_name("Chevron Sign").priority, Priority::Low);

    assert_eq!(report.problem_types[0].problem_type, "Pothole");
    assert_eq!(report.problem_types[0].severity, Severity::Critical);
    assert_eq!(report.problem_types[1].severity, Severity::High);
    assert_eq!(report.problem_types[2].severity, Severity::Medium);
    assert_eq!(report.categories.len(), 3);
}

#[test]
fn report_ranks_interventions_by_name_across_problem_types() {
    let (store, aggregator, _) = setup();
    for problem_type in ["Speeding", "Speeding", "Speeding", "Missing Sign", "Missing Sign", "Missing Sign"] {
        let citation = MatchCitation {
            intervention_id: "9".to_string(),
            name: "Speed Limit Sign".to_string(),
            problem_type: problem_type.to_string(),
            category: "Speed Management".to_string(),
        };
        store
            .append(&UsageEvent::new("speed sign", Duration::from_millis(10), vec![citation]))
            .unwrap();
    }

    // Split by problem type the counts are 3 and 3, both Medium.
    assert_eq!(aggregator.top_interventions(10).unwrap().len(), 2);

    let report = build_report(&aggregator).unwrap();
    assert_eq!(report.top_interventions.len(), 1);
    assert_eq!(report.top_interventions[0].name, "Speed Limit Sign");
    assert_eq!(report.top_interventions[0].count, 6);
    assert_eq!(report.top_interventions[0].priority, Priority::High);
}

#[test]
fn empty_log_reports_zero() {
    let (_, aggregator, catalog) = setup();
    let report = build_report(&aggregator).unwrap();
    assert_eq!(report.total_events, 0);
    assert!(report.top_interventions.is_empty());

    let dashboard = aggregator.dashboard(&catalog).unwrap();
    assert_eq!(dashboard.usage.total_events, 0);
    assert!(dashboard.usage.daily_counts.is_empty());
}

#[test]
fn checklist_covers_each_record() {
    let catalog = catalog();
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let records = [catalog.get("6").unwrap(), catalog.get("7").unwrap()];
    let checklist = compliance_checklist(records, date);

    assert_eq!(checklist.title, "Road Safety Compliance Checklist");
    assert_eq!(checklist.items.len(), 2);
    let drain = &checklist.items[0];
    assert_eq!(drain.intervention, "Side Drain");
    assert_eq!(drain.standard, "IRC:SP:50-2013 Clause 6.4");
    assert_eq!(drain.compliance_status, "Pending Review");
    assert_eq!(drain.priority, Priority::Low);
    assert_eq!(drain.estimated_timeline, "2-4 weeks");
    assert_eq!(checklist.items[1].priority, Priority::High);
}

#[test]
fn priority_ranking_takes_catalog_head() {
    let catalog = catalog();
    let ranking = priority_ranking(&catalog, PRIORITY_RANKING_LIMIT);
    assert_eq!(ranking.len(), 10);
    assert_eq!(ranking[0].record.id, "1");

    let lighting = ranking.iter().find(|r| r.record.category == "Lighting").unwrap();
    assert_eq!(lighting.priority, Priority::Medium);
    assert_eq!(lighting.estimated_cost, "₹50,000 - ₹2,00,000");
    assert_eq!(lighting.timeline, "2-4 weeks");

    let json = serde_json::to_value(&ranking[0]).unwrap();
    assert_eq!(json["name"], "Centre Line Marking");
    assert_eq!(json["priority"], "Medium");
}
