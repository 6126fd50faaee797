//! Catalog loading, validation, and raw-sheet ingestion.

use std::collections::BTreeSet;

use roadsafe_catalog::ingest::{self, RawInterventionRow};
use roadsafe_catalog::{load_catalog, parse_catalog, Catalog};
use roadsafe_core::errors::CatalogError;
use roadsafe_core::InterventionRecord;
use test_fixtures::{fixture_path, load_fixture, RAW_SHEET, SAMPLE_CATALOG};

fn record(id: &str) -> InterventionRecord {
    InterventionRecord {
        id: id.to_string(),
        problem_type: "Pothole".to_string(),
        category: "Road Maintenance".to_string(),
        name: format!("Repair {id}"),
        description: String::new(),
        standard_code: "IRC:82-2015".to_string(),
        clause: "5.1".to_string(),
        keywords: BTreeSet::new(),
        road_types: BTreeSet::new(),
        environments: BTreeSet::new(),
    }
}

#[test]
fn sample_catalog_loads_in_file_order() {
    let catalog = load_catalog(&fixture_path(SAMPLE_CATALOG), false).unwrap();
    assert_eq!(catalog.len(), 12);
    let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids[..3], ["1", "2", "3"]);
    assert_eq!(catalog.get("4").unwrap().name, "Pothole Repair");
    assert_eq!(catalog.find_by_name("Zebra Crossing").unwrap().id, "7");
}

#[test]
fn missing_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(&dir.path().join("nope.json"), true).unwrap_err();
    assert!(matches!(err, CatalogError::ReadFailed { .. }));
}

#[test]
fn corrupt_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"id\": \"1\", \"problem_type\": ").unwrap();
    let err = load_catalog(&path, true).unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailed { .. }));
}

#[test]
fn empty_catalog_needs_explicit_opt_in() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    assert!(matches!(
        load_catalog(&path, false).unwrap_err(),
        CatalogError::Empty { .. }
    ));
    let catalog = load_catalog(&path, true).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.head(8).is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::from_records(vec![record("1"), record("2"), record("1")]).unwrap_err();
    match err {
        CatalogError::DuplicateId { id, position } => {
            assert_eq!(id, "1");
            assert_eq!(position, 2);
        }
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

#[test]
fn blank_ids_are_rejected() {
    let err = Catalog::from_records(vec![record("1"), record("  ")]).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyId { position: 1 }));
}

#[test]
fn head_is_bounded_by_catalog_size() {
    let catalog = Catalog::from_records(vec![record("a"), record("b")]).unwrap();
    assert_eq!(catalog.head(8).len(), 2);
    assert_eq!(catalog.head(1)[0].id, "a");
}

#[test]
fn parse_defaults_missing_sets() {
    let json = r#"[{
        "id": "x1", "problem_type": "Pothole", "category": "Road Maintenance",
        "name": "Pothole Repair", "description": "", "standard_code": "IRC:82-2015",
        "clause": "5.1"
    }]"#;
    let catalog = parse_catalog(json, "<inline>").unwrap();
    let record = catalog.get("x1").unwrap();
    assert!(record.keywords.is_empty());
    assert!(record.road_types.is_empty());
    assert!(record.environments.is_empty());
}

#[test]
fn raw_sheet_ingests_with_inferred_fields() {
    let rows: Vec<RawInterventionRow> = load_fixture(RAW_SHEET);
    let catalog = ingest::process_rows(rows).unwrap();
    assert_eq!(catalog.len(), 3);

    let hump = catalog.get("1").unwrap();
    assert_eq!(hump.name, "Speed Hump");
    assert_eq!(hump.problem_type, "Speeding Vehicles");
    assert!(hump.keywords.contains("speeding"));
    assert!(hump.keywords.contains("hump"));
    assert!(hump.keywords.contains("school"));
    assert!(hump.keywords.contains("residential"));
    assert!(hump.road_types.contains("School Zone"));
    assert!(hump.road_types.contains("Residential Street"));
    assert!(hump.environments.contains("Near Schools"));
    assert!(hump.environments.contains("Residential Area"));

    let stop = catalog.get("2").unwrap();
    assert_eq!(stop.clause, "14.1");
    assert!(stop.road_types.contains("All Road Types"));
    assert!(stop.environments.contains("General"));

    let drain = catalog.get("3").unwrap();
    assert!(drain.road_types.is_empty());
}

#[test]
fn processed_catalog_roundtrips_through_disk() {
    let rows: Vec<RawInterventionRow> = load_fixture(RAW_SHEET);
    let catalog = ingest::process_rows(rows).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processed.json");
    ingest::write_processed(&catalog, &path).unwrap();

    let reloaded = load_catalog(&path, false).unwrap();
    assert_eq!(reloaded.records(), catalog.records());
}
