//! Raw sheet ingestion: turns spreadsheet rows into intervention records,
//! inferring keywords, road types, and environments from the free text.

use std::collections::BTreeSet;
use std::path::Path;

use roadsafe_core::errors::CatalogError;
use roadsafe_core::intervention::string_or_number;
use roadsafe_core::InterventionRecord;
use serde::Deserialize;
use tracing::info;

use crate::catalog::Catalog;

/// Terms lifted into keywords whenever they occur in a description.
const COMMON_TERMS: &[&str] = &[
    "speed",
    "pedestrian",
    "crossing",
    "school",
    "hospital",
    "stop",
    "warning",
    "mandatory",
    "informatory",
    "prohibitory",
    "urban",
    "rural",
    "highway",
    "expressway",
    "residential",
    "commercial",
];

/// One row of the source spreadsheet, with its original column names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInterventionRow {
    #[serde(rename = "S. No.", deserialize_with = "string_or_number")]
    pub serial: String,
    pub problem: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
    #[serde(deserialize_with = "string_or_number")]
    pub code: String,
    #[serde(deserialize_with = "string_or_number")]
    pub clause: String,
}

impl RawInterventionRow {
    pub fn into_record(self) -> InterventionRecord {
        let keywords = extract_keywords(&self.problem, &self.kind, &self.data);
        let road_types = infer_road_types(&self.data, &self.category);
        let environments = infer_environments(&self.data);
        InterventionRecord {
            id: self.serial,
            problem_type: self.problem,
            category: self.category,
            name: self.kind,
            description: self.data,
            standard_code: self.code,
            clause: self.clause,
            keywords,
            road_types,
            environments,
        }
    }
}

/// Lower-cased words of the problem and intervention type, plus every
/// common term found in the description.
pub fn extract_keywords(problem: &str, kind: &str, description: &str) -> BTreeSet<String> {
    let mut keywords: BTreeSet<String> = problem
        .split_whitespace()
        .chain(kind.split_whitespace())
        .map(str::to_lowercase)
        .collect();

    let description = description.to_lowercase();
    keywords.extend(
        COMMON_TERMS
            .iter()
            .filter(|term| description.contains(*term))
            .map(|term| term.to_string()),
    );
    keywords
}

/// Road types the description mentions; falls back to what the category implies.
pub fn infer_road_types(description: &str, category: &str) -> BTreeSet<String> {
    let desc = description.to_lowercase();
    let mut road_types = BTreeSet::new();

    if desc.contains("urban") || desc.contains("city") {
        road_types.extend(owned(&["Urban Arterial", "Collector Road", "Local Street"]));
    }
    if desc.contains("highway") || desc.contains("expressway") || desc.contains("rural") {
        road_types.extend(owned(&["Highway", "Expressway", "Rural Road"]));
    }
    if desc.contains("residential") {
        road_types.insert("Residential Street".to_string());
    }
    if desc.contains("school") {
        road_types.extend(owned(&["School Zone", "Urban Arterial", "Collector Road"]));
    }

    if road_types.is_empty() {
        if category.contains("Road Sign") || category.contains("Road Marking") {
            road_types.insert("All Road Types".to_string());
        } else if category.contains("Traffic Calming") {
            road_types.extend(owned(&["Local Street", "Collector Road", "Residential Area"]));
        }
    }
    road_types
}

/// Surroundings the description mentions; `General` when none.
pub fn infer_environments(description: &str) -> BTreeSet<String> {
    let desc = description.to_lowercase();
    let mut environments = BTreeSet::new();

    for (needle, environment) in [
        ("school", "Near Schools"),
        ("hospital", "Near Hospitals"),
        ("residential", "Residential Area"),
        ("commercial", "Commercial Area"),
        ("pedestrian", "High Pedestrian Activity"),
    ] {
        if desc.contains(needle) {
            environments.insert(environment.to_string());
        }
    }
    if desc.contains("intersection") || desc.contains("crossing") {
        environments.insert("Intersections".to_string());
    }

    if environments.is_empty() {
        environments.insert("General".to_string());
    }
    environments
}

/// Build a validated catalog from raw rows, preserving row order.
pub fn process_rows(rows: Vec<RawInterventionRow>) -> Result<Catalog, CatalogError> {
    let records = rows.into_iter().map(RawInterventionRow::into_record).collect();
    Catalog::from_records(records)
}

/// Read a JSON export of the raw sheet and process it.
pub fn load_raw(path: &Path) -> Result<Catalog, CatalogError> {
    let source = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
        path: source.clone(),
        reason: e.to_string(),
    })?;
    let rows: Vec<RawInterventionRow> =
        serde_json::from_str(&content).map_err(|e| CatalogError::ParseFailed {
            path: source,
            reason: e.to_string(),
        })?;
    process_rows(rows)
}

/// Persist a catalog as processed JSON, readable by [`crate::load_catalog`].
pub fn write_processed(catalog: &Catalog, path: &Path) -> Result<(), CatalogError> {
    let target = path.display().to_string();
    let json =
        serde_json::to_string_pretty(catalog.records()).map_err(|e| CatalogError::WriteFailed {
            path: target.clone(),
            reason: e.to_string(),
        })?;
    std::fs::write(path, json).map_err(|e| CatalogError::WriteFailed {
        path: target.clone(),
        reason: e.to_string(),
    })?;

    info!(path = %target, interventions = catalog.len(), "processed catalog written");
    Ok(())
}

fn owned<'a>(values: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
    values.iter().map(|v| v.to_string())
}
