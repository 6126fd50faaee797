//! Load the processed catalog JSON. Every failure here is fatal at startup.

use std::path::Path;

use roadsafe_core::errors::CatalogError;
use roadsafe_core::InterventionRecord;
use tracing::info;

use crate::catalog::Catalog;

/// Read and validate the catalog at `path`.
///
/// An empty catalog is rejected unless `allow_empty` is set.
pub fn load_catalog(path: &Path, allow_empty: bool) -> Result<Catalog, CatalogError> {
    let source = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
        path: source.clone(),
        reason: e.to_string(),
    })?;

    let catalog = parse_catalog(&content, &source)?;
    if catalog.is_empty() && !allow_empty {
        return Err(CatalogError::Empty { path: source });
    }

    info!(
        event = "catalog_loaded",
        path = %source,
        interventions = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a JSON array of records. `source` names the input in errors.
pub fn parse_catalog(json: &str, source: &str) -> Result<Catalog, CatalogError> {
    let records: Vec<InterventionRecord> =
        serde_json::from_str(json).map_err(|e| CatalogError::ParseFailed {
            path: source.to_string(),
            reason: e.to_string(),
        })?;
    Catalog::from_records(records)
}
