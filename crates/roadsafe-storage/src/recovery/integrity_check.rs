//! PRAGMA integrity_check, run when a store is opened.

use rusqlite::Connection;

use roadsafe_core::errors::{RoadSafeResult, StorageError};

use crate::to_storage_err;

/// Run integrity check. Returns the problems reported, empty when healthy.
pub fn check_integrity(conn: &Connection) -> RoadSafeResult<Vec<String>> {
    let mut stmt = conn
        .prepare("PRAGMA integrity_check")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut problems = Vec::new();
    for row in rows {
        let line = row.map_err(|e| to_storage_err(e.to_string()))?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}

/// Fail with `CorruptionDetected` when the check reports anything.
pub fn ensure_healthy(conn: &Connection) -> RoadSafeResult<()> {
    let problems = check_integrity(conn)?;
    if problems.is_empty() {
        Ok(())
    } else {
        Err(StorageError::CorruptionDetected {
            details: problems.join("; "),
        }
        .into())
    }
}
