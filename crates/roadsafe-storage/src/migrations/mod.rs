//! Versioned schema migrations, tracked in `schema_version`.

mod v001_usage_tables;

use rusqlite::{params, Connection};
use tracing::info;

use roadsafe_core::errors::{RoadSafeResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> RoadSafeResult<()>;

const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[(1, "usage_tables", v001_usage_tables::migrate)];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded version. Returns the
/// number applied.
pub fn run_migrations(conn: &Connection) -> RoadSafeResult<usize> {
    ensure_version_table(conn)?;
    let current = current_version(conn)?;
    let mut applied = 0;

    for (version, name, migrate) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        migrate(&tx).map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;

        info!(version, name, "migration applied");
        applied += 1;
    }
    Ok(applied)
}

/// Recorded schema version; 0 for a fresh database.
pub fn current_version(conn: &Connection) -> RoadSafeResult<u32> {
    ensure_version_table(conn)?;
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn ensure_version_table(conn: &Connection) -> RoadSafeResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
