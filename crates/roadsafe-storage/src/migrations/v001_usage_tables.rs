//! v001: usage_events + usage_citations.

use rusqlite::Connection;

use roadsafe_core::errors::RoadSafeResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RoadSafeResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS usage_events (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            query_text           TEXT NOT NULL,
            timestamp            TEXT NOT NULL,
            matched_count        INTEGER NOT NULL DEFAULT 0,
            response_latency_us  INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_usage_events_timestamp ON usage_events(timestamp);
        CREATE INDEX IF NOT EXISTS idx_usage_events_query ON usage_events(query_text);

        CREATE TABLE IF NOT EXISTS usage_citations (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id         INTEGER NOT NULL REFERENCES usage_events(id),
            position         INTEGER NOT NULL,
            intervention_id  TEXT NOT NULL DEFAULT '',
            name             TEXT NOT NULL DEFAULT '',
            problem_type     TEXT NOT NULL DEFAULT '',
            category         TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_usage_citations_event ON usage_citations(event_id);
        CREATE INDEX IF NOT EXISTS idx_usage_citations_problem ON usage_citations(problem_type);
        CREATE INDEX IF NOT EXISTS idx_usage_citations_category ON usage_citations(category);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
