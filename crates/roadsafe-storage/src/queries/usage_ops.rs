//! Usage log writes and point reads.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

use roadsafe_core::errors::RoadSafeResult;
use roadsafe_core::models::{EventId, MatchCitation, StoredUsageEvent, UsageEvent};

use crate::{sql_limit, to_storage_err};

/// Stored timestamp layout. Lexicographic order is chronological order and
/// the first ten characters are the calendar date.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Insert an event and its citations in one transaction.
pub fn insert_event(
    conn: &Connection,
    event: &UsageEvent,
    timestamp: DateTime<Utc>,
) -> RoadSafeResult<EventId> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let latency_us = i64::try_from(event.response_latency.as_micros()).unwrap_or(i64::MAX);
    tx.execute(
        "INSERT INTO usage_events (query_text, timestamp, matched_count, response_latency_us)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            event.query_text,
            format_timestamp(timestamp),
            sql_limit(event.matched_count),
            latency_us,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    let event_id = tx.last_insert_rowid();

    {
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO usage_citations
                    (event_id, position, intervention_id, name, problem_type, category)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        for (position, citation) in event.citations.iter().enumerate() {
            stmt.execute(params![
                event_id,
                sql_limit(position),
                citation.intervention_id,
                citation.name,
                citation.problem_type,
                citation.category,
            ])
            .map_err(|e| to_storage_err(e.to_string()))?;
        }
    }

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(event_id)
}

struct EventRow {
    id: EventId,
    query_text: String,
    timestamp: String,
    matched_count: i64,
    latency_us: i64,
}

/// Fetch one event with its citations in display order.
pub fn get_event(conn: &Connection, id: EventId) -> RoadSafeResult<Option<StoredUsageEvent>> {
    let row = conn
        .query_row(
            "SELECT id, query_text, timestamp, matched_count, response_latency_us
             FROM usage_events WHERE id = ?1",
            params![id],
            |row| {
                Ok(EventRow {
                    id: row.get(0)?,
                    query_text: row.get(1)?,
                    timestamp: row.get(2)?,
                    matched_count: row.get(3)?,
                    latency_us: row.get(4)?,
                })
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match row {
        Some(row) => hydrate(conn, row),
        None => Ok(None),
    }
}

/// Most recent events first.
pub fn recent_events(conn: &Connection, limit: usize) -> RoadSafeResult<Vec<StoredUsageEvent>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = {
        let mut stmt = tx
            .prepare(
                "SELECT id, query_text, timestamp, matched_count, response_latency_us
                 FROM usage_events ORDER BY id DESC LIMIT ?1",
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        let mapped = stmt
            .query_map(params![sql_limit(limit)], |row| {
                Ok(EventRow {
                    id: row.get(0)?,
                    query_text: row.get(1)?,
                    timestamp: row.get(2)?,
                    matched_count: row.get(3)?,
                    latency_us: row.get(4)?,
                })
            })
            .map_err(|e| to_storage_err(e.to_string()))?;
        let mut rows = Vec::new();
        for row in mapped {
            match row {
                Ok(row) => rows.push(row),
                Err(e) => warn!(error = %e, "skipping malformed usage event row"),
            }
        }
        rows
    };

    let mut events = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(event) = hydrate(&tx, row)? {
            events.push(event);
        }
    }
    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(events)
}

/// Attach citations. Rows whose timestamp cannot be parsed are skipped.
fn hydrate(conn: &Connection, row: EventRow) -> RoadSafeResult<Option<StoredUsageEvent>> {
    let Some(timestamp) = parse_timestamp(&row.timestamp) else {
        warn!(event_id = row.id, raw = %row.timestamp, "skipping usage event with malformed timestamp");
        return Ok(None);
    };

    let mut stmt = conn
        .prepare_cached(
            "SELECT intervention_id, name, problem_type, category
             FROM usage_citations WHERE event_id = ?1 ORDER BY position",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let citations = stmt
        .query_map(params![row.id], |r| {
            Ok(MatchCitation {
                intervention_id: r.get(0)?,
                name: r.get(1)?,
                problem_type: r.get(2)?,
                category: r.get(3)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Some(StoredUsageEvent {
        id: row.id,
        timestamp,
        event: UsageEvent {
            query_text: row.query_text,
            response_latency: Duration::from_micros(u64::try_from(row.latency_us).unwrap_or(0)),
            matched_count: usize::try_from(row.matched_count).unwrap_or(0),
            citations,
        },
    }))
}
