//! Grouped counts over the usage log.
//!
//! Equal counts are ordered by the lowest row id in the group, i.e. by first
//! appearance. Citation fields that are empty or whitespace are not counted;
//! query texts are grouped exactly as logged, blank ones included.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::warn;

use roadsafe_core::errors::RoadSafeResult;
use roadsafe_core::models::{
    DailyCount, FieldCount, GroupField, InterventionCount, QueryCount, SnapshotRequest,
    UsageSnapshot,
};

use crate::{sql_limit, to_storage_err};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite `TRIM` strips only spaces unless told otherwise: space, tab, LF, CR.
const WHITESPACE: &str = "char(32, 9, 10, 13)";

/// Number of logged events.
pub fn total_events(conn: &Connection) -> RoadSafeResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM usage_events", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(to_count(count))
}

/// Citation counts grouped by one field.
pub fn top_by(conn: &Connection, field: GroupField, limit: usize) -> RoadSafeResult<Vec<FieldCount>> {
    // `column()` is a fixed identifier, never user input.
    let col = field.column();
    let sql = format!(
        "SELECT {col}, COUNT(*) AS n, MIN(id) AS first_seen
         FROM usage_citations
         WHERE TRIM({col}, {WHITESPACE}) <> ''
         GROUP BY {col}
         ORDER BY n DESC, first_seen ASC
         LIMIT ?1"
    );
    collect_rows(conn, &sql, sql_limit(limit), |row| {
        Ok(FieldCount {
            value: row.get(0)?,
            count: to_count(row.get(1)?),
        })
    })
}

/// Citation counts grouped by (name, problem type, category).
pub fn top_interventions(conn: &Connection, limit: usize) -> RoadSafeResult<Vec<InterventionCount>> {
    let sql = format!(
        "SELECT name, problem_type, category, COUNT(*) AS n, MIN(id) AS first_seen
         FROM usage_citations
         WHERE TRIM(name, {WHITESPACE}) <> ''
         GROUP BY name, problem_type, category
         ORDER BY n DESC, first_seen ASC
         LIMIT ?1"
    );
    collect_rows(
        conn,
        &sql,
        sql_limit(limit),
        |row| {
            Ok(InterventionCount {
                name: row.get(0)?,
                problem_type: row.get(1)?,
                category: row.get(2)?,
                count: to_count(row.get(3)?),
            })
        },
    )
}

/// Events per UTC calendar day for days on or after `since`, oldest first.
pub fn daily_counts(conn: &Connection, since: NaiveDate) -> RoadSafeResult<Vec<DailyCount>> {
    let rows: Vec<(String, i64)> = collect_rows(
        conn,
        "SELECT substr(timestamp, 1, 10) AS day, COUNT(*) AS n
         FROM usage_events
         WHERE timestamp >= ?1
         GROUP BY day
         ORDER BY day ASC",
        since.format(DATE_FORMAT).to_string(),
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(rows
        .into_iter()
        .filter_map(|(day, n)| match NaiveDate::parse_from_str(&day, DATE_FORMAT) {
            Ok(date) => Some(DailyCount {
                date,
                count: to_count(n),
            }),
            Err(_) => {
                warn!(day = %day, "skipping usage events with malformed timestamp");
                None
            }
        })
        .collect())
}

/// Exact, case-sensitive query text counts. Every logged event belongs to
/// exactly one group.
pub fn most_common_queries(conn: &Connection, limit: usize) -> RoadSafeResult<Vec<QueryCount>> {
    collect_rows(
        conn,
        "SELECT query_text, COUNT(*) AS n, MIN(id) AS first_seen
         FROM usage_events
         GROUP BY query_text
         ORDER BY n DESC, first_seen ASC
         LIMIT ?1",
        sql_limit(limit),
        |row| {
            Ok(QueryCount {
                query_text: row.get(0)?,
                count: to_count(row.get(1)?),
            })
        },
    )
}

/// Every aggregate inside one read transaction, so all figures agree.
pub fn snapshot(conn: &Connection, request: &SnapshotRequest) -> RoadSafeResult<UsageSnapshot> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let snapshot = UsageSnapshot {
        total_events: total_events(&tx)?,
        top_problem_types: top_by(&tx, GroupField::ProblemType, request.top_limit)?,
        top_categories: top_by(&tx, GroupField::Category, request.top_limit)?,
        top_interventions: top_interventions(&tx, request.top_interventions_limit)?,
        top_names: top_by(&tx, GroupField::Name, request.top_names_limit)?,
        daily_counts: daily_counts(&tx, request.daily_since)?,
        common_queries: most_common_queries(&tx, request.common_queries_limit)?,
    };

    tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
    Ok(snapshot)
}

fn collect_rows<P, T, F>(conn: &Connection, sql: &str, param: P, map: F) -> RoadSafeResult<Vec<T>>
where
    P: rusqlite::ToSql,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![param], map)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        match row {
            Ok(value) => out.push(value),
            Err(e) => warn!(error = %e, "skipping malformed usage row"),
        }
    }
    Ok(out)
}

fn to_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}
