//! StorageEngine: owns the ConnectionPool, runs migrations at open, and
//! implements IUsageStorage.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use tracing::{debug, info};

use roadsafe_core::config::StorageConfig;
use roadsafe_core::errors::RoadSafeResult;
use roadsafe_core::models::{
    DailyCount, EventId, FieldCount, GroupField, InterventionCount, QueryCount, SnapshotRequest,
    StoredUsageEvent, UsageEvent, UsageSnapshot,
};
use roadsafe_core::traits::IUsageStorage;

use crate::pool::ConnectionPool;
use crate::queries::{aggregation, usage_ops};
use crate::{migrations, recovery, to_storage_err};

pub struct StorageEngine {
    pool: ConnectionPool,
    /// File-backed stores read through the pool; in-memory stores read
    /// through the writer because a second in-memory connection is a
    /// different database.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Open (or create) the store at `config.db_path`, creating parent
    /// directories as needed.
    pub fn from_config(config: &StorageConfig) -> RoadSafeResult<Self> {
        let path = Path::new(&config.db_path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                to_storage_err(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        Self::open(path, config)
    }

    pub fn open(path: &Path, config: &StorageConfig) -> RoadSafeResult<Self> {
        let mut pool = ConnectionPool::open(path, config)?;
        pool.writer.with_conn_sync(initialize)?;
        pool.attach_readers(config)?;
        info!(path = %path.display(), readers = config.read_pool_size, "usage store opened");
        Ok(Self {
            pool,
            use_read_pool: true,
        })
    }

    pub fn open_in_memory() -> RoadSafeResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        pool.writer.with_conn_sync(initialize)?;
        Ok(Self {
            pool,
            use_read_pool: false,
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Append with an explicit timestamp instead of the current time.
    pub fn append_at(&self, event: &UsageEvent, timestamp: DateTime<Utc>) -> RoadSafeResult<EventId> {
        let id = self
            .pool
            .writer
            .with_conn_sync(|conn| usage_ops::insert_event(conn, event, timestamp))?;
        debug!(event_id = id, citations = event.citations.len(), "usage event appended");
        Ok(id)
    }

    pub fn schema_version(&self) -> RoadSafeResult<u32> {
        self.with_reader(migrations::current_version)
    }

    /// Problems reported by `PRAGMA integrity_check`, empty when healthy.
    pub fn integrity_problems(&self) -> RoadSafeResult<Vec<String>> {
        self.with_reader(recovery::check_integrity)
    }

    fn with_reader<F, T>(&self, f: F) -> RoadSafeResult<T>
    where
        F: FnOnce(&Connection) -> RoadSafeResult<T>,
    {
        match (&self.pool.readers, self.use_read_pool) {
            (Some(readers), true) => readers.with_conn(f),
            _ => self.pool.writer.with_conn_sync(f),
        }
    }
}

fn initialize(conn: &Connection) -> RoadSafeResult<()> {
    recovery::ensure_healthy(conn)?;
    migrations::run_migrations(conn)?;
    Ok(())
}

impl IUsageStorage for StorageEngine {
    fn append(&self, event: &UsageEvent) -> RoadSafeResult<EventId> {
        self.append_at(event, Utc::now())
    }

    fn get_event(&self, id: EventId) -> RoadSafeResult<Option<StoredUsageEvent>> {
        self.with_reader(|conn| usage_ops::get_event(conn, id))
    }

    fn recent_events(&self, limit: usize) -> RoadSafeResult<Vec<StoredUsageEvent>> {
        self.with_reader(|conn| usage_ops::recent_events(conn, limit))
    }

    fn total_events(&self) -> RoadSafeResult<usize> {
        self.with_reader(aggregation::total_events)
    }

    fn top_by(&self, field: GroupField, limit: usize) -> RoadSafeResult<Vec<FieldCount>> {
        self.with_reader(|conn| aggregation::top_by(conn, field, limit))
    }

    fn top_interventions(&self, limit: usize) -> RoadSafeResult<Vec<InterventionCount>> {
        self.with_reader(|conn| aggregation::top_interventions(conn, limit))
    }

    fn daily_counts(&self, since: NaiveDate) -> RoadSafeResult<Vec<DailyCount>> {
        self.with_reader(|conn| aggregation::daily_counts(conn, since))
    }

    fn most_common_queries(&self, limit: usize) -> RoadSafeResult<Vec<QueryCount>> {
        self.with_reader(|conn| aggregation::most_common_queries(conn, limit))
    }

    fn snapshot(&self, request: &SnapshotRequest) -> RoadSafeResult<UsageSnapshot> {
        self.with_reader(|conn| aggregation::snapshot(conn, request))
    }
}
