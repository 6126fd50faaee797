//! Single write connection behind a `std::sync::Mutex`.
//! Every append takes this lock, so writes never interleave.
//!
//! The lock is held only for the duration of one statement batch and works
//! the same from plain threads and from inside async tasks.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use roadsafe_core::config::StorageConfig;
use roadsafe_core::errors::RoadSafeResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, config: &StorageConfig) -> RoadSafeResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> RoadSafeResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, &StorageConfig::default())?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> RoadSafeResult<T>
    where
        F: FnOnce(&Connection) -> RoadSafeResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write lock poisoned: {e}")))?;
        f(&guard)
    }
}
