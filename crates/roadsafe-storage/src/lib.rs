//! # roadsafe-storage
//!
//! Append-only SQLite log of resolved queries and the interventions cited for
//! each, plus the grouped reads the analytics layer is built on.
//!
//! One write connection serializes appends; file-backed stores read through a
//! round-robin pool of read-only connections so dashboards never wait on the
//! writer.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod recovery;

pub use engine::StorageEngine;

use roadsafe_core::errors::{RoadSafeError, StorageError};

/// Helper to convert a message into a RoadSafeError::StorageError.
pub(crate) fn to_storage_err(msg: String) -> RoadSafeError {
    StorageError::SqliteError { message: msg }.into()
}

/// Clamp a row limit into SQLite's signed integer range.
pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
