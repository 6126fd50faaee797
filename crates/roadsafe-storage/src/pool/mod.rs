//! Connection pool managing the write connection and the read connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use roadsafe_core::config::StorageConfig;
use roadsafe_core::errors::RoadSafeResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single writer plus the read pool, both shareable across threads.
pub struct ConnectionPool {
    pub writer: Arc<WriteConnection>,
    pub readers: Option<Arc<ReadPool>>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open the writer for `path`. Readers are attached with
    /// [`ConnectionPool::attach_readers`] once the schema exists.
    pub fn open(path: &Path, config: &StorageConfig) -> RoadSafeResult<Self> {
        let writer = Arc::new(WriteConnection::open(path, config)?);
        Ok(Self {
            writer,
            readers: None,
            db_path: Some(path.to_path_buf()),
        })
    }

    /// In-memory databases are private to one connection, so there is no
    /// read pool: reads go through the writer.
    pub fn open_in_memory() -> RoadSafeResult<Self> {
        let writer = Arc::new(WriteConnection::open_in_memory()?);
        Ok(Self {
            writer,
            readers: None,
            db_path: None,
        })
    }

    /// Open `config.read_pool_size` read-only connections to the same file.
    pub fn attach_readers(&mut self, config: &StorageConfig) -> RoadSafeResult<()> {
        if let Some(path) = &self.db_path {
            self.readers = Some(Arc::new(ReadPool::open(path, config)?));
        }
        Ok(())
    }
}
