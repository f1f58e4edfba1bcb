//! Writer plus optional read pool for the trust store.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use rusqlite::Connection;

use puctee_core::config::StorageConfig;
use puctee_core::errors::PucteeResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases, which a second connection cannot see.
    pub readers: Option<ReadPool>,
}

impl ConnectionPool {
    /// Open a pool on a database file.
    /// The writer is opened first so the file exists for the read-only readers.
    pub fn open(path: &Path, config: &StorageConfig) -> PucteeResult<Self> {
        let writer = WriteConnection::open(Some(path), config)?;
        let readers = ReadPool::open(path, config)?;
        Ok(Self {
            writer,
            readers: Some(readers),
        })
    }

    /// Open a pool on a private in-memory database. Reads go through the writer.
    pub fn open_in_memory(config: &StorageConfig) -> PucteeResult<Self> {
        Ok(Self {
            writer: WriteConnection::open(None, config)?,
            readers: None,
        })
    }

    /// Run a read-only closure on a reader, or on the writer when there is none.
    pub fn with_reader<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn_sync(f),
        }
    }
}
