//! Read-only connections for record and event lookups. Under WAL they never
//! wait on the writer.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::{Connection, OpenFlags};

use puctee_core::config::{defaults::MAX_READ_POOL_SIZE, StorageConfig};
use puctee_core::errors::PucteeResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

pub struct ReadPool {
    connections: Vec<std::sync::Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `config.read_pool_size` connections, clamped to 1..=`MAX_READ_POOL_SIZE`.
    /// The file must already exist.
    pub fn open(path: &Path, config: &StorageConfig) -> PucteeResult<Self> {
        let size = config.read_pool_size.clamp(1, MAX_READ_POOL_SIZE);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            apply_read_pragmas(&conn, config)?;
            connections.push(std::sync::Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Run `f` on the next connection, round-robin.
    pub fn with_conn<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| to_storage_err(format!("read pool lock poisoned: {e}")))?;
        f(&guard)
    }
}
