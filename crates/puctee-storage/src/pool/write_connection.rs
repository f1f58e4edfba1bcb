//! The single trust-store writer.
//!
//! Every mutation of `trust_records` and `trust_events` goes through here, so
//! a read-modify-write of one user's record holds this lock for its whole
//! transaction.

use std::path::Path;

use rusqlite::Connection;
use tokio::sync::Mutex;

use puctee_core::config::StorageConfig;
use puctee_core::errors::{PucteeResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the writer on `path`, or on a private in-memory database when `None`.
    pub fn open(path: Option<&Path>, config: &StorageConfig) -> PucteeResult<Self> {
        let conn = match path {
            Some(p) => Connection::open(p),
            None => Connection::open_in_memory(),
        }
        .map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub async fn with_conn<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }

    /// Blocking access. Must not be called from a tokio runtime thread.
    pub fn with_conn_sync<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        let guard = self.conn.blocking_lock();
        f(&guard)
    }

    /// Run `f` in one SQLite transaction. Commits on `Ok`, rolls back on `Err`.
    pub fn transaction<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        self.with_conn_sync(|conn| run_in_transaction(conn, f))
    }

    pub async fn transaction_async<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        self.with_conn(|conn| run_in_transaction(conn, f)).await
    }
}

fn run_in_transaction<F, T>(conn: &Connection, f: F) -> PucteeResult<T>
where
    F: FnOnce(&Connection) -> PucteeResult<T>,
{
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| StorageError::TransactionFailed {
            reason: e.to_string(),
        })?;
    // Dropping `tx` on the error path rolls back.
    let value = f(&tx)?;
    tx.commit().map_err(|e| StorageError::TransactionFailed {
        reason: e.to_string(),
    })?;
    Ok(value)
}
