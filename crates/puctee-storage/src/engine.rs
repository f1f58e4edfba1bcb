//! StorageEngine: owns the ConnectionPool, implements ITrustStorage and
//! exposes transactional access for read-modify-write callers.

use std::path::Path;

use rusqlite::Connection;

use puctee_core::config::StorageConfig;
use puctee_core::constants::MAX_BULK_BATCH_SIZE;
use puctee_core::errors::{PucteeError, PucteeResult};
use puctee_core::models::{TrustEvent, TrustRecord, UserId};
use puctee_core::traits::ITrustStorage;
use puctee_observability::tracing_setup::events;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::trust_ops;

/// The main storage engine. Owns the connection pool and provides
/// the full ITrustStorage interface.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk with default settings.
    pub fn open(path: &Path) -> PucteeResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> PucteeResult<Self> {
        Self::open_with_config(Path::new(&config.db_path), config)
    }

    pub fn open_with_config(path: &Path, config: &StorageConfig) -> PucteeResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open(path, config)?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> PucteeResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory(&StorageConfig::default())?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> PucteeResult<()> {
        self.pool.writer.with_conn_sync(migrations::run_migrations)
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub fn schema_version(&self) -> PucteeResult<u32> {
        self.pool.writer.with_conn_sync(migrations::current_version)
    }

    /// Run `f` inside one transaction on the writer.
    /// Commits on `Ok`, rolls back on `Err`.
    pub fn transaction<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        self.pool.writer.transaction(f)
    }

    /// Async variant of [`StorageEngine::transaction`] for use inside a runtime.
    pub async fn transaction_async<F, T>(&self, f: F) -> PucteeResult<T>
    where
        F: FnOnce(&Connection) -> PucteeResult<T>,
    {
        self.pool.writer.transaction_async(f).await
    }

    /// Remove a user's record and events. Returns `false` if none existed.
    pub fn delete_record(&self, user_id: UserId) -> PucteeResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| trust_ops::delete_record(conn, user_id))
    }

    pub fn count_records(&self) -> PucteeResult<usize> {
        self.pool.with_reader(trust_ops::count_records)
    }
}

impl ITrustStorage for StorageEngine {
    fn create_record(&self, user_id: UserId, initial_level: f64) -> PucteeResult<TrustRecord> {
        self.pool.writer.with_conn_sync(|conn| {
            let record = TrustRecord::with_initial_level(user_id, initial_level);
            if trust_ops::insert_record(conn, &record)? {
                events::trust_record_created(user_id, record.trust_level.value());
                return Ok(record);
            }
            trust_ops::get_record(conn, user_id)?
                .ok_or(PucteeError::TrustRecordNotFound { user_id })
        })
    }

    fn get_record(&self, user_id: UserId) -> PucteeResult<Option<TrustRecord>> {
        self.pool.with_reader(|conn| trust_ops::get_record(conn, user_id))
    }

    fn save_record(&self, record: &TrustRecord) -> PucteeResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| trust_ops::update_record(conn, record))
    }

    fn list_records(&self) -> PucteeResult<Vec<TrustRecord>> {
        self.pool.with_reader(trust_ops::list_records)
    }

    fn ensure_records(&self, user_ids: &[UserId], initial_level: f64) -> PucteeResult<usize> {
        let mut created = 0;
        for chunk in user_ids.chunks(MAX_BULK_BATCH_SIZE) {
            created += self.transaction(|conn| {
                let mut n: usize = 0;
                for &user_id in chunk {
                    let record = TrustRecord::with_initial_level(user_id, initial_level);
                    if trust_ops::insert_record(conn, &record)? {
                        events::trust_record_created(user_id, record.trust_level.value());
                        n += 1;
                    }
                }
                Ok(n)
            })?;
        }
        Ok(created)
    }

    fn reset_all(&self, initial_level: f64) -> PucteeResult<usize> {
        let count = self
            .pool
            .writer
            .with_conn_sync(|conn| trust_ops::reset_all(conn, initial_level))?;
        events::records_reset(count, initial_level);
        Ok(count)
    }

    fn append_event(&self, event: &TrustEvent) -> PucteeResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| trust_ops::insert_event(conn, event))
    }

    fn recent_events(&self, user_id: UserId, limit: usize) -> PucteeResult<Vec<TrustEvent>> {
        self.pool.with_reader(|conn| trust_ops::recent_events(conn, user_id, limit))
    }
}
