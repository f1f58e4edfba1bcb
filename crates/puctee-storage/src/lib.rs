//! # puctee-storage
//!
//! SQLite persistence for trust records and their audit trail.
//! Single write connection, pooled readers, `PRAGMA user_version` migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use puctee_core::errors::{PucteeError, StorageError};

/// Wrap a SQLite failure message into the workspace error type.
pub fn to_storage_err(message: String) -> PucteeError {
    PucteeError::StorageError(StorageError::SqliteError { message })
}
