/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt trust record for user {user_id}: {details}")]
    CorruptRecord { user_id: i64, details: String },

    #[error("transaction failed: {reason}")]
    TransactionFailed { reason: String },
}
