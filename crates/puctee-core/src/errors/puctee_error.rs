use super::{ConfigError, RealtimeError, StorageError};
use crate::models::UserId;

/// Top-level error for every Puctee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum PucteeError {
    #[error("trust record not found for user {user_id}")]
    TrustRecordNotFound { user_id: UserId },

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    RealtimeError(#[from] RealtimeError),
}

pub type PucteeResult<T> = Result<T, PucteeError>;
