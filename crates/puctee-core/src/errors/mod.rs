//! Error handling for Puctee.
//! One error enum per subsystem, `thiserror` only, plus the umbrella
//! `PucteeError` every public API returns.

pub mod config_error;
pub mod puctee_error;
pub mod realtime_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use puctee_error::{PucteeError, PucteeResult};
pub use realtime_error::RealtimeError;
pub use storage_error::StorageError;
