//! # puctee-core
//!
//! Foundation crate for the Puctee backend.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PucteeConfig;
pub use errors::{PucteeError, PucteeResult};
pub use models::{
    ArrivalStatus, GeoPoint, PlanId, TrustEvent, TrustLevel, TrustRecord, TrustUpdate, UserId,
};
