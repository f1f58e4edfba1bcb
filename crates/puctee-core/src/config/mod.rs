//! Configuration system for Puctee.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod arrival_config;
pub mod defaults;
pub mod observability_config;
pub mod puctee_config;
pub mod realtime_config;
pub mod storage_config;
pub mod trust_config;

pub use arrival_config::ArrivalConfig;
pub use observability_config::ObservabilityConfig;
pub use puctee_config::PucteeConfig;
pub use realtime_config::RealtimeConfig;
pub use storage_config::StorageConfig;
pub use trust_config::TrustConfig;
