pub mod trust_engine;
pub mod trust_storage;

pub use trust_engine::ITrustEngine;
pub use trust_storage::ITrustStorage;
