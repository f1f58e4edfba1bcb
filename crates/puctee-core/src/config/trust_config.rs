use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Trust level assigned to a new user's record.
    pub initial_trust_level: f64,
}

impl Default for TrustConfig {
    fn default() -> Self {
        Self {
            initial_trust_level: defaults::DEFAULT_INITIAL_TRUST_LEVEL,
        }
    }
}
