use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Token revocation and location fan-out configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    /// Lifetime of a refresh token; revoked ids are forgotten after this.
    pub refresh_token_ttl_secs: u64,
}

impl RealtimeConfig {
    pub fn refresh_token_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_token_ttl_secs)
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            refresh_token_ttl_secs: defaults::DEFAULT_REFRESH_TOKEN_TTL_SECS,
        }
    }
}
