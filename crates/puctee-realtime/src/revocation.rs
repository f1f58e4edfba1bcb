//! Expiring set of revoked refresh tokens using moka.
//!
//! Entries live as long as a refresh token could still be presented, then
//! drop out on their own.

use std::time::Duration;

use moka::sync::Cache;
use puctee_core::config::RealtimeConfig;
use puctee_core::errors::RealtimeError;
use puctee_observability::tracing_setup::events;

/// Revoked refresh-token identifiers.
#[derive(Clone)]
pub struct RevocationSet {
    cache: Cache<String, ()>,
}

impl RevocationSet {
    /// Create a set remembering each revoked id for `ttl`.
    ///
    /// No size bound: a revoked id must never be evicted before it expires.
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder().time_to_live(ttl).build();
        Self { cache }
    }

    pub fn from_config(config: &RealtimeConfig) -> Self {
        Self::new(config.refresh_token_ttl())
    }

    /// Revoke `token_id`. Returns `false` if it was already revoked.
    pub fn revoke(&self, token_id: &str) -> bool {
        let entry = self.cache.entry(token_id.to_string()).or_insert(());
        if entry.is_fresh() {
            events::token_revoked(token_id);
        }
        entry.is_fresh()
    }

    pub fn is_revoked(&self, token_id: &str) -> bool {
        self.cache.contains_key(token_id)
    }

    /// Check-and-revoke in one step, as done when a refresh token is rotated.
    /// A second presentation of the same token fails.
    pub fn consume(&self, token_id: &str) -> Result<(), RealtimeError> {
        if self.revoke(token_id) {
            Ok(())
        } else {
            Err(RealtimeError::TokenRevoked {
                token_id: token_id.to_string(),
            })
        }
    }

    /// Approximate number of remembered ids.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
