use crate::errors::PucteeResult;
use crate::models::{TrustEvent, TrustRecord, UserId};

/// Persistence for trust records and their audit trail.
pub trait ITrustStorage: Send + Sync {
    // --- Records ---
    /// Create the record for a new user. Returns the existing one if present.
    fn create_record(&self, user_id: UserId, initial_level: f64) -> PucteeResult<TrustRecord>;
    fn get_record(&self, user_id: UserId) -> PucteeResult<Option<TrustRecord>>;
    fn save_record(&self, record: &TrustRecord) -> PucteeResult<()>;
    fn list_records(&self) -> PucteeResult<Vec<TrustRecord>>;

    // --- Maintenance ---
    /// Create default records for users that lack one. Returns how many were created.
    fn ensure_records(&self, user_ids: &[UserId], initial_level: f64) -> PucteeResult<usize>;
    /// Reset every record to signup defaults. Returns the number of rows touched.
    fn reset_all(&self, initial_level: f64) -> PucteeResult<usize>;

    // --- Audit ---
    fn append_event(&self, event: &TrustEvent) -> PucteeResult<()>;
    /// Most recent events first.
    fn recent_events(&self, user_id: UserId, limit: usize) -> PucteeResult<Vec<TrustEvent>>;
}
