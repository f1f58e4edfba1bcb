use crate::errors::PucteeResult;
use crate::models::{ArrivalStatus, TrustRecord, TrustUpdate};

/// Computes trust-level changes from arrival outcomes.
///
/// Implementations are pure: no I/O, no state kept between calls.
pub trait ITrustEngine: Send + Sync {
    /// Compute the update a status would produce, without touching `record`.
    fn preview(&self, record: &TrustRecord, status: ArrivalStatus) -> PucteeResult<TrustUpdate>;

    /// Compute the update and apply it, plus streak and total bookkeeping, to `record`.
    fn apply(&self, record: &mut TrustRecord, status: ArrivalStatus) -> PucteeResult<TrustUpdate>;
}
