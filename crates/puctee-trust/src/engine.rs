use puctee_core::errors::PucteeResult;
use puctee_core::models::{ArrivalStatus, TrustRecord, TrustUpdate};
use puctee_core::traits::ITrustEngine;
use tracing::{debug, instrument};

use crate::formula;
use crate::streak;

/// Trust engine wrapping the scoring formula and the streak bookkeeping.
///
/// Holds no state; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustEngine;

impl TrustEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the update `status` would produce for `record`.
    pub fn preview(&self, record: &TrustRecord, status: ArrivalStatus) -> TrustUpdate {
        formula::compute_breakdown(
            record.trust_level.value(),
            status,
            record.on_time_streak,
            record.total_plans,
        )
    }

    /// Score `status` against the current record, then apply the bookkeeping.
    #[instrument(skip(self, record), fields(user_id = record.user_id))]
    pub fn record_outcome(&self, record: &mut TrustRecord, status: ArrivalStatus) -> TrustUpdate {
        let update = self.preview(record, status);
        streak::apply_outcome(record, status, &update);

        debug!(
            status = %status,
            previous = update.previous_level,
            new = update.new_level,
            streak = record.on_time_streak,
            total_plans = record.total_plans,
            "trust outcome recorded"
        );
        update
    }

    /// Score a batch of independent records, as used by bulk recomputation.
    pub fn preview_batch(&self, items: &[(TrustRecord, ArrivalStatus)]) -> Vec<TrustUpdate> {
        items
            .iter()
            .map(|(record, status)| self.preview(record, *status))
            .collect()
    }
}

impl ITrustEngine for TrustEngine {
    fn preview(&self, record: &TrustRecord, status: ArrivalStatus) -> PucteeResult<TrustUpdate> {
        Ok(TrustEngine::preview(self, record, status))
    }

    fn apply(&self, record: &mut TrustRecord, status: ArrivalStatus) -> PucteeResult<TrustUpdate> {
        Ok(self.record_outcome(record, status))
    }
}
