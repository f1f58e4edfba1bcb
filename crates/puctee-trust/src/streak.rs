use puctee_core::models::{ArrivalStatus, TrustLevel, TrustRecord, TrustUpdate};

/// Apply the bookkeeping that follows a trust update.
///
/// Run after the engine has seen the pre-update streak and total.
/// Counters saturate instead of wrapping.
pub fn apply_outcome(record: &mut TrustRecord, status: ArrivalStatus, update: &TrustUpdate) {
    match status {
        ArrivalStatus::OnTime => {
            record.on_time_streak = record.on_time_streak.saturating_add(1);
            record.best_on_time_streak = record.best_on_time_streak.max(record.on_time_streak);
        }
        ArrivalStatus::Late => {
            record.late_plans = record.late_plans.saturating_add(1);
            record.on_time_streak = 0;
        }
        ArrivalStatus::NotArrived => {
            record.on_time_streak = 0;
        }
    }

    record.total_plans = record.total_plans.saturating_add(1);
    record.last_arrival_status = Some(status);
    record.trust_level = TrustLevel::new(update.new_level);
}
