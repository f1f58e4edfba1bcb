use serde::{Deserialize, Serialize};

use super::{ArrivalStatus, TrustLevel, UserId};

/// Per-user punctuality statistics.
///
/// One record is created at signup and mutated once per recorded arrival
/// outcome by the owner of the arrival-check transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustRecord {
    pub user_id: UserId,
    pub trust_level: TrustLevel,
    /// Arrival outcomes ever recorded.
    pub total_plans: u32,
    /// Outcomes classified `late`.
    pub late_plans: u32,
    /// Consecutive most-recent `on_time` outcomes.
    pub on_time_streak: u32,
    /// Running maximum of `on_time_streak`.
    pub best_on_time_streak: u32,
    pub last_arrival_status: Option<ArrivalStatus>,
}

impl TrustRecord {
    /// A fresh record with the default initial trust level.
    pub fn new(user_id: UserId) -> Self {
        Self::with_initial_level(user_id, TrustLevel::INITIAL)
    }

    pub fn with_initial_level(user_id: UserId, initial: f64) -> Self {
        Self {
            user_id,
            trust_level: TrustLevel::new(initial),
            total_plans: 0,
            late_plans: 0,
            on_time_streak: 0,
            best_on_time_streak: 0,
            last_arrival_status: None,
        }
    }
}
