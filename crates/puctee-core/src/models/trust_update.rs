use serde::{Deserialize, Serialize};

use super::ArrivalStatus;

/// Every intermediate of one trust-level computation.
///
/// `base_change` is the magnitude before experience dampening and is what
/// `explanation` reports. `applied_change` is what actually moved the level
/// (before clamping).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustUpdate {
    pub previous_level: f64,
    pub status: ArrivalStatus,
    /// Streak handed to the engine (pre-update).
    pub streak: u32,
    /// Total plans handed to the engine (pre-update).
    pub total_plans: u32,
    pub base_change: f64,
    pub experience_multiplier: f64,
    pub applied_change: f64,
    pub new_level: f64,
    pub explanation: String,
}

impl TrustUpdate {
    /// Level delta after clamping.
    pub fn effective_delta(&self) -> f64 {
        self.new_level - self.previous_level
    }
}
