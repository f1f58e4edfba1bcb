use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArrivalStatus, PlanId, UserId};

/// One persisted trust-level change, kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustEvent {
    pub user_id: UserId,
    pub plan_id: Option<PlanId>,
    pub status: ArrivalStatus,
    pub previous_level: f64,
    pub new_level: f64,
    pub explanation: String,
    pub recorded_at: DateTime<Utc>,
}
