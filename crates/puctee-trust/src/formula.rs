use puctee_core::models::{ArrivalStatus, TrustLevel, TrustUpdate};

use crate::explanation;
use crate::factors;

/// Trust update for one arrival outcome.
///
/// ```text
/// base        = baseChange(status, streak)
/// applied     = base × experienceMultiplier(totalPlans)
/// newLevel    = clamp(current + applied, 0, 100)
/// explanation = describe(status, streak, base)
/// ```
///
/// `current_streak` and `total_plans` are the values before this outcome.
/// Returns the new level and the explanation text.
pub fn compute_trust_update(
    current_trust_level: f64,
    status: ArrivalStatus,
    current_streak: u32,
    total_plans: u32,
) -> (f64, String) {
    let update = compute_breakdown(current_trust_level, status, current_streak, total_plans);
    (update.new_level, update.explanation)
}

/// Compute the trust update with every intermediate kept.
pub fn compute_breakdown(
    current_trust_level: f64,
    status: ArrivalStatus,
    current_streak: u32,
    total_plans: u32,
) -> TrustUpdate {
    let base = factors::base::base_change(status, current_streak);
    let multiplier = factors::experience::multiplier(total_plans);
    let applied = base * multiplier;
    let new_level = (current_trust_level + applied).clamp(TrustLevel::MIN, TrustLevel::MAX);

    TrustUpdate {
        previous_level: current_trust_level,
        status,
        streak: current_streak,
        total_plans,
        base_change: base,
        experience_multiplier: multiplier,
        applied_change: applied,
        new_level,
        explanation: explanation::describe(status, current_streak, base),
    }
}
