use puctee_core::models::ArrivalStatus;

/// Flat change for an on-time arrival.
pub const ON_TIME_BASE: f64 = 2.0;
/// Bonus per consecutive on-time arrival, capped at [`ON_TIME_BONUS_CAP`].
pub const ON_TIME_BONUS_PER_STREAK: f64 = 0.5;
pub const ON_TIME_BONUS_CAP: f64 = 5.0;

pub const LATE_BASE: f64 = -3.0;
pub const LATE_PENALTY_PER_STREAK: f64 = 0.3;
pub const LATE_PENALTY_CAP: f64 = 3.0;

pub const NOT_ARRIVED_BASE: f64 = -5.0;
pub const NOT_ARRIVED_PENALTY_PER_STREAK: f64 = 0.4;
pub const NOT_ARRIVED_PENALTY_CAP: f64 = 4.0;

/// Base change before experience dampening.
///
/// - on_time: `2.0 + min(streak × 0.5, 5.0)`
/// - late: `-3.0 - min(streak × 0.3, 3.0)` when streak > 0, else `-3.0`
/// - not_arrived: `-5.0 - min(streak × 0.4, 4.0)` when streak > 0, else `-5.0`
///
/// Range: -9.0 – 7.0.
pub fn base_change(status: ArrivalStatus, streak: u32) -> f64 {
    let streak = f64::from(streak);
    match status {
        ArrivalStatus::OnTime => {
            ON_TIME_BASE + (streak * ON_TIME_BONUS_PER_STREAK).min(ON_TIME_BONUS_CAP)
        }
        ArrivalStatus::Late => {
            if streak > 0.0 {
                LATE_BASE - (streak * LATE_PENALTY_PER_STREAK).min(LATE_PENALTY_CAP)
            } else {
                LATE_BASE
            }
        }
        ArrivalStatus::NotArrived => {
            if streak > 0.0 {
                NOT_ARRIVED_BASE
                    - (streak * NOT_ARRIVED_PENALTY_PER_STREAK).min(NOT_ARRIVED_PENALTY_CAP)
            } else {
                NOT_ARRIVED_BASE
            }
        }
    }
}
