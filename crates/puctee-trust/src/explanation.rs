use puctee_core::models::ArrivalStatus;

/// Human-readable description of a trust change.
///
/// `base_change` is the value before experience dampening, so the text can
/// differ from the level delta actually applied. Consumers already display
/// it this way.
pub fn describe(status: ArrivalStatus, streak: u32, base_change: f64) -> String {
    match (status, streak) {
        (ArrivalStatus::OnTime, 0) => "On-time arrival: +2.0%".to_string(),
        (ArrivalStatus::OnTime, n) => {
            format!("On-time arrival ({n} consecutive): +{base_change:.1}%")
        }
        (ArrivalStatus::Late, 0) => "Late: -3.0%".to_string(),
        (ArrivalStatus::Late, n) => format!("Late ({n} consecutive broken): {base_change:.1}%"),
        (ArrivalStatus::NotArrived, 0) => "No arrival: -5.0%".to_string(),
        (ArrivalStatus::NotArrived, n) => {
            format!("No arrival ({n} consecutive broken): {base_change:.1}%")
        }
    }
}
