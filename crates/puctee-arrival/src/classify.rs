use puctee_core::models::ArrivalStatus;

/// Whether `distance_km` is inside the arrival radius (inclusive).
pub fn is_arrived(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km
}

/// Classify a check-in.
///
/// - within radius, at or before start: `OnTime`
/// - within radius, after start: `Late`
/// - outside radius: `NotArrived`
pub fn classify(distance_km: f64, radius_km: f64, seconds_after_start: f64) -> ArrivalStatus {
    if !is_arrived(distance_km, radius_km) {
        return ArrivalStatus::NotArrived;
    }
    if seconds_after_start <= 0.0 {
        ArrivalStatus::OnTime
    } else {
        ArrivalStatus::Late
    }
}
