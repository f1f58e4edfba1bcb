/// Plans after which dampening saturates.
pub const SATURATION_PLANS: f64 = 10.0;
/// Largest share of the base change removed by dampening.
pub const MAX_DAMPENING: f64 = 0.5;

/// Experience dampening multiplier.
///
/// Formula: `1 - min(total / 10, 1) × 0.5`, or `1.0` when `total == 0`.
/// Range: 0.5 – 1.0, linear in between.
pub fn multiplier(total_plans: u32) -> f64 {
    if total_plans == 0 {
        return 1.0;
    }
    let experience = (f64::from(total_plans) / SATURATION_PLANS).min(1.0);
    1.0 - experience * MAX_DAMPENING
}
