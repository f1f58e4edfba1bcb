//! Span definitions per operation: arrival check, location fan-out.

/// Create an arrival-check span.
#[macro_export]
macro_rules! arrival_check_span {
    ($user_id:expr, $plan_id:expr) => {
        tracing::info_span!("puctee.arrival_check", user_id = $user_id, plan_id = $plan_id)
    };
}

/// Create a location fan-out span.
#[macro_export]
macro_rules! location_fanout_span {
    ($plan_id:expr, $user_id:expr) => {
        tracing::debug_span!("puctee.location_fanout", plan_id = $plan_id, user_id = $user_id)
    };
}
