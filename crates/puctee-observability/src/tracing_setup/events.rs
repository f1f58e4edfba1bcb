//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the creation of a user's trust record.
pub fn trust_record_created(user_id: i64, initial_level: f64) {
    tracing::info!(
        event = "trust_record_created",
        user_id = user_id,
        initial_level = initial_level,
        "trust record created"
    );
}

/// Log a trust level change.
pub fn trust_updated(user_id: i64, status: &str, previous: f64, new: f64, explanation: &str) {
    tracing::info!(
        event = "trust_updated",
        user_id = user_id,
        status = %status,
        previous = previous,
        new = new,
        explanation = %explanation,
        "trust level updated"
    );
}

/// Log the result of an arrival check.
pub fn arrival_checked(user_id: i64, plan_id: i64, distance_km: f64, status: &str) {
    tracing::info!(
        event = "arrival_checked",
        user_id = user_id,
        plan_id = plan_id,
        distance_km = distance_km,
        status = %status,
        "arrival checked"
    );
}

/// Log a refresh token revocation.
pub fn token_revoked(token_id: &str) {
    tracing::info!(event = "token_revoked", token_id = %token_id, "refresh token revoked");
}

/// Log a location subscriber joining a plan channel.
pub fn subscriber_connected(plan_id: i64, user_id: i64, plan_subscribers: usize) {
    tracing::info!(
        event = "subscriber_connected",
        plan_id = plan_id,
        user_id = user_id,
        plan_subscribers = plan_subscribers,
        "location subscriber connected"
    );
}

/// Log a location subscriber leaving a plan channel.
pub fn subscriber_disconnected(plan_id: i64, user_id: i64, plan_subscribers: usize) {
    tracing::info!(
        event = "subscriber_disconnected",
        plan_id = plan_id,
        user_id = user_id,
        plan_subscribers = plan_subscribers,
        "location subscriber disconnected"
    );
}

/// Log a location fan-out.
pub fn location_broadcast(plan_id: i64, user_id: i64, delivered: usize) {
    tracing::debug!(
        event = "location_broadcast",
        plan_id = plan_id,
        user_id = user_id,
        delivered = delivered,
        "location broadcast"
    );
}

/// Log an administrative bulk reset.
pub fn records_reset(count: usize, initial_level: f64) {
    tracing::warn!(
        event = "records_reset",
        count = count,
        initial_level = initial_level,
        "trust records reset"
    );
}
