/// Errors raised by the location fan-out and token revocation collaborators.
#[derive(Debug, thiserror::Error)]
pub enum RealtimeError {
    #[error("invalid location data: {reason}")]
    InvalidLocation { reason: String },

    #[error("plan {plan_id} has no open channel for user {user_id}")]
    NotSubscribed { plan_id: i64, user_id: i64 },

    #[error("token revoked: {token_id}")]
    TokenRevoked { token_id: String },
}
