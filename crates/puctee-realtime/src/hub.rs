//! Location hub: admission checks and fan-out for one process.

use tokio::sync::mpsc;
use tracing::warn;

use puctee_core::errors::RealtimeError;
use puctee_core::models::{PlanId, UserId};
use puctee_observability::location_fanout_span;
use puctee_observability::tracing_setup::events;

use crate::close_code::CloseCode;
use crate::location::{self, LocationBroadcast, INVALID_LOCATION_REPLY};
use crate::registry::{ConnectionId, PlanChannelRegistry};

/// Server-side identity of a connected participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: UserId,
    pub display_name: String,
    pub profile_image_url: Option<String>,
}

/// Admits participants to plan channels and fans out their locations.
#[derive(Clone, Default)]
pub struct LocationHub {
    registry: PlanChannelRegistry,
}

impl LocationHub {
    pub fn new(registry: PlanChannelRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PlanChannelRegistry {
        &self.registry
    }

    /// Handshake checks. `participants` is the plan's participant list,
    /// `None` when the plan does not exist.
    pub fn authorize(
        user: Option<&Participant>,
        participants: Option<&[UserId]>,
    ) -> Result<(), CloseCode> {
        let user = user.ok_or(CloseCode::Unauthenticated)?;
        match participants {
            Some(ids) if ids.contains(&user.user_id) => Ok(()),
            _ => Err(CloseCode::NotParticipant),
        }
    }

    pub fn join(
        &self,
        plan_id: PlanId,
        participant: &Participant,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let joined = self.registry.connect(plan_id, participant.user_id);
        events::subscriber_connected(
            plan_id,
            participant.user_id,
            self.registry.subscriber_count(plan_id),
        );
        joined
    }

    pub fn leave(&self, plan_id: PlanId, participant: &Participant, id: ConnectionId) -> bool {
        let removed = self.registry.disconnect(plan_id, participant.user_id, id);
        if removed {
            events::subscriber_disconnected(
                plan_id,
                participant.user_id,
                self.registry.subscriber_count(plan_id),
            );
        }
        removed
    }

    /// Parse an inbound frame, stamp the sender's identity and fan it out.
    ///
    /// Client-supplied identity fields are ignored. The sender must hold an
    /// open connection on the plan. Returns the delivered count.
    pub fn publish(
        &self,
        plan_id: PlanId,
        participant: &Participant,
        text: &str,
    ) -> Result<usize, RealtimeError> {
        let span = location_fanout_span!(plan_id, participant.user_id);
        let _guard = span.enter();

        let payload = location::parse_payload(text)?;
        if !self.registry.is_connected(plan_id, participant.user_id) {
            return Err(RealtimeError::NotSubscribed {
                plan_id,
                user_id: participant.user_id,
            });
        }
        let message = LocationBroadcast {
            user_id: participant.user_id,
            display_name: participant.display_name.clone(),
            profile_image_url: participant.profile_image_url.clone(),
            latitude: payload.latitude,
            longitude: payload.longitude,
        }
        .to_json()?;

        let delivered = self.registry.broadcast(plan_id, &message);
        events::location_broadcast(plan_id, participant.user_id, delivered);
        Ok(delivered)
    }

    /// [`LocationHub::publish`] returning the text to send back to the sender,
    /// if any.
    pub fn handle_frame(
        &self,
        plan_id: PlanId,
        participant: &Participant,
        text: &str,
    ) -> Option<&'static str> {
        match self.publish(plan_id, participant, text) {
            Ok(_) => None,
            Err(e) => {
                warn!(plan_id = plan_id, user_id = participant.user_id, error = %e, "rejected location frame");
                Some(INVALID_LOCATION_REPLY)
            }
        }
    }
}
