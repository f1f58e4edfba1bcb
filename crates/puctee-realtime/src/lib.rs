//! # puctee-realtime
//!
//! In-process collaborators of the API layer: an expiring revocation set for
//! refresh tokens and a concurrent plan → user → subscriber registry used to
//! fan out live locations. Both are injected, never process-wide globals.

pub mod close_code;
pub mod hub;
pub mod location;
pub mod registry;
pub mod revocation;

pub use close_code::CloseCode;
pub use hub::{LocationHub, Participant};
pub use location::{LocationBroadcast, LocationPayload};
pub use registry::{ConnectionId, PlanChannelRegistry};
pub use revocation::RevocationSet;
