pub mod arrival_status;
pub mod geo;
pub mod trust_event;
pub mod trust_level;
pub mod trust_record;
pub mod trust_update;

pub use arrival_status::ArrivalStatus;
pub use geo::GeoPoint;
pub use trust_event::TrustEvent;
pub use trust_level::TrustLevel;
pub use trust_record::TrustRecord;
pub use trust_update::TrustUpdate;

/// Database identifier of a user.
pub type UserId = i64;

/// Database identifier of a plan.
pub type PlanId = i64;
