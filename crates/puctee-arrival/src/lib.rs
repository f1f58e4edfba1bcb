//! # puctee-arrival
//!
//! Decides whether a participant reached a plan's destination in time and
//! records the outcome against their trust record.

pub mod classify;
pub mod geo;
pub mod tracker;

pub use classify::classify;
pub use geo::haversine_km;
pub use tracker::{ArrivalCheck, ArrivalOutcome, ArrivalTracker};
