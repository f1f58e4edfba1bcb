//! # puctee-trust
//!
//! Trust score engine. Each recorded arrival outcome moves a user's trust
//! level by a streak-aware base change, dampened by experience and clamped
//! to [0, 100].
//! Pure: no I/O, no state kept between calls.

pub mod engine;
pub mod explanation;
pub mod factors;
pub mod formula;
pub mod streak;

pub use engine::TrustEngine;
pub use formula::{compute_breakdown, compute_trust_update};
