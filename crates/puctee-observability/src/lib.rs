//! # puctee-observability
//!
//! Tracing subscriber setup plus the structured events and spans the other
//! crates emit.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
