//! Raw SQL for trust records and events. No business logic.

pub mod trust_ops;
