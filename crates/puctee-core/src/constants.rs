/// Mean Earth radius used for great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maximum number of trust events returned by a single history query.
pub const MAX_EVENT_PAGE_SIZE: usize = 200;

/// Maximum batch size for bulk record operations.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;
