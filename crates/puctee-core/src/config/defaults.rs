// Single source of truth for all default values.

// --- Trust ---
pub const DEFAULT_INITIAL_TRUST_LEVEL: f64 = 60.0;

// --- Arrival ---
pub const DEFAULT_ARRIVAL_RADIUS_KM: f64 = 0.03; // 30 m

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "puctee.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const MAX_READ_POOL_SIZE: usize = 8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Realtime ---
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60; // 30 days

// --- Files & env ---
pub const DEFAULT_CONFIG_FILENAME: &str = "puctee.toml";
pub const ENV_PREFIX: &str = "PUCTEE_";
