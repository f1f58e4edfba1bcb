use serde::{Deserialize, Serialize};

use super::defaults;

/// Arrival classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalConfig {
    /// Distance to the destination (km) under which a participant counts as arrived.
    pub arrival_radius_km: f64,
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        Self {
            arrival_radius_km: defaults::DEFAULT_ARRIVAL_RADIUS_KM,
        }
    }
}
