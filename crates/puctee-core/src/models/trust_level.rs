use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust level clamped to [0.0, 100.0].
/// Reflects how reliably a user shows up on time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TrustLevel(f64);

impl TrustLevel {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;
    /// Level assigned to a newly created user.
    pub const INITIAL: f64 = 60.0;

    /// Create a new TrustLevel, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for TrustLevel {
    fn default() -> Self {
        Self(Self::INITIAL)
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl From<f64> for TrustLevel {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrustLevel> for f64 {
    fn from(level: TrustLevel) -> Self {
        level.0
    }
}
