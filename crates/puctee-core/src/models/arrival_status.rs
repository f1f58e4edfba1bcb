use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a participant's check-in relative to a plan's start time
/// and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalStatus {
    OnTime,
    Late,
    NotArrived,
}

impl ArrivalStatus {
    pub const ALL: [ArrivalStatus; 3] = [Self::OnTime, Self::Late, Self::NotArrived];

    /// Wire name stored in the database and sent to clients.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTime => "on_time",
            Self::Late => "late",
            Self::NotArrived => "not_arrived",
        }
    }

    /// Lenient parse used at request boundaries.
    ///
    /// Anything other than `on_time` or `late` is scored as `NotArrived`,
    /// matching the scoring fallback existing clients rely on.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "on_time" => Self::OnTime,
            "late" => Self::Late,
            _ => Self::NotArrived,
        }
    }

    /// Strict parse for persisted values. Unknown strings return `None`.
    pub fn parse_strict(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for ArrivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
