//! Location message codec.

use serde::{Deserialize, Deserializer, Serialize};

use puctee_core::errors::RealtimeError;
use puctee_core::models::UserId;

/// Reply sent to a client whose message could not be parsed.
pub const INVALID_LOCATION_REPLY: &str = r#"{"error":"Invalid location data"}"#;

/// Inbound location update. Coordinates may arrive as numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationPayload {
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Outbound location, stamped with the server-side identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationBroadcast {
    pub user_id: UserId,
    pub display_name: String,
    #[serde(rename = "profileImageUrl")]
    pub profile_image_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawCoordinate::deserialize(deserializer)? {
        RawCoordinate::Number(v) => v,
        RawCoordinate::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(serde::de::Error::custom)?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("coordinate must be finite"))
    }
}

/// Parse an inbound text frame.
pub fn parse_payload(text: &str) -> Result<LocationPayload, RealtimeError> {
    serde_json::from_str(text).map_err(|e| RealtimeError::InvalidLocation {
        reason: e.to_string(),
    })
}

impl LocationBroadcast {
    pub fn to_json(&self) -> Result<String, RealtimeError> {
        serde_json::to_string(self).map_err(|e| RealtimeError::InvalidLocation {
            reason: e.to_string(),
        })
    }
}
