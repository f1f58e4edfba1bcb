//! Top-level Puctee configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    defaults, ArrivalConfig, ObservabilityConfig, RealtimeConfig, StorageConfig, TrustConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PUCTEE_*`)
/// 2. Config file (explicit path, else `puctee.toml` in the working directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PucteeConfig {
    pub trust: TrustConfig,
    pub arrival: ArrivalConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
    pub realtime: RealtimeConfig,
}

impl PucteeConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must exist. Without one, `puctee.toml` in the
    /// working directory is used when present and skipped otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let local = PathBuf::from(defaults::DEFAULT_CONFIG_FILENAME);
                if local.exists() {
                    Self::from_file(&local)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read a TOML file. Unknown keys are ignored, missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides through `lookup`.
    /// Pattern: `PUCTEE_DB_PATH`, `PUCTEE_LOG`, `PUCTEE_INITIAL_TRUST_LEVEL`, etc.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", defaults::ENV_PREFIX, name));

        if let Some(v) = var("INITIAL_TRUST_LEVEL").and_then(|v| v.parse().ok()) {
            self.trust.initial_trust_level = v;
        }
        if let Some(v) = var("ARRIVAL_RADIUS_KM").and_then(|v| v.parse().ok()) {
            self.arrival.arrival_radius_km = v;
        }
        if let Some(v) = var("DB_PATH") {
            self.storage.db_path = v;
        }
        if let Some(v) = var("READ_POOL_SIZE").and_then(|v| v.parse().ok()) {
            self.storage.read_pool_size = v;
        }
        if let Some(v) = var("LOG") {
            self.observability.log_level = v;
        }
        if let Some(v) = var("JSON_LOGS").and_then(|v| v.parse().ok()) {
            self.observability.json = v;
        }
        if let Some(v) = var("REFRESH_TOKEN_TTL_SECS").and_then(|v| v.parse().ok()) {
            self.realtime.refresh_token_ttl_secs = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let initial = self.trust.initial_trust_level;
        if !(0.0..=100.0).contains(&initial) {
            return Err(ConfigError::ValidationFailed {
                field: "trust.initial_trust_level".to_string(),
                message: "must be between 0.0 and 100.0".to_string(),
            });
        }
        let radius = self.arrival.arrival_radius_km;
        if radius.is_nan() || radius <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "arrival.arrival_radius_km".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let pool_size = self.storage.read_pool_size;
        if pool_size == 0 || pool_size > defaults::MAX_READ_POOL_SIZE {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: format!("must be between 1 and {}", defaults::MAX_READ_POOL_SIZE),
            });
        }
        if self.realtime.refresh_token_ttl_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "realtime.refresh_token_ttl_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
