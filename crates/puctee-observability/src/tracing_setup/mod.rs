//! Tracing setup: subscriber installation, span definitions and event types.

pub mod events;
pub mod spans;

use puctee_core::config::ObservabilityConfig;
use puctee_core::errors::ConfigError;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "PUCTEE_LOG";

/// Build the event filter. `PUCTEE_LOG` wins over `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| ConfigError::ValidationFailed {
        field: "observability.log_level".to_string(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// Human-readable output by default, JSON lines when `config.json` is set.
/// Fails instead of panicking if a subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = build_filter(&config.log_level)?;

    let result = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };

    result.map_err(|e| ConfigError::SubscriberInit {
        reason: e.to_string(),
    })
}
