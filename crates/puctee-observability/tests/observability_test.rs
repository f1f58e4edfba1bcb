use puctee_core::config::ObservabilityConfig;
use puctee_core::errors::ConfigError;
use puctee_observability::tracing_setup::events;
use puctee_observability::{arrival_check_span, build_filter, init_tracing, location_fanout_span};

#[test]
fn events_are_safe_without_subscriber() {
    events::trust_record_created(1, 60.0);
    events::trust_updated(1, "late", 60.0, 57.0, "Late: -3.0%");
    events::arrival_checked(1, 2, 0.01, "on_time");
    events::token_revoked("jti-1");
    events::subscriber_connected(2, 1, 1);
    events::subscriber_disconnected(2, 1, 0);
    events::location_broadcast(2, 1, 3);
    events::records_reset(10, 60.0);
}

#[test]
fn spans_can_be_entered() {
    let span = arrival_check_span!(1_i64, 2_i64);
    let _guard = span.enter();
    let inner = location_fanout_span!(2_i64, 1_i64);
    let _inner = inner.enter();
}

#[test]
fn valid_levels_build_filters() {
    for level in ["trace", "debug", "info", "warn", "error", "puctee_storage=debug,info"] {
        assert!(build_filter(level).is_ok(), "{level} rejected");
    }
}

#[test]
fn second_init_reports_error_instead_of_panicking() {
    let config = ObservabilityConfig::default();
    // No other test in this binary installs a subscriber.
    init_tracing(&config).unwrap();
    let err = init_tracing(&config).unwrap_err();
    assert!(matches!(err, ConfigError::SubscriberInit { .. }));
}
