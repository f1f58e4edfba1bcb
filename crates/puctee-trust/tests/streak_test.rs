use puctee_core::models::{ArrivalStatus, TrustRecord};
use puctee_core::traits::ITrustEngine;
use puctee_trust::TrustEngine;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ── Bookkeeping ──────────────────────────────────────────────────────────

#[test]
fn on_time_increments_streak_and_best() {
    let engine = TrustEngine::new();
    let mut record = TrustRecord::new(1);

    engine.record_outcome(&mut record, ArrivalStatus::OnTime);
    engine.record_outcome(&mut record, ArrivalStatus::OnTime);

    assert_eq!(record.on_time_streak, 2);
    assert_eq!(record.best_on_time_streak, 2);
    assert_eq!(record.total_plans, 2);
    assert_eq!(record.late_plans, 0);
    assert_eq!(record.last_arrival_status, Some(ArrivalStatus::OnTime));
}

#[test]
fn late_resets_streak_and_counts_late() {
    let engine = TrustEngine::new();
    let mut record = TrustRecord::new(1);
    for _ in 0..3 {
        engine.record_outcome(&mut record, ArrivalStatus::OnTime);
    }

    engine.record_outcome(&mut record, ArrivalStatus::Late);

    assert_eq!(record.on_time_streak, 0);
    assert_eq!(record.best_on_time_streak, 3);
    assert_eq!(record.late_plans, 1);
    assert_eq!(record.total_plans, 4);
    assert_eq!(record.last_arrival_status, Some(ArrivalStatus::Late));
}

#[test]
fn not_arrived_resets_streak_without_counting_late() {
    let engine = TrustEngine::new();
    let mut record = TrustRecord::new(1);
    engine.record_outcome(&mut record, ArrivalStatus::OnTime);

    engine.record_outcome(&mut record, ArrivalStatus::NotArrived);

    assert_eq!(record.on_time_streak, 0);
    assert_eq!(record.late_plans, 0);
    assert_eq!(record.total_plans, 2);
    assert_eq!(record.last_arrival_status, Some(ArrivalStatus::NotArrived));
}

#[test]
fn best_streak_is_never_lowered() {
    let engine = TrustEngine::new();
    let mut record = TrustRecord::new(1);
    for _ in 0..5 {
        engine.record_outcome(&mut record, ArrivalStatus::OnTime);
    }
    engine.record_outcome(&mut record, ArrivalStatus::Late);
    engine.record_outcome(&mut record, ArrivalStatus::OnTime);

    assert_eq!(record.on_time_streak, 1);
    assert_eq!(record.best_on_time_streak, 5);
}

// ── Ordering: engine sees pre-update values ──────────────────────────────

#[test]
fn engine_sees_streak_before_increment() {
    let engine = TrustEngine::new();
    let mut record = TrustRecord::new(1);

    let first = engine.record_outcome(&mut record, ArrivalStatus::OnTime);
    assert_eq!(first.streak, 0);
    assert_eq!(first.total_plans, 0);
    assert_eq!(first.explanation, "On-time arrival: +2.0%");
    assert_close(record.trust_level.value(), 62.0);

    let second = engine.record_outcome(&mut record, ArrivalStatus::OnTime);
    assert_eq!(second.streak, 1);
    assert_eq!(second.total_plans, 1);
    // base 2.5, multiplier 0.95
    assert_close(second.applied_change, 2.375);
    assert_close(record.trust_level.value(), 64.375);
}

#[test]
fn engine_sees_streak_before_reset() {
    let engine = TrustEngine::new();
    let mut record = TrustRecord::new(1);
    record.on_time_streak = 5;
    record.best_on_time_streak = 5;
    record.total_plans = 20;

    let update = engine.record_outcome(&mut record, ArrivalStatus::NotArrived);

    assert_eq!(update.streak, 5);
    assert_eq!(update.explanation, "No arrival (5 consecutive broken): -7.0%");
    assert_close(record.trust_level.value(), 56.5);
    assert_eq!(record.on_time_streak, 0);
}

// ── Preview ──────────────────────────────────────────────────────────────

#[test]
fn preview_does_not_mutate() {
    let engine = TrustEngine::new();
    let record = TrustRecord::new(9);
    let before = record.clone();

    let update = engine.preview(&record, ArrivalStatus::Late);

    assert_eq!(record, before);
    assert_close(update.new_level, 57.0);
}

#[test]
fn trait_apply_matches_record_outcome() {
    let engine = TrustEngine::new();
    let mut via_trait = TrustRecord::new(1);
    let mut direct = TrustRecord::new(1);

    let a = ITrustEngine::apply(&engine, &mut via_trait, ArrivalStatus::Late).unwrap();
    let b = engine.record_outcome(&mut direct, ArrivalStatus::Late);

    assert_eq!(a, b);
    assert_eq!(via_trait, direct);
}

#[test]
fn preview_batch_scores_each_record_independently() {
    let engine = TrustEngine::new();
    let items = vec![
        (TrustRecord::new(1), ArrivalStatus::OnTime),
        (TrustRecord::new(2), ArrivalStatus::Late),
        (TrustRecord::new(3), ArrivalStatus::NotArrived),
    ];

    let updates = engine.preview_batch(&items);

    let levels: Vec<f64> = updates.iter().map(|u| u.new_level).collect();
    assert_eq!(levels, vec![62.0, 57.0, 55.0]);
}
