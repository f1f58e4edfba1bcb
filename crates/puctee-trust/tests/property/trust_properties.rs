use puctee_core::models::{ArrivalStatus, TrustRecord};
use puctee_trust::factors::{base, experience};
use puctee_trust::{compute_breakdown, compute_trust_update, TrustEngine};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = ArrivalStatus> {
    prop_oneof![
        Just(ArrivalStatus::OnTime),
        Just(ArrivalStatus::Late),
        Just(ArrivalStatus::NotArrived),
    ]
}

// ── Boundedness ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn new_level_always_bounded(
        current in 0.0f64..=100.0,
        status in arb_status(),
        streak in 0u32..10_000,
        total in 0u32..10_000,
    ) {
        let (level, _) = compute_trust_update(current, status, streak, total);
        prop_assert!((0.0..=100.0).contains(&level), "level {} out of range", level);
    }
}

// ── Streak bonus cap ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn on_time_bonus_never_exceeds_cap(streak in 0u32..=u32::MAX) {
        let change = base::base_change(ArrivalStatus::OnTime, streak);
        prop_assert!(change >= 2.0);
        prop_assert!(change <= 7.0);
    }

    #[test]
    fn penalties_never_exceed_cap(streak in 0u32..=u32::MAX) {
        let late = base::base_change(ArrivalStatus::Late, streak);
        let absent = base::base_change(ArrivalStatus::NotArrived, streak);
        prop_assert!((-6.0..=-3.0).contains(&late));
        prop_assert!((-9.0..=-5.0).contains(&absent));
    }
}

// ── Dampening ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn dampening_saturates_from_ten_plans(total in 10u32..=u32::MAX) {
        prop_assert!((experience::multiplier(total) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn dampening_is_monotonic(total in 0u32..100) {
        prop_assert!(experience::multiplier(total + 1) <= experience::multiplier(total));
    }

    #[test]
    fn applied_change_never_grows_with_experience(
        status in arb_status(),
        streak in 0u32..50,
        total in 0u32..50,
    ) {
        let fresh = compute_breakdown(50.0, status, streak, total);
        let seasoned = compute_breakdown(50.0, status, streak, total + 1);
        prop_assert!(seasoned.applied_change.abs() <= fresh.applied_change.abs());
    }
}

// ── Idempotence ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_inputs_identical_outputs(
        current in 0.0f64..=100.0,
        status in arb_status(),
        streak in 0u32..1_000,
        total in 0u32..1_000,
    ) {
        let a = compute_trust_update(current, status, streak, total);
        let b = compute_trust_update(current, status, streak, total);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn pair_and_breakdown_agree(
        current in 0.0f64..=100.0,
        status in arb_status(),
        streak in 0u32..1_000,
        total in 0u32..1_000,
    ) {
        let (level, text) = compute_trust_update(current, status, streak, total);
        let update = compute_breakdown(current, status, streak, total);
        prop_assert_eq!(level, update.new_level);
        prop_assert_eq!(text, update.explanation);
    }
}

// ── Sequences of outcomes ────────────────────────────────────────────────

proptest! {
    #[test]
    fn record_invariants_hold_over_sequences(
        statuses in prop::collection::vec(arb_status(), 0..200),
    ) {
        let engine = TrustEngine::new();
        let mut record = TrustRecord::new(1);
        for status in &statuses {
            engine.record_outcome(&mut record, *status);
            prop_assert!((0.0..=100.0).contains(&record.trust_level.value()));
            prop_assert!(record.on_time_streak <= record.best_on_time_streak);
            prop_assert!(record.late_plans <= record.total_plans);
        }
        prop_assert_eq!(record.total_plans as usize, statuses.len());
        prop_assert_eq!(record.last_arrival_status, statuses.last().copied());
    }
}
