use puctee_core::models::ArrivalStatus;
use puctee_trust::compute_trust_update;

#[test]
fn golden_trust_scenarios() {
    let scenarios = test_fixtures::trust_scenarios();
    assert!(scenarios.len() >= 6);

    for s in &scenarios {
        let status = ArrivalStatus::from_wire(&s.status);
        let (level, text) = compute_trust_update(s.current_level, status, s.streak, s.total_plans);

        assert!(
            (level - s.expected_level).abs() < 1e-9,
            "{}: expected level {}, got {}",
            s.name,
            s.expected_level,
            level
        );
        assert_eq!(text, s.expected_explanation, "{}: explanation", s.name);
    }
}
