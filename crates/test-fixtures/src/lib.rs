//! Golden datasets shared by the Puctee test suites.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

const TRUST_SCENARIOS: &str = "golden/trust/scenarios.json";

/// One trust update with its expected outcome. `streak` and `total_plans`
/// are the values before the outcome is recorded.
#[derive(Debug, Clone, Deserialize)]
pub struct TrustScenario {
    pub name: String,
    pub current_level: f64,
    /// Wire status string; unknown values are allowed on purpose.
    pub status: String,
    pub streak: u32,
    pub total_plans: u32,
    pub expected_level: f64,
    pub expected_explanation: String,
}

#[derive(Deserialize)]
struct ScenarioFile {
    scenarios: Vec<TrustScenario>,
}

fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative_path)
}

/// Load and deserialize a JSON fixture relative to this crate.
///
/// # Panics
/// Panics if the file is missing or malformed.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}

/// All golden trust scenarios.
pub fn trust_scenarios() -> Vec<TrustScenario> {
    load_fixture::<ScenarioFile>(TRUST_SCENARIOS).scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_scenarios_cover_every_status() {
        let scenarios = trust_scenarios();
        assert!(scenarios.len() >= 6);
        for status in ["on_time", "late", "not_arrived"] {
            assert!(
                scenarios.iter().any(|s| s.status == status),
                "no scenario for {status}"
            );
        }
    }

    #[test]
    fn scenario_names_are_unique() {
        let scenarios = trust_scenarios();
        let mut names: Vec<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), scenarios.len());
    }
}
