//! Read-modify-write of a user's trust record for one arrival outcome.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::{debug, instrument};

use puctee_core::config::ArrivalConfig;
use puctee_core::errors::{PucteeError, PucteeResult};
use puctee_core::models::{
    ArrivalStatus, GeoPoint, PlanId, TrustEvent, TrustRecord, TrustUpdate, UserId,
};
use puctee_observability::arrival_check_span;
use puctee_observability::tracing_setup::events;
use puctee_storage::queries::trust_ops;
use puctee_storage::StorageEngine;
use puctee_trust::TrustEngine;

use crate::classify;
use crate::geo;

/// One participant's check-in against a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalCheck {
    pub user_id: UserId,
    pub plan_id: PlanId,
    /// Where the participant reported being.
    pub position: GeoPoint,
    /// The plan's destination.
    pub destination: GeoPoint,
    pub start_time: DateTime<Utc>,
    pub checked_at: DateTime<Utc>,
}

impl ArrivalCheck {
    /// Seconds between the plan start and the check-in. Negative means early.
    pub fn seconds_after_start(&self) -> f64 {
        (self.checked_at - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

/// Result of [`ArrivalTracker::check_arrival`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalOutcome {
    pub is_arrived: bool,
    pub distance_km: f64,
    pub status: ArrivalStatus,
    pub update: TrustUpdate,
    /// The record as saved.
    pub record: TrustRecord,
}

/// Classifies check-ins and applies the resulting trust update.
///
/// Every method takes the caller's connection so the load, the save and the
/// event row share one transaction.
#[derive(Debug, Clone)]
pub struct ArrivalTracker {
    engine: TrustEngine,
    radius_km: f64,
}

impl ArrivalTracker {
    pub fn new(radius_km: f64) -> Self {
        Self {
            engine: TrustEngine::new(),
            radius_km,
        }
    }

    pub fn from_config(config: &ArrivalConfig) -> Self {
        Self::new(config.arrival_radius_km)
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Classify `check` and record the outcome.
    ///
    /// Fails with `TrustRecordNotFound` if the user has no record and with
    /// `ValidationError` for coordinates outside their ranges.
    pub fn check_arrival(
        &self,
        conn: &Connection,
        check: &ArrivalCheck,
    ) -> PucteeResult<ArrivalOutcome> {
        let span = arrival_check_span!(check.user_id, check.plan_id);
        let _guard = span.enter();

        if !check.position.is_valid() || !check.destination.is_valid() {
            return Err(PucteeError::ValidationError(format!(
                "invalid coordinates for plan {}",
                check.plan_id
            )));
        }

        let distance_km = geo::haversine_km(check.position, check.destination);
        let is_arrived = classify::is_arrived(distance_km, self.radius_km);
        let status = classify::classify(distance_km, self.radius_km, check.seconds_after_start());
        events::arrival_checked(check.user_id, check.plan_id, distance_km, status.as_str());

        let (update, record) = self.score(
            conn,
            check.user_id,
            Some(check.plan_id),
            status,
            check.checked_at,
        )?;

        Ok(ArrivalOutcome {
            is_arrived,
            distance_km,
            status,
            update,
            record,
        })
    }

    /// Record a status decided elsewhere, e.g. a plan closing with the user absent.
    pub fn record_status(
        &self,
        conn: &Connection,
        user_id: UserId,
        plan_id: Option<PlanId>,
        status: ArrivalStatus,
    ) -> PucteeResult<(TrustUpdate, TrustRecord)> {
        self.score(conn, user_id, plan_id, status, Utc::now())
    }

    /// [`ArrivalTracker::check_arrival`] inside its own storage transaction.
    pub fn check_and_commit(
        &self,
        storage: &StorageEngine,
        check: &ArrivalCheck,
    ) -> PucteeResult<ArrivalOutcome> {
        storage.transaction(|conn| self.check_arrival(conn, check))
    }

    #[instrument(skip(self, conn, recorded_at))]
    fn score(
        &self,
        conn: &Connection,
        user_id: UserId,
        plan_id: Option<PlanId>,
        status: ArrivalStatus,
        recorded_at: DateTime<Utc>,
    ) -> PucteeResult<(TrustUpdate, TrustRecord)> {
        let mut record = trust_ops::get_record(conn, user_id)?
            .ok_or(PucteeError::TrustRecordNotFound { user_id })?;

        let update = self.engine.record_outcome(&mut record, status);
        trust_ops::update_record(conn, &record)?;
        trust_ops::insert_event(
            conn,
            &TrustEvent {
                user_id,
                plan_id,
                status,
                previous_level: update.previous_level,
                new_level: update.new_level,
                explanation: update.explanation.clone(),
                recorded_at,
            },
        )?;

        events::trust_updated(
            user_id,
            status.as_str(),
            update.previous_level,
            update.new_level,
            &update.explanation,
        );
        debug!(
            streak = record.on_time_streak,
            total_plans = record.total_plans,
            "trust record saved"
        );
        Ok((update, record))
    }
}

impl Default for ArrivalTracker {
    fn default() -> Self {
        Self::from_config(&ArrivalConfig::default())
    }
}
