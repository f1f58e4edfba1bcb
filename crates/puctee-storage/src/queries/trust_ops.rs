//! Trust record CRUD and the append-only trust event log.
//!
//! Rows are sanitized on the way out: negative counters, out-of-range levels
//! and unknown status strings surface as `StorageError::CorruptRecord` so the
//! scoring engine only ever sees documented input ranges.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use puctee_core::constants::MAX_EVENT_PAGE_SIZE;
use puctee_core::errors::{PucteeError, PucteeResult, StorageError};
use puctee_core::models::{ArrivalStatus, TrustEvent, TrustLevel, TrustRecord, UserId};

use crate::to_storage_err;

const RECORD_COLUMNS: &str = "user_id, trust_level, total_plans, late_plans, on_time_streak,
     best_on_time_streak, last_arrival_status";

/// Raw column values before validation.
struct RawRecord {
    user_id: i64,
    trust_level: f64,
    total_plans: i64,
    late_plans: i64,
    on_time_streak: i64,
    best_on_time_streak: i64,
    last_arrival_status: Option<String>,
}

fn read_raw(row: &Row<'_>) -> rusqlite::Result<RawRecord> {
    Ok(RawRecord {
        user_id: row.get(0)?,
        trust_level: row.get(1)?,
        total_plans: row.get(2)?,
        late_plans: row.get(3)?,
        on_time_streak: row.get(4)?,
        best_on_time_streak: row.get(5)?,
        last_arrival_status: row.get(6)?,
    })
}

fn corrupt(user_id: i64, details: String) -> PucteeError {
    StorageError::CorruptRecord { user_id, details }.into()
}

fn counter(user_id: i64, name: &str, value: i64) -> PucteeResult<u32> {
    u32::try_from(value).map_err(|_| corrupt(user_id, format!("{name} out of range: {value}")))
}

fn sanitize(raw: RawRecord) -> PucteeResult<TrustRecord> {
    let user_id = raw.user_id;
    if !raw.trust_level.is_finite()
        || !(TrustLevel::MIN..=TrustLevel::MAX).contains(&raw.trust_level)
    {
        return Err(corrupt(
            user_id,
            format!("trust_level out of range: {}", raw.trust_level),
        ));
    }

    let last_arrival_status = match raw.last_arrival_status {
        None => None,
        Some(s) => Some(
            ArrivalStatus::parse_strict(&s)
                .ok_or_else(|| corrupt(user_id, format!("unknown last_arrival_status: {s}")))?,
        ),
    };

    Ok(TrustRecord {
        user_id,
        trust_level: TrustLevel::new(raw.trust_level),
        total_plans: counter(user_id, "total_plans", raw.total_plans)?,
        late_plans: counter(user_id, "late_plans", raw.late_plans)?,
        on_time_streak: counter(user_id, "on_time_streak", raw.on_time_streak)?,
        best_on_time_streak: counter(user_id, "best_on_time_streak", raw.best_on_time_streak)?,
        last_arrival_status,
    })
}

/// Insert a record. Returns `false` if the user already has one.
pub fn insert_record(conn: &Connection, record: &TrustRecord) -> PucteeResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO trust_records
             (user_id, trust_level, total_plans, late_plans, on_time_streak,
              best_on_time_streak, last_arrival_status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                record.user_id,
                record.trust_level.value(),
                record.total_plans,
                record.late_plans,
                record.on_time_streak,
                record.best_on_time_streak,
                record.last_arrival_status.map(|s| s.as_str()),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    debug!(user_id = record.user_id, inserted = inserted > 0, "insert trust record");
    Ok(inserted > 0)
}

/// Get a record by user id.
pub fn get_record(conn: &Connection, user_id: UserId) -> PucteeResult<Option<TrustRecord>> {
    let raw = conn
        .query_row(
            &format!("SELECT {RECORD_COLUMNS} FROM trust_records WHERE user_id = ?1"),
            params![user_id],
            read_raw,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(sanitize).transpose()
}

/// Overwrite every mutable field of an existing record.
pub fn update_record(conn: &Connection, record: &TrustRecord) -> PucteeResult<()> {
    let updated = conn
        .execute(
            "UPDATE trust_records SET
                trust_level = ?2,
                total_plans = ?3,
                late_plans = ?4,
                on_time_streak = ?5,
                best_on_time_streak = ?6,
                last_arrival_status = ?7,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE user_id = ?1",
            params![
                record.user_id,
                record.trust_level.value(),
                record.total_plans,
                record.late_plans,
                record.on_time_streak,
                record.best_on_time_streak,
                record.last_arrival_status.map(|s| s.as_str()),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(PucteeError::TrustRecordNotFound {
            user_id: record.user_id,
        });
    }
    debug!(user_id = record.user_id, level = record.trust_level.value(), "update trust record");
    Ok(())
}

/// All records ordered by user id.
pub fn list_records(conn: &Connection) -> PucteeResult<Vec<TrustRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM trust_records ORDER BY user_id"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], read_raw)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let raws = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raws.into_iter().map(sanitize).collect()
}

/// Reset every record to signup defaults. Returns the number of rows touched.
pub fn reset_all(conn: &Connection, initial_level: f64) -> PucteeResult<usize> {
    let count = conn
        .execute(
            "UPDATE trust_records SET
                trust_level = ?1,
                total_plans = 0,
                late_plans = 0,
                on_time_streak = 0,
                best_on_time_streak = 0,
                last_arrival_status = NULL,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
            params![initial_level],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    debug!(count = count, "reset trust records");
    Ok(count)
}

/// Delete a record and, through the foreign key, its events.
/// Returns `false` if there was nothing to delete.
pub fn delete_record(conn: &Connection, user_id: UserId) -> PucteeResult<bool> {
    let deleted = conn
        .execute(
            "DELETE FROM trust_records WHERE user_id = ?1",
            params![user_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

/// Append one event to the log.
pub fn insert_event(conn: &Connection, event: &TrustEvent) -> PucteeResult<()> {
    conn.execute(
        "INSERT INTO trust_events
         (user_id, plan_id, status, previous_level, new_level, explanation, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            event.user_id,
            event.plan_id,
            event.status.as_str(),
            event.previous_level,
            event.new_level,
            event.explanation,
            event.recorded_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    debug!(user_id = event.user_id, plan_id = ?event.plan_id, "insert trust event");
    Ok(())
}

/// Most recent events for a user, newest first.
/// `limit` is capped at `MAX_EVENT_PAGE_SIZE`.
pub fn recent_events(
    conn: &Connection,
    user_id: UserId,
    limit: usize,
) -> PucteeResult<Vec<TrustEvent>> {
    let limit = limit.min(MAX_EVENT_PAGE_SIZE) as i64;
    let mut stmt = conn
        .prepare(
            "SELECT user_id, plan_id, status, previous_level, new_level, explanation, recorded_at
             FROM trust_events WHERE user_id = ?1
             ORDER BY id DESC LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, limit], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<i64>>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let (user_id, plan_id, status, previous_level, new_level, explanation, recorded_at) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let status = ArrivalStatus::parse_strict(&status)
            .ok_or_else(|| corrupt(user_id, format!("unknown event status: {status}")))?;
        let recorded_at = DateTime::parse_from_rfc3339(&recorded_at)
            .map_err(|e| corrupt(user_id, format!("bad recorded_at: {e}")))?
            .with_timezone(&Utc);
        events.push(TrustEvent {
            user_id,
            plan_id,
            status,
            previous_level,
            new_level,
            explanation,
            recorded_at,
        });
    }
    Ok(events)
}

/// Number of records in the table.
pub fn count_records(conn: &Connection) -> PucteeResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM trust_records", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
