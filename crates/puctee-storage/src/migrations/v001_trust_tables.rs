//! v001: trust_records, trust_events.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS trust_records (
    user_id              INTEGER PRIMARY KEY,
    trust_level          REAL NOT NULL DEFAULT 60.0,
    total_plans          INTEGER NOT NULL DEFAULT 0,
    late_plans           INTEGER NOT NULL DEFAULT 0,
    on_time_streak       INTEGER NOT NULL DEFAULT 0,
    best_on_time_streak  INTEGER NOT NULL DEFAULT 0,
    last_arrival_status  TEXT,
    created_at           TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at           TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS trust_events (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id         INTEGER NOT NULL,
    plan_id         INTEGER,
    status          TEXT NOT NULL,
    previous_level  REAL NOT NULL,
    new_level       REAL NOT NULL,
    explanation     TEXT NOT NULL,
    recorded_at     TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES trust_records(user_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_trust_events_user ON trust_events(user_id, id);
CREATE INDEX IF NOT EXISTS idx_trust_events_plan ON trust_events(plan_id);
";
