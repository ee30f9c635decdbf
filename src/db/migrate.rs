use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered schema migrations: (version, description, apply).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20250901_0001_create_events",
        "Created events table",
        create_events_table,
    ),
];

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            staff_id     TEXT NOT NULL,
            seq          INTEGER NOT NULL CHECK(seq >= 1),
            kind         TEXT NOT NULL CHECK(kind IN ('in','out')),
            occurred_at  TEXT NOT NULL,
            occurred_ms  INTEGER NOT NULL,
            latitude     REAL NOT NULL CHECK(latitude BETWEEN -90 AND 90),
            longitude    REAL NOT NULL CHECK(longitude BETWEEN -180 AND 180),
            distance_m   REAL NOT NULL CHECK(distance_m >= 0),
            created_at   TEXT NOT NULL,
            UNIQUE(staff_id, seq)
        );

        CREATE INDEX IF NOT EXISTS idx_events_staff_time ON events(staff_id, occurred_ms);
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run every migration not yet marked as applied in the `log` table.
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for (version, description, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        apply(&*tx)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            rusqlite::params![chrono::Local::now().to_rfc3339(), version, description],
        )?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", version, description));
        applied.push(version.to_string());
    }

    Ok(applied)
}
