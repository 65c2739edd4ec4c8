//! Schema migrations.
//!
//! Each migration has a version id. Applied ids are recorded in the `log`
//! table as `migration_applied` rows, so running the list again is a no-op.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20221222_0001_create_calendar_events",
        description: "Created calendar_events table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS calendar_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            datetime    TEXT NOT NULL,
            event_type  INTEGER NOT NULL CHECK(event_type IN (1, 2, 3, 4)),
            notes       TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20221222_0002_index_calendar_events_datetime",
        description: "Added index on calendar_events(datetime)",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_calendar_events_datetime
            ON calendar_events(datetime);
        "#,
    },
];

/// Ensure that the `log` table exists.
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

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [
            chrono::Local::now().to_rfc3339().as_str(),
            m.version,
            m.description,
        ],
    )?;
    tx.commit()
}

/// Public entry point: run all pending migrations, oldest first.
///
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn).map_err(|e| AppError::Migration(format!("log table: {e}")))?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        let done = is_applied(conn, m.version)
            .map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;
        if done {
            continue;
        }

        apply(conn, m).map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;
        applied.push(m.version);
    }

    Ok(applied)
}

/// Every known migration version, oldest first.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|m| m.version).collect()
}
