use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventForm, RecurrenceKind};
use chrono::{DateTime, FixedOffset};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_EVENT: &str = "SELECT id, datetime, event_type, notes FROM calendar_events";

pub fn map_row(row: &Row) -> Result<Event> {
    let raw_dt: String = row.get("datetime")?;
    let anchor = DateTime::<FixedOffset>::parse_from_rfc3339(&raw_dt).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw_dt.clone())),
        )
    })?;

    let code: i32 = row.get("event_type")?;
    let kind = RecurrenceKind::from_db(code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidRecurrence(format!("Invalid event_type: {}", code))),
        )
    })?;

    Ok(Event {
        id: row.get("id")?,
        anchor,
        kind,
        notes: row.get("notes")?,
    })
}

/// Insert a new event and return it with the id assigned by SQLite.
pub fn insert_event(conn: &Connection, form: &EventForm) -> AppResult<Event> {
    conn.execute(
        "INSERT INTO calendar_events (datetime, event_type, notes)
         VALUES (?1, ?2, ?3)",
        params![
            form.anchor().to_rfc3339(),
            form.kind().to_db(),
            form.notes(),
        ],
    )?;

    Ok(Event::new(
        conn.last_insert_rowid(),
        form.anchor(),
        form.kind(),
        form.notes().to_string(),
    ))
}

/// All events, ordered by id.
pub fn load_all_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENT} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event_by_id(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_EVENT} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Replace anchor, kind and notes. Returns the number of rows changed (0 or 1).
pub fn update_event(conn: &Connection, id: i64, form: &EventForm) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE calendar_events
         SET datetime = ?1, event_type = ?2, notes = ?3
         WHERE id = ?4",
        params![
            form.anchor().to_rfc3339(),
            form.kind().to_db(),
            form.notes(),
            id,
        ],
    )?;
    Ok(changed)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    let removed = conn.execute("DELETE FROM calendar_events WHERE id = ?1", [id])?;
    Ok(removed)
}

/// Number of stored events per recurrence kind (kinds with no events included).
pub fn count_by_kind(conn: &Connection) -> AppResult<Vec<(RecurrenceKind, i64)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT COUNT(*) FROM calendar_events WHERE event_type = ?1",
    )?;

    let mut out = Vec::new();
    for kind in RecurrenceKind::ALL {
        let n: i64 = stmt.query_row([kind.to_db()], |row| row.get(0))?;
        out.push((kind, n));
    }
    Ok(out)
}
