//! The event store seam.
//!
//! The planner talks to storage only through [`EventStore`]; the SQLite
//! implementation lives on [`DbPool`] and records every mutation in the
//! operational log.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventForm};

pub trait EventStore {
    fn create(&mut self, form: &EventForm) -> AppResult<Event>;

    /// Every stored event, ordered by id.
    fn get_all(&mut self) -> AppResult<Vec<Event>>;

    /// Fails with `NotFound` when absent.
    fn get_by_id(&mut self, id: i64) -> AppResult<Event>;

    /// Fails with `NotFound` when absent.
    fn update(&mut self, id: i64, form: &EventForm) -> AppResult<()>;

    /// Fails with `NotFound` when absent.
    fn delete(&mut self, id: i64) -> AppResult<()>;
}

impl EventStore for DbPool {
    fn create(&mut self, form: &EventForm) -> AppResult<Event> {
        let ev = queries::insert_event(&self.conn, form)?;
        ttlog_quiet(
            &self.conn,
            "add",
            &format!("#{}", ev.id),
            &format!("{} {}", ev.kind.as_str(), ev.anchor.to_rfc3339()),
        );
        Ok(ev)
    }

    fn get_all(&mut self) -> AppResult<Vec<Event>> {
        queries::load_all_events(&self.conn)
    }

    fn get_by_id(&mut self, id: i64) -> AppResult<Event> {
        queries::load_event_by_id(&self.conn, id)?.ok_or(AppError::NotFound(id))
    }

    fn update(&mut self, id: i64, form: &EventForm) -> AppResult<()> {
        if queries::update_event(&self.conn, id, form)? == 0 {
            return Err(AppError::NotFound(id));
        }
        ttlog_quiet(
            &self.conn,
            "edit",
            &format!("#{}", id),
            &format!("{} {}", form.kind().as_str(), form.anchor().to_rfc3339()),
        );
        Ok(())
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        if queries::delete_event(&self.conn, id)? == 0 {
            return Err(AppError::NotFound(id));
        }
        ttlog_quiet(&self.conn, "del", &format!("#{}", id), "Event deleted");
        Ok(())
    }
}
