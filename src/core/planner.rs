//! Planner: the event store plus memoized month views.
//!
//! Reads go through the store in full (no date-range queries). Month views
//! are cached per `(year, month)`; every create/update/delete drops the whole
//! cache, so the next render is a full reload.

use crate::core::day::events_on_date;
use crate::core::month::MonthView;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::{Event, EventForm};
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct Planner<S: EventStore> {
    store: S,
    months: HashMap<(i32, u32), MonthView>,
}

impl<S: EventStore> Planner<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            months: HashMap::new(),
        }
    }

    pub fn create(&mut self, form: &EventForm) -> AppResult<Event> {
        let ev = self.store.create(form)?;
        self.invalidate();
        Ok(ev)
    }

    pub fn update(&mut self, id: i64, form: &EventForm) -> AppResult<()> {
        self.store.update(id, form)?;
        self.invalidate();
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        self.store.delete(id)?;
        self.invalidate();
        Ok(())
    }

    pub fn get(&mut self, id: i64) -> AppResult<Event> {
        self.store.get_by_id(id)
    }

    pub fn all(&mut self) -> AppResult<Vec<Event>> {
        self.store.get_all()
    }

    /// Events on `date`, ordered by time of day.
    pub fn events_on(&mut self, date: NaiveDate) -> AppResult<Vec<Event>> {
        let all = self.store.get_all()?;
        Ok(events_on_date(&all, date).into_iter().cloned().collect())
    }

    /// Month view, built from a full read on first request.
    pub fn month(&mut self, year: i32, month: u32) -> AppResult<&MonthView> {
        let key = (year, month);
        if !self.months.contains_key(&key) {
            let all = self.store.get_all()?;
            let view = MonthView::build(&all, year, month)?;
            self.months.insert(key, view);
        }
        Ok(&self.months[&key])
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_cached(&self, year: i32, month: u32) -> bool {
        self.months.contains_key(&(year, month))
    }

    pub fn invalidate(&mut self) {
        self.months.clear();
    }
}
