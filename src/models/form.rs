//! Validated input for creating or editing an event.
//!
//! An `EventForm` is an immutable value: the CLI builds one from raw text,
//! hands it to the store, and never mutates it afterwards. Edits produce a
//! new form via [`EventForm::with_changes`].

use super::event::Event;
use super::recurrence::RecurrenceKind;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    anchor: DateTime<FixedOffset>,
    kind: RecurrenceKind,
    notes: String,
}

impl EventForm {
    /// Build a form from already typed values. Notes must not be blank.
    pub fn new(
        anchor: DateTime<FixedOffset>,
        kind: RecurrenceKind,
        notes: impl Into<String>,
    ) -> AppResult<Self> {
        let notes = notes.into();
        if notes.trim().is_empty() {
            return Err(AppError::InvalidNotes("notes cannot be empty".to_string()));
        }

        Ok(Self {
            anchor,
            kind,
            notes,
        })
    }

    /// Parse raw input, interpreting date and time in the local timezone.
    pub fn parse(date: &str, time: &str, kind: &str, notes: &str) -> AppResult<Self> {
        Self::parse_in(date, time, kind, notes, &Local)
    }

    /// Same as [`EventForm::parse`] with an explicit timezone.
    pub fn parse_in<Tz: TimeZone>(
        date_raw: &str,
        time_raw: &str,
        kind_raw: &str,
        notes: &str,
        tz: &Tz,
    ) -> AppResult<Self> {
        let d = date::parse_date(date_raw)
            .ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;
        let t = time::parse_time(time_raw)
            .ok_or_else(|| AppError::InvalidTime(time_raw.to_string()))?;
        let kind = parse_kind(kind_raw)?;

        Self::new(localize(d, t, tz)?, kind, notes)
    }

    /// Pre-filled form for editing an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            anchor: event.anchor,
            kind: event.kind,
            notes: event.notes.clone(),
        }
    }

    /// Return a new form with the supplied fields replaced (local timezone).
    pub fn with_changes(
        &self,
        date: Option<&str>,
        time: Option<&str>,
        kind: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<Self> {
        self.with_changes_in(date, time, kind, notes, &Local)
    }

    pub fn with_changes_in<Tz: TimeZone>(
        &self,
        date_raw: Option<&str>,
        time_raw: Option<&str>,
        kind_raw: Option<&str>,
        notes: Option<&str>,
        tz: &Tz,
    ) -> AppResult<Self> {
        let anchor = if date_raw.is_none() && time_raw.is_none() {
            self.anchor
        } else {
            let d = match date_raw {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
                None => self.anchor.date_naive(),
            };
            let t = match time_raw {
                Some(s) => time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
                None => self.anchor.time(),
            };
            localize(d, t, tz)?
        };

        let kind = match kind_raw {
            Some(k) => parse_kind(k)?,
            None => self.kind,
        };

        let notes = notes.unwrap_or(&self.notes);

        Self::new(anchor, kind, notes)
    }

    pub fn anchor(&self) -> DateTime<FixedOffset> {
        self.anchor
    }

    pub fn kind(&self) -> RecurrenceKind {
        self.kind
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

fn parse_kind(raw: &str) -> AppResult<RecurrenceKind> {
    RecurrenceKind::from_code(raw).ok_or_else(|| {
        AppError::InvalidRecurrence(format!(
            "'{}'. Use one of: once, daily, weekly, yearly",
            raw
        ))
    })
}

/// Attach `tz` to a wall-clock date and time.
/// A time skipped by a DST jump is rejected; an ambiguous one takes the earlier instant.
fn localize<Tz: TimeZone>(d: NaiveDate, t: NaiveTime, tz: &Tz) -> AppResult<DateTime<FixedOffset>> {
    let naive = d.and_time(t);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.fixed_offset()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.fixed_offset()),
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "{} does not exist in the local timezone",
            naive.format("%Y-%m-%d %H:%M")
        ))),
    }
}
