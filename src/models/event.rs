use super::recurrence::RecurrenceKind;
use crate::core::recurrence;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64,                       // ⇔ calendar_events.id (AUTOINCREMENT, never reused)
    pub anchor: DateTime<FixedOffset>, // ⇔ calendar_events.datetime (TEXT, RFC 3339)
    pub kind: RecurrenceKind,          // ⇔ calendar_events.event_type (1..=4)
    pub notes: String,                 // ⇔ calendar_events.notes (TEXT, stored as entered)
}

impl Event {
    pub fn new(id: i64, anchor: DateTime<FixedOffset>, kind: RecurrenceKind, notes: String) -> Self {
        Self {
            id,
            anchor,
            kind,
            notes,
        }
    }

    /// Calendar date of the anchor, in the offset it was recorded with.
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor.date_naive()
    }

    pub fn time_of_day(&self) -> NaiveTime {
        self.anchor.time()
    }

    /// Notes as shown in labels and day listings.
    pub fn display_notes(&self) -> &str {
        self.notes.trim()
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        recurrence::matches(self, date)
    }

    pub fn date_str(&self, fmt: &str) -> String {
        self.anchor.format(fmt).to_string()
    }

    pub fn time_str(&self, fmt: &str) -> String {
        self.anchor.format(fmt).to_string()
    }

    pub fn get_date_time(&self, date_fmt: &str, time_fmt: &str) -> String {
        format!("{} {}", self.date_str(date_fmt), self.time_str(time_fmt))
    }
}
