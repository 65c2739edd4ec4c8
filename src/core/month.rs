use crate::core::day::events_on_date;
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::utils::date::all_days_of_month;
use chrono::NaiveDate;

/// One calendar cell of a month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl DayCell {
    /// A day gets a marker in the grid when at least one event occurs on it.
    pub fn has_marker(&self) -> bool {
        !self.events.is_empty()
    }

    /// One label per event, in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.display_notes()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayCell>,
}

impl MonthView {
    /// Run the day query for every date of the month, day 1 to last day inclusive.
    pub fn build(events: &[Event], year: i32, month: u32) -> AppResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{year:04}-{month:02}")));
        }

        let days = all_days_of_month(year, month)
            .into_iter()
            .map(|date| DayCell {
                date,
                events: events_on_date(events, date).into_iter().cloned().collect(),
            })
            .collect();

        Ok(Self { year, month, days })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days.iter().find(|c| c.date == date)
    }

    pub fn marked_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|c| c.has_marker())
    }
}
