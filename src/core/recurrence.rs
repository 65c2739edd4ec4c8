//! Recurrence matching: does an event occur on a given calendar date?

use crate::models::{Event, RecurrenceKind};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

/// True iff `event` occurs on `date`.
pub fn matches(event: &Event, date: NaiveDate) -> bool {
    occurs(event.anchor, event.kind, date)
}

/// Rule on the raw parts of an event.
///
/// | kind   | condition (besides `date >= date(anchor)`) |
/// |--------|--------------------------------------------|
/// | Once   | `date == date(anchor)`                     |
/// | Daily  | none                                       |
/// | Weekly | same ISO weekday                           |
/// | Yearly | same month and day of month                |
///
/// A yearly anchor on Feb 29 only matches in leap years.
/// `date(anchor)` is read in the anchor's recorded offset; it is not
/// converted to the viewer's local offset.
pub fn occurs(anchor: DateTime<FixedOffset>, kind: RecurrenceKind, date: NaiveDate) -> bool {
    let start = anchor.date_naive();
    if date < start {
        return false;
    }

    match kind {
        RecurrenceKind::Once => date == start,
        RecurrenceKind::Daily => true,
        RecurrenceKind::Weekly => date.weekday() == start.weekday(),
        RecurrenceKind::Yearly => date.month() == start.month() && date.day() == start.day(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn once_matches_only_its_own_date() {
        let a = anchor(2024, 3, 15, 9);
        assert!(occurs(a, RecurrenceKind::Once, day(2024, 3, 15)));
        assert!(!occurs(a, RecurrenceKind::Once, day(2024, 3, 14)));
        assert!(!occurs(a, RecurrenceKind::Once, day(2024, 3, 16)));
        assert!(!occurs(a, RecurrenceKind::Once, day(2025, 3, 15)));
    }

    #[test]
    fn daily_matches_from_anchor_onward() {
        let a = anchor(2024, 3, 15, 9);
        assert!(!occurs(a, RecurrenceKind::Daily, day(2024, 3, 14)));
        assert!(occurs(a, RecurrenceKind::Daily, day(2024, 3, 15)));
        assert!(occurs(a, RecurrenceKind::Daily, day(2031, 11, 2)));
    }

    #[test]
    fn weekly_friday_anchor() {
        // 2024-03-15 is a Friday
        let a = anchor(2024, 3, 15, 9);
        assert!(occurs(a, RecurrenceKind::Weekly, day(2024, 3, 15)));
        assert!(occurs(a, RecurrenceKind::Weekly, day(2024, 3, 22)));
        assert!(occurs(a, RecurrenceKind::Weekly, day(2024, 3, 29)));
        assert!(!occurs(a, RecurrenceKind::Weekly, day(2024, 3, 16)));
        assert!(!occurs(a, RecurrenceKind::Weekly, day(2024, 3, 8)));
    }

    #[test]
    fn yearly_matches_month_and_day() {
        let a = anchor(2020, 7, 4, 18);
        assert!(occurs(a, RecurrenceKind::Yearly, day(2020, 7, 4)));
        assert!(occurs(a, RecurrenceKind::Yearly, day(2027, 7, 4)));
        assert!(!occurs(a, RecurrenceKind::Yearly, day(2019, 7, 4)));
        assert!(!occurs(a, RecurrenceKind::Yearly, day(2027, 7, 5)));
        assert!(!occurs(a, RecurrenceKind::Yearly, day(2027, 8, 4)));
    }

    #[test]
    fn leap_day_yearly_has_no_carry_forward() {
        let a = anchor(2024, 2, 29, 9);
        assert!(!occurs(a, RecurrenceKind::Yearly, day(2025, 2, 28)));
        assert!(!occurs(a, RecurrenceKind::Yearly, day(2025, 3, 1)));
        assert!(occurs(a, RecurrenceKind::Yearly, day(2028, 2, 29)));
    }

    #[test]
    fn anchor_date_uses_recorded_offset() {
        // 23:30 at UTC-5 is already the 16th in UTC
        let late = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 15, 23, 30, 0)
            .unwrap();
        assert!(occurs(late, RecurrenceKind::Once, day(2024, 3, 15)));
        assert!(!occurs(late, RecurrenceKind::Once, day(2024, 3, 16)));
    }
}
