use crate::models::Event;
use chrono::NaiveDate;

/// Events occurring on `date`, ordered by time of day.
///
/// The sort is stable: events at the same time keep the order of `events`
/// (the store returns them by id).
pub fn events_on_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    let mut out: Vec<&Event> = events
        .iter()
        .filter(|e| e.occurs_on(date))
        .collect();

    out.sort_by_key(|e| e.time_of_day());
    out
}

/// Text block shown for a selected day:
/// a heading line followed by `HH:MM - notes` per event.
pub fn day_detail(date: NaiveDate, events: &[&Event], date_fmt: &str, time_fmt: &str) -> String {
    let mut text = format!("Events on: {}\n", date.format(date_fmt));
    for ev in events {
        text.push_str(&format!(
            "{} - {}\n",
            ev.time_str(time_fmt),
            ev.display_notes()
        ));
    }
    text
}
