//! Date utilities: parsing user dates and months, enumerating the days of a month.

use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD` or `DD.MM.YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .ok()
}

/// Parse `YYYY-MM` into `(year, month)`.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

pub fn current_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}

/// Every date of the given month, in order. Empty for an invalid month.
pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first
            .iter_days()
            .take_while(|d| d.month() == month)
            .collect(),
        None => Vec::new(),
    }
}
