//! Time utilities: parsing HH:MM.

use chrono::NaiveTime;

/// Parse a 24h `HH:MM` time.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24h_times() {
        assert_eq!(parse_time("09:05"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("9am"), None);
        assert_eq!(parse_time(""), None);
    }
}
