use serde::{Deserialize, Serialize};
use std::fmt;

/// How often an event repeats after its anchor date.
///
/// Stored in `calendar_events.event_type` as 1..=4.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Once,
    Daily,
    Weekly,
    Yearly,
}

impl RecurrenceKind {
    pub const ALL: [RecurrenceKind; 4] = [
        RecurrenceKind::Once,
        RecurrenceKind::Daily,
        RecurrenceKind::Weekly,
        RecurrenceKind::Yearly,
    ];

    /// Parse user input: a name (`once`, `daily`, ...) or the stored code (`1`..`4`).
    pub fn from_code(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "once" | "o" | "1" => Some(Self::Once),
            "daily" | "d" | "2" => Some(Self::Daily),
            "weekly" | "w" | "3" => Some(Self::Weekly),
            "yearly" | "y" | "4" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceKind::Once => "once",
            RecurrenceKind::Daily => "daily",
            RecurrenceKind::Weekly => "weekly",
            RecurrenceKind::Yearly => "yearly",
        }
    }

    /// Human label used in tables.
    pub fn label(&self) -> &'static str {
        match self {
            RecurrenceKind::Once => "Once",
            RecurrenceKind::Daily => "Daily",
            RecurrenceKind::Weekly => "Weekly",
            RecurrenceKind::Yearly => "Yearly",
        }
    }

    /// Convert enum → DB integer
    pub fn to_db(self) -> i32 {
        match self {
            RecurrenceKind::Once => 1,
            RecurrenceKind::Daily => 2,
            RecurrenceKind::Weekly => 3,
            RecurrenceKind::Yearly => 4,
        }
    }

    /// Convert DB integer → enum
    pub fn from_db(code: i32) -> Option<Self> {
        match code {
            1 => Some(RecurrenceKind::Once),
            2 => Some(RecurrenceKind::Daily),
            3 => Some(RecurrenceKind::Weekly),
            4 => Some(RecurrenceKind::Yearly),
            _ => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceKind::Once)
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_codes_roundtrip_for_every_kind() {
        for kind in RecurrenceKind::ALL {
            assert_eq!(RecurrenceKind::from_db(kind.to_db()), Some(kind));
        }
        assert_eq!(RecurrenceKind::from_db(0), None);
        assert_eq!(RecurrenceKind::from_db(5), None);
    }

    #[test]
    fn from_code_accepts_names_and_numbers() {
        assert_eq!(RecurrenceKind::from_code("Weekly"), Some(RecurrenceKind::Weekly));
        assert_eq!(RecurrenceKind::from_code(" yearly "), Some(RecurrenceKind::Yearly));
        assert_eq!(RecurrenceKind::from_code("2"), Some(RecurrenceKind::Daily));
        assert_eq!(RecurrenceKind::from_code("monthly"), None);
        assert_eq!(RecurrenceKind::from_code(""), None);
    }
}
