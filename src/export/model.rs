use crate::models::Event;
use serde::Serialize;

/// Flat record written by CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub id: i64,
    pub datetime: String,
    pub event_type: i32,
    pub kind: String,
    pub notes: String,
}

impl From<&Event> for EventExport {
    fn from(ev: &Event) -> Self {
        Self {
            id: ev.id,
            datetime: ev.anchor.to_rfc3339(),
            event_type: ev.kind.to_db(),
            kind: ev.kind.as_str().to_string(),
            notes: ev.notes.clone(),
        }
    }
}
