use crate::core::planner::Planner;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventForm};
use crate::ui::messages::{success, warning};

/// Raw replacement values from the command line; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EditChanges {
    pub date: Option<String>,
    pub time: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
}

impl EditChanges {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.kind.is_none() && self.notes.is_none()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Update event `id`. A missing id is reported and treated as a no-op (`Ok(None)`).
    pub fn apply<S: EventStore>(
        planner: &mut Planner<S>,
        id: i64,
        changes: &EditChanges,
    ) -> AppResult<Option<Event>> {
        let current = match planner.get(id) {
            Ok(ev) => ev,
            Err(AppError::NotFound(_)) => {
                warning(format!("Event #{} not found: nothing to edit.", id));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if changes.is_empty() {
            warning(format!("No changes given for event #{}.", id));
            return Ok(Some(current));
        }

        let form = EventForm::from_event(&current).with_changes(
            changes.date.as_deref(),
            changes.time.as_deref(),
            changes.kind.as_deref(),
            changes.notes.as_deref(),
        )?;

        match planner.update(id, &form) {
            Ok(()) => {}
            Err(AppError::NotFound(_)) => {
                warning(format!("Event #{} was removed meanwhile: nothing saved.", id));
                return Ok(None);
            }
            Err(e) => return Err(e),
        }

        let updated = Event::new(id, form.anchor(), form.kind(), form.notes().to_string());
        success(format!(
            "Event #{} saved: {} {} ({})",
            id,
            updated.anchor.format("%Y-%m-%d %H:%M"),
            updated.display_notes(),
            updated.kind.label()
        ));

        Ok(Some(updated))
    }
}
