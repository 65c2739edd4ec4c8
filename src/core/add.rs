use crate::core::planner::Planner;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::{Event, EventForm};
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<S: EventStore>(planner: &mut Planner<S>, form: &EventForm) -> AppResult<Event> {
        let ev = planner.create(form)?;

        success(format!(
            "Event #{} added: {} {} ({})",
            ev.id,
            ev.anchor.format("%Y-%m-%d %H:%M"),
            ev.display_notes(),
            ev.kind.label()
        ));

        Ok(ev)
    }
}
