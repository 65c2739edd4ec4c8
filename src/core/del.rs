use crate::core::planner::Planner;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete event `id`. Returns `false` (after a warning) when it does not exist.
    pub fn apply<S: EventStore>(planner: &mut Planner<S>, id: i64) -> AppResult<bool> {
        match planner.delete(id) {
            Ok(()) => {
                success(format!("Event #{} has been deleted.", id));
                Ok(true)
            }
            Err(AppError::NotFound(_)) => {
                warning(format!("Event #{} not found: nothing deleted.", id));
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
