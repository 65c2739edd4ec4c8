use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditChanges, EditLogic};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        kind,
        notes,
    } = cmd
    {
        let changes = EditChanges {
            date: date.clone(),
            time: time.clone(),
            kind: kind.clone(),
            notes: notes.clone(),
        };

        let mut planner = open_planner(cfg)?;
        EditLogic::apply(&mut planner, *id, &changes)?;
    }

    Ok(())
}
