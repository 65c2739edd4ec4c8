use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::EventForm;

/// Add a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        kind,
        notes,
    } = cmd
    {
        //
        // 1. Validate the form before touching the store
        //
        let kind = kind.as_deref().unwrap_or(&cfg.default_kind);
        let form = EventForm::parse(date, time, kind, notes)?;

        //
        // 2. Persist
        //
        let mut planner = open_planner(cfg)?;
        AddLogic::apply(&mut planner, &form)?;
    }

    Ok(())
}
