use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut planner = open_planner(cfg)?;
        ExportLogic::export(&mut planner, *format, file, *force)?;
    }
    Ok(())
}
