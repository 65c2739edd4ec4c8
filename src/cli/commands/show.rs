use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut planner = open_planner(cfg)?;

        let ev = match planner.get(*id) {
            Ok(ev) => ev,
            Err(AppError::NotFound(_)) => {
                warning(format!("Event #{} not found.", id));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        println!("Event #{}", ev.id);
        println!(
            "  When  : {}",
            ev.get_date_time(&cfg.date_format, &cfg.time_format)
        );
        if ev.kind.is_recurring() {
            println!(
                "  Type  : {} (since {})",
                ev.kind.label(),
                ev.anchor_date().format(&cfg.date_format)
            );
        } else {
            println!("  Type  : {}", ev.kind.label());
        }
        println!("  Notes :");
        for line in ev.display_notes().lines() {
            println!("    {}", line);
        }
    }

    Ok(())
}
