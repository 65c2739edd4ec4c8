use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::day::day_detail;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: raw } = cmd {
        let d = match raw {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let mut planner = open_planner(cfg)?;
        let events = planner.events_on(d)?;
        let refs: Vec<_> = events.iter().collect();

        print!("{}", day_detail(d, &refs, &cfg.date_format, &cfg.time_format));

        if events.is_empty() {
            info("No events on this day.");
        }
    }

    Ok(())
}
