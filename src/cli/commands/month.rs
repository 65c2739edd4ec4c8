use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::calendar::{GridStyle, render_grid, render_labels};
use crate::ui::messages::info;
use crate::utils::date;
use chrono::Weekday;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Month {
        month: raw,
        no_color,
    } = cmd
    {
        let (year, month) = match raw {
            Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))?,
            None => date::current_month(),
        };

        let style = GridStyle {
            week_start: cfg.week_start_day().unwrap_or(Weekday::Mon),
            date_format: &cfg.date_format,
            time_format: &cfg.time_format,
            color: !*no_color,
        };

        let mut planner = open_planner(cfg)?;
        let view = planner.month(year, month)?;

        print!("{}", render_grid(view, &style));
        println!();

        if view.marked_days().next().is_none() {
            info("No events this month.");
        } else {
            print!("{}", render_labels(view, &style));
        }
    }

    Ok(())
}
