use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

const NOTES_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let mut planner = open_planner(cfg)?;
        let events = planner.all()?;

        if events.is_empty() {
            info("No events stored.");
            return Ok(());
        }

        let when_width = events
            .iter()
            .map(|e| e.get_date_time(&cfg.date_format, &cfg.time_format).len())
            .max()
            .unwrap_or(16)
            .max("Date and time".len());

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Date and time", when_width),
            Column::new("Type", 7),
            Column::new("Notes", NOTES_WIDTH),
        ]);

        for ev in &events {
            table.add_row(vec![
                ev.id.to_string(),
                ev.get_date_time(&cfg.date_format, &cfg.time_format),
                ev.kind.label().to_string(),
                ev.notes.clone(),
            ]);
        }

        header(format!("{} events", events.len()));
        print!("{}", table.render());
    }

    Ok(())
}
