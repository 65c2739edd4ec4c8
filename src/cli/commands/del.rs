use crate::cli::commands::open_planner;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut planner = open_planner(cfg)?;

        // a missing id is a no-op: no prompt
        let ev = match planner.get(*id) {
            Ok(ev) => ev,
            Err(AppError::NotFound(_)) => {
                warning(format!("Event #{} not found: nothing deleted.", id));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let prompt = format!(
            "Delete event #{} ({})? This action is irreversible.",
            ev.id,
            ev.display_notes()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::apply(&mut planner, *id)?;
    }

    Ok(())
}
