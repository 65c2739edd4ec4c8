use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPlanner
#[derive(Parser)]
#[command(
    name = "rplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small personal calendar: once, daily, weekly and yearly events with notes, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add an event
    Add {
        /// Date of the event (YYYY-MM-DD or DD.MM.YYYY)
        date: String,

        /// Time of the event (HH:MM, 24h)
        time: String,

        #[arg(
            long = "kind",
            short = 'k',
            help = "Recurrence: once, daily, weekly, yearly (default from config)"
        )]
        kind: Option<String>,

        #[arg(long = "notes", short = 'n', help = "Event notes (may span several lines)")]
        notes: String,
    },

    /// Edit an event; omitted fields keep their current value
    Edit {
        /// Event id
        id: i64,

        #[arg(long = "date", help = "New date (YYYY-MM-DD or DD.MM.YYYY)")]
        date: Option<String>,

        #[arg(long = "time", help = "New time (HH:MM)")]
        time: Option<String>,

        #[arg(long = "kind", short = 'k', help = "New recurrence: once, daily, weekly, yearly")]
        kind: Option<String>,

        #[arg(long = "notes", short = 'n', help = "New notes")]
        notes: Option<String>,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show a single event
    Show {
        /// Event id
        id: i64,
    },

    /// List all stored events
    List,

    /// Show the events occurring on a day (default: today)
    Day {
        /// Date (YYYY-MM-DD or DD.MM.YYYY)
        date: Option<String>,
    },

    /// Show a month calendar with event markers (default: current month)
    Month {
        /// Month (YYYY-MM)
        month: Option<String>,

        #[arg(long = "no-color", help = "Disable colours in the grid")]
        no_color: bool,
    },

    /// Export all events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
