//! One handler per subcommand. Each handler receives the parsed command and
//! the loaded configuration.

pub mod add;
pub mod config;
pub mod day;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod month;
pub mod show;

use crate::config::Config;
use crate::core::planner::Planner;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database (migrating it if needed) behind a planner.
pub(crate) fn open_planner(cfg: &Config) -> AppResult<Planner<DbPool>> {
    cfg.ensure_database_dir()?;
    let pool = DbPool::open(&cfg.database)?;
    Ok(Planner::new(pool))
}
