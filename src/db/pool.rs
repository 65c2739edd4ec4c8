//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database file without touching the schema.
    ///
    /// Any failure to open is reported as `StoreUnavailable`.
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);

        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::StoreUnavailable(format!(
                "directory '{}' does not exist (run `rplanner init` first)",
                parent.display()
            )));
        }

        let conn = Connection::open(p)
            .map_err(|e| AppError::StoreUnavailable(format!("{}: {}", path, e)))?;

        Ok(Self { conn })
    }

    /// Open the database file and apply any pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Private in-memory database with the full schema (tests, dry runs).
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StoreUnavailable(format!(":memory: {}", e)))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
