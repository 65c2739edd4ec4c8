//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Event store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Event #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Validation (form input)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid recurrence kind: {0}")]
    InvalidRecurrence(String),

    #[error("Invalid notes: {0}")]
    InvalidNotes(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for errors raised while validating user input.
    /// These never reach the store or the recurrence matcher.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidMonth(_)
                | AppError::InvalidRecurrence(_)
                | AppError::InvalidNotes(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
