//! Unified application error type.
//! All modules (store, db, render, notify, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored state is corrupted: {0}")]
    State(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid work type: {0} (expected 'daily' or 'hourly')")]
    InvalidWorkType(String),

    #[error("Invalid amount {amount} for {work_type} entry: {reason}")]
    InvalidAmount {
        work_type: String,
        amount: f64,
        reason: String,
    },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("{0} falls on a weekend (use --weekend to record it anyway)")]
    WeekendDate(String),

    #[error("No entry found with id {0}")]
    EntryNotFound(String),

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
    // Documents & export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Email delivery
    // ---------------------------
    #[error("No client email configured (use `settings --emails`)")]
    NoRecipients,

    #[error("Email delivery failed: {0}")]
    Email(String),
}

pub type AppResult<T> = Result<T, AppError>;
