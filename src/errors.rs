//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::periodicity::Periodicity;
use chrono::NaiveDate;
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date/time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid periodicity: {0}")]
    InvalidPeriodicity(String),

    #[error("Invalid habit name: {0}")]
    InvalidName(String),

    #[error("Invalid habit description: {0}")]
    InvalidDescription(String),

    // ---------------------------
    // Habit engine
    // ---------------------------
    #[error("Habit with id {0} does not exist.")]
    HabitNotFound(i64),

    #[error("{}", multiple_check_off_message(.0))]
    MultipleCheckOff(Periodicity),

    #[error(
        "Invalid start date {start}: example data must start on or before {latest} (the requested weeks have to lie in the past)."
    )]
    InvalidStartDate { start: NaiveDate, latest: NaiveDate },

    #[error("Invalid number of weeks: {0} (allowed: 1 to {max})", max = crate::core::generate::MAX_WEEKS)]
    InvalidWeeks(u32),

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

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn multiple_check_off_message(periodicity: &Periodicity) -> String {
    match periodicity {
        Periodicity::Daily => "You can only check off once per day.".to_string(),
        Periodicity::Weekly => "You can only check off once every 7 days.".to_string(),
    }
}

pub type AppResult<T> = Result<T, AppError>;
