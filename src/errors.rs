//! Unified application error type.
//! All modules (db, core, cli, store) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Lookup / validation errors
    // ---------------------------
    #[error("Invalid attendee id: {0}")]
    InvalidAttendeeId(String),

    #[error("No attendee found with id '{0}'")]
    AttendeeNotFound(String),

    #[error("No event found with id '{0}'")]
    EventNotFound(String),

    #[error("No event selected (pass an event id or set default_event in the config)")]
    NoEventSelected,

    #[error("Invalid timestamp value: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid attendance transition: {0}")]
    Transition(String),

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
    // Import / export errors
    // ---------------------------
    #[error("Invalid load file: {0}")]
    Load(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
