//! Unified application error type.
//! All modules (sheet, core, render, mail, cli) return AppError to keep the
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
    // Workbook-related
    // ---------------------------
    #[error("Workbook error: {0}")]
    Sheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed {kind} row {row}: {reason}")]
    MalformedRow {
        kind: &'static str,
        row: usize,
        reason: String,
    },

    #[error("Invalid cutoff window: {0}")]
    Window(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No client record found for '{0}'")]
    ClientNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Document and delivery errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    #[error("Email error: {0}")]
    Email(String),

    // ---------------------------
    // Batch outcome
    // ---------------------------
    #[error("{failed} of {total} clients failed: {names}")]
    Batch {
        failed: usize,
        total: usize,
        names: String,
    },
}

pub type AppResult<T> = Result<T, AppError>;
