//! Unified application error type.
//! Every module (db, core, source, cli) returns AppError so both binaries
//! report failures the same way.

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

    // ---------------------------
    // Source file errors
    // ---------------------------
    #[error("Cannot read spreadsheet {path}: {reason}")]
    Spreadsheet { path: String, reason: String },

    #[error("Unsupported source format: {0} (expected xls, xlsx, xlsm, xlsb, ods or csv)")]
    UnsupportedFormat(String),

    // ---------------------------
    // Usage errors
    // ---------------------------
    #[error("Invalid column: {column}. Choose from [{valid}]")]
    InvalidColumn { column: String, valid: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
