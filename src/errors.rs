//! Unified application error type.
//! Every module (core, cli, config, utils) returns AppError so the shell
//! can decide in one place how a failure is shown to the user.

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
    // Import errors
    // ---------------------------
    /// Any failure while opening or parsing the CSV file.
    #[error("Failed to import CSV: {0}")]
    Import(String),

    #[error("CSV must have 'Name' and 'Date' columns.")]
    InvalidFormat,

    #[error("The CSV file appears to be empty.")]
    EmptyFile,

    // ---------------------------
    // Table errors
    // ---------------------------
    #[error("Invalid row number: {0}")]
    InvalidRow(usize),

    #[error("Invalid visit type: {0}")]
    InvalidVisitType(String),

    // ---------------------------
    // Shell / output errors
    // ---------------------------
    #[error("{0}")]
    Command(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl AppError {
    /// Warnings abort the operation before any row is touched.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::InvalidFormat | AppError::EmptyFile)
    }

    /// Short title shown in front of the message, like a dialog caption.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidFormat => "Invalid Format",
            AppError::EmptyFile => "Empty File",
            _ => "Error",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
