//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
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
    // Storage-related
    // ---------------------------
    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupted data under storage key '{0}'")]
    Corrupt(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Name is required and cannot be empty")]
    EmptyName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid work week length (must be 1-7): {0}")]
    InvalidWeekDays(u8),

    #[error("Invalid clock event: {0}")]
    InvalidEventKind(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Company {id} still has {users} assigned user(s) and cannot be deleted")]
    CompanyInUse { id: i64, users: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
