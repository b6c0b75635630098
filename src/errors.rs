//! Unified application error type.
//! Validation and store failures keep their own types so the core can return
//! them unmodified; the CLI folds everything into AppError.

use crate::store::StoreError;
use rust_decimal::Decimal;
use std::io;
use thiserror::Error;

/// Bad user input for a new lesson. Never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Kid's name must not be empty")]
    EmptyKid,

    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Amount too large: {0} (maximum {max})", max = crate::models::lesson::MAX_AMOUNT)]
    AmountTooLarge(Decimal),

    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Totals
    // ---------------------------
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),
}

pub type AppResult<T> = Result<T, AppError>;
