//! Record store adapters.
//!
//! A store is a durable table of `Date, Kid, Amount, Notes` rows. It only
//! knows how to hand back every row and how to overwrite every row; all
//! record semantics live in `core::repository`.

pub mod csv_file;
pub mod sqlite;

use crate::config::{Backend, Config};
use crate::models::{RawRow, Table};
use crate::utils::path::expand_tilde;
use std::fmt;
use std::io;
use thiserror::Error;

pub use csv_file::CsvStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Auth,
    Network,
    NotFound,
    RateLimit,
    Malformed,
    Io,
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StoreErrorKind::Auth => "access denied",
            StoreErrorKind::Network => "network",
            StoreErrorKind::NotFound => "not found",
            StoreErrorKind::RateLimit => "store busy",
            StoreErrorKind::Malformed => "malformed data",
            StoreErrorKind::Io => "I/O",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Row numbers are 1-based and do not count a header line.
    pub fn malformed(row: usize, reason: impl fmt::Display) -> Self {
        Self::new(StoreErrorKind::Malformed, format!("row {row}: {reason}"))
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        use io::ErrorKind as K;

        let kind = match e.kind() {
            K::PermissionDenied => StoreErrorKind::Auth,
            K::NotFound => StoreErrorKind::NotFound,
            K::ConnectionRefused
            | K::ConnectionReset
            | K::ConnectionAborted
            | K::NotConnected
            | K::TimedOut => StoreErrorKind::Network,
            K::WouldBlock => StoreErrorKind::RateLimit,
            K::InvalidData | K::UnexpectedEof => StoreErrorKind::Malformed,
            _ => StoreErrorKind::Io,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode as C;

        let kind = match e.sqlite_error_code() {
            Some(C::PermissionDenied | C::ReadOnly | C::AuthorizationForStatementDenied) => {
                StoreErrorKind::Auth
            }
            Some(C::DatabaseBusy | C::DatabaseLocked) => StoreErrorKind::RateLimit,
            Some(C::CannotOpen | C::NotFound) => StoreErrorKind::NotFound,
            Some(C::DatabaseCorrupt | C::NotADatabase) => StoreErrorKind::Malformed,
            _ => StoreErrorKind::Io,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            if let csv::ErrorKind::Io(io_err) = e.into_kind() {
                return io_err.into();
            }
            return Self::new(StoreErrorKind::Io, "CSV I/O failure");
        }
        Self::new(StoreErrorKind::Malformed, e.to_string())
    }
}

/// Durable table of lesson rows.
///
/// `replace_all` writes the table's unreadable rows first, then its records
/// in order. It is all-or-nothing: when it fails, the store keeps the rows
/// it had before the call.
pub trait RecordStore {
    fn load_all(&mut self) -> StoreResult<Vec<RawRow>>;

    fn replace_all(&mut self, table: &Table) -> StoreResult<()>;
}

/// Open the store configured in `cfg`. The store must already exist.
pub fn open_store(cfg: &Config) -> StoreResult<Box<dyn RecordStore>> {
    let path = expand_tilde(&cfg.database);
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&path)?)),
        Backend::Csv => Ok(Box::new(CsvStore::open(&path)?)),
    }
}

/// Create the configured store if missing (schema or header row only).
pub fn init_store(cfg: &Config) -> StoreResult<()> {
    let path = expand_tilde(&cfg.database);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    match cfg.backend {
        Backend::Sqlite => SqliteStore::create(&path).map(|_| ()),
        Backend::Csv => CsvStore::create(&path).map(|_| ()),
    }
}
