//! SQLite-backed record store (default backend).

use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::models::{RawRow, Table};
use crate::store::{RecordStore, StoreError, StoreErrorKind, StoreResult};
use rusqlite::types::ValueRef;
use rusqlite::{Row, params};
use std::path::Path;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open an initialised database; a missing file is `NotFound`.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::new(
                StoreErrorKind::NotFound,
                format!(
                    "database not found: {} (run `lessonlog init` first)",
                    path.display()
                ),
            ));
        }

        let pool = DbPool::open_existing(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Create the database file and schema if missing.
    pub fn create(path: &Path) -> StoreResult<Self> {
        let pool = DbPool::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    /// In-memory store with a fresh schema.
    pub fn in_memory() -> StoreResult<Self> {
        let pool = DbPool::in_memory()?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Insert a row exactly as given, bypassing record validation.
    /// Used to seed spreadsheet-like leftovers (blank rows, missing cells).
    pub fn insert_raw(&mut self, row: &RawRow) -> StoreResult<()> {
        self.pool.conn.execute(
            "INSERT INTO lessons (Date, Kid, Amount, Notes) VALUES (?1, ?2, ?3, ?4)",
            params![row.date, row.kid, row.amount, row.notes],
        )?;
        Ok(())
    }
}

/// Any SQLite cell as optional text; numbers keep their textual form.
fn cell_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        date: cell_text(row, 0)?,
        kid: cell_text(row, 1)?,
        amount: cell_text(row, 2)?,
        notes: cell_text(row, 3)?,
    })
}

impl RecordStore for SqliteStore {
    fn load_all(&mut self) -> StoreResult<Vec<RawRow>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT Date, Kid, Amount, Notes FROM lessons ORDER BY row_id ASC")?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn replace_all(&mut self, table: &Table) -> StoreResult<()> {
        // Single transaction: dropped without commit on any error → rollback.
        let tx = self.pool.conn.transaction()?;

        tx.execute("DELETE FROM lessons", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO lessons (Date, Kid, Amount, Notes) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for raw in table.unreadable() {
                stmt.execute(params![raw.date, raw.kid, raw.amount, raw.notes])?;
            }
            for rec in table {
                let [date, kid, amount, notes] = rec.to_cells();
                stmt.execute(params![date, kid, amount, notes])?;
            }
        }

        tx.commit()?;
        Ok(())
    }
}
