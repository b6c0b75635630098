use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_LESSONS: &str = "20261018_0001_create_lessons";
const LESSONS_ORDER_INDEX: &str = "20261018_0002_lessons_date_index";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `lessons` table exists.
fn lessons_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='lessons'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `lessons` table.
///
/// Cells are nullable TEXT so rows imported from a spreadsheet survive as-is;
/// `row_id` only keeps insertion order.
fn create_lessons_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS lessons (
            row_id  INTEGER PRIMARY KEY AUTOINCREMENT,
            Date    TEXT,
            Kid     TEXT,
            Amount  TEXT,
            Notes   TEXT
        );
        "#,
    )?;
    Ok(())
}

fn add_lessons_date_index(conn: &Connection) -> Result<()> {
    if is_applied(conn, LESSONS_ORDER_INDEX)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_lessons_date ON lessons(Date);")?;
    mark_applied(conn, LESSONS_ORDER_INDEX, "Added date index to lessons")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Lessons table
    if !lessons_table_exists(conn)? {
        create_lessons_table(conn)?;
        mark_applied(conn, CREATE_LESSONS, "Created lessons table")?;
        success("Created lessons table.");
    }

    // 3) Indexes
    add_lessons_date_index(conn)?;

    Ok(())
}
