use crate::config::{Backend, Config};
use crate::db::log::{LogEntry, load_log, ttlog};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// Color for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// "op (target)" cut to `MAX_OP_WIDTH` visible chars, with only the
/// operation word colored. Returns the colored text and its visible width.
fn op_target_cell(entry: &LogEntry) -> (String, usize) {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible: String = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };
    let width = visible.chars().count();

    let color = color_for_operation(&entry.operation);
    let colored = match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    };
    (colored, width)
}

pub struct LogLogic;

impl LogLogic {
    /// Append an entry to the internal log.
    ///
    /// Only the sqlite backend keeps a log. Failures are reported as a
    /// warning and never fail the calling command.
    pub fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
        if cfg.backend != Backend::Sqlite {
            return;
        }

        let result = DbPool::open_existing(&expand_tilde(&cfg.database))
            .map_err(AppError::from)
            .and_then(|pool| ttlog(&pool.conn, operation, target, message));

        if let Err(e) = result {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn print_log(cfg: &Config) -> AppResult<()> {
        if cfg.backend != Backend::Sqlite {
            info("The internal log is kept only by the sqlite backend.");
            return Ok(());
        }

        let pool = DbPool::open_existing(&expand_tilde(&cfg.database))?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let cells: Vec<(String, usize)> = entries.iter().map(op_target_cell).collect();

        let op_w = cells.iter().map(|(_, w)| *w).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, (cell, width)) in entries.iter().zip(&cells) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());
            let padding = " ".repeat(op_w.saturating_sub(*width));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, date, cell, padding, entry.message,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2026-10-18T10:00:00+02:00".into(),
            operation: op.into(),
            target: target.into(),
            message: String::new(),
        }
    }

    #[test]
    fn long_targets_are_truncated() {
        let (_, width) = op_target_cell(&entry("backup", &"x".repeat(100)));
        assert_eq!(width, MAX_OP_WIDTH);
    }

    #[test]
    fn short_cells_keep_their_width() {
        let (cell, width) = op_target_cell(&entry("add", "Alex"));
        assert_eq!(width, "add (Alex)".len());
        assert!(cell.ends_with("(Alex)"));
    }
}
