// src/export/logic.rs

use crate::core::filter::{Criteria, filter};
use crate::core::repository::Repository;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::LessonExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the lessons matching `criteria`, in stored order.
    ///
    /// Returns the number of exported rows; nothing is written when no row
    /// matches.
    pub fn export(
        repo: &mut Repository,
        format: ExportFormat,
        file: &Path,
        criteria: &Criteria,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let table = filter(&repo.load()?, criteria);

        if table.is_empty() {
            warning("No lessons found for the selected filters.");
            return Ok(0);
        }

        let rows: Vec<LessonExport> = table.iter().map(LessonExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
            ExportFormat::Xlsx => export_xlsx(&rows, file)?,
        }

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LessonInput, Table, validate};
    use crate::store::SqliteStore;
    use std::fs;

    fn repo_with_lessons() -> Repository {
        let mut repo = Repository::new(Box::new(SqliteStore::in_memory().unwrap()));
        let table: Table = [("2024-05-01", "Alex", "40"), ("2024-05-02", "Sam", "35")]
            .into_iter()
            .map(|(date, kid, amount)| {
                validate(LessonInput {
                    date: date.into(),
                    kid: kid.into(),
                    amount: amount.into(),
                    notes: "drills".into(),
                })
                .unwrap()
            })
            .collect();
        repo.save(&table).unwrap();
        repo
    }

    fn temp_out(name: &str) -> std::path::PathBuf {
        let p = std::env::temp_dir().join(name);
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn csv_export_uses_stored_header() {
        let mut repo = repo_with_lessons();
        let out = temp_out("lessonlog_export_unit.csv");

        let n = ExportLogic::export(&mut repo, ExportFormat::Csv, &out, &Criteria::all(), false)
            .unwrap();
        assert_eq!(n, 2);

        let content = fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Date,Kid,Amount,Notes"));
        assert_eq!(lines.next(), Some("2024-05-01,Alex,40,drills"));
    }

    #[test]
    fn json_export_respects_filter() {
        let mut repo = repo_with_lessons();
        let out = temp_out("lessonlog_export_unit.json");

        let n = ExportLogic::export(
            &mut repo,
            ExportFormat::Json,
            &out,
            &Criteria::for_participant("Sam"),
            false,
        )
        .unwrap();
        assert_eq!(n, 1);

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("\"Kid\": \"Sam\""));
        assert!(!content.contains("Alex"));
    }

    #[test]
    fn no_match_writes_nothing() {
        let mut repo = repo_with_lessons();
        let out = temp_out("lessonlog_export_unit_none.csv");

        let n = ExportLogic::export(
            &mut repo,
            ExportFormat::Csv,
            &out,
            &Criteria::for_participant("Nobody"),
            false,
        )
        .unwrap();
        assert_eq!(n, 0);
        assert!(!out.exists());
    }
}
