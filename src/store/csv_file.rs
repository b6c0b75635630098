//! CSV-file record store: a header row `Date,Kid,Amount,Notes` followed by
//! one line per lesson, in insertion order.

use crate::models::lesson::COLUMNS;
use crate::models::{RawRow, Table};
use crate::store::{RecordStore, StoreError, StoreErrorKind, StoreResult};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open an existing CSV file; a missing file is `NotFound`.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::new(
                StoreErrorKind::NotFound,
                format!(
                    "CSV store not found: {} (run `lessonlog init` first)",
                    path.display()
                ),
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Create the file with only the header row, unless it already exists.
    pub fn create(path: &Path) -> StoreResult<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };
        if !path.exists() {
            store.replace_all_rows(&Table::new())?;
        }
        Ok(store)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_to(path: &Path, table: &Table) -> StoreResult<()> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(COLUMNS)?;
        for raw in table.unreadable() {
            wtr.write_record(raw.cells())?;
        }
        for rec in table {
            wtr.write_record(rec.to_cells())?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write everything to a sibling temp file, then rename it over the store.
    fn replace_all_rows(&self, table: &Table) -> StoreResult<()> {
        let tmp = self.temp_path();

        if let Err(e) = Self::write_to(&tmp, table) {
            fs::remove_file(&tmp).ok();
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }
        Ok(())
    }
}

/// Position of each expected column in the header. A leading UTF-8 BOM
/// (spreadsheet exports) is ignored.
fn column_positions(headers: &StringRecord) -> StoreResult<[usize; 4]> {
    let mut out = [0usize; 4];
    for (slot, name) in out.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
            .ok_or_else(|| {
                StoreError::new(
                    StoreErrorKind::Malformed,
                    format!("missing column '{name}' in header"),
                )
            })?;
    }
    Ok(out)
}

impl RecordStore for CsvStore {
    fn load_all(&mut self) -> StoreResult<Vec<RawRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let [date, kid, amount, notes] = column_positions(rdr.headers()?)?;
        let cell = |rec: &StringRecord, i: usize| rec.get(i).map(String::from);

        let mut out = Vec::new();
        for record in rdr.records() {
            let rec = record?;
            out.push(RawRow {
                date: cell(&rec, date),
                kid: cell(&rec, kid),
                amount: cell(&rec, amount),
                notes: cell(&rec, notes),
            });
        }
        Ok(out)
    }

    fn replace_all(&mut self, table: &Table) -> StoreResult<()> {
        self.replace_all_rows(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LessonInput, validate};

    fn temp_csv(name: &str) -> PathBuf {
        let p = std::env::temp_dir().join(format!("lessonlog_{name}.csv"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn create_writes_header_only() {
        let path = temp_csv("csv_create");
        CsvStore::create(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "Date,Kid,Amount,Notes");
    }

    #[test]
    fn load_keeps_blank_rows_and_reordered_columns() {
        let path = temp_csv("csv_reordered");
        fs::write(
            &path,
            "Kid,Date,Amount,Notes\nAlex,2024-05-01,40,\n,,,\nSam,2024-05-02,35,\"first, lesson\"\n",
        )
        .unwrap();

        let mut store = CsvStore::open(&path).unwrap();
        let rows = store.load_all().unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date.as_deref(), Some("2024-05-01"));
        assert!(rows[1].is_blank());
        assert_eq!(rows[2].notes.as_deref(), Some("first, lesson"));
    }

    #[test]
    fn header_with_bom_is_accepted() {
        let path = temp_csv("csv_bom");
        fs::write(&path, "\u{feff}Date,Kid,Amount,Notes\n2024-05-01,Alex,40,\n").unwrap();

        let mut store = CsvStore::open(&path).unwrap();
        let rows = store.load_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn missing_column_is_malformed() {
        let path = temp_csv("csv_missing_col");
        fs::write(&path, "Date,Kid,Notes\n2024-05-01,Alex,\n").unwrap();

        let mut store = CsvStore::open(&path).unwrap();
        let err = store.load_all().unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::Malformed);
    }

    #[test]
    fn replace_all_leaves_no_temp_file() {
        let path = temp_csv("csv_replace");
        let mut store = CsvStore::create(&path).unwrap();

        let rec = validate(LessonInput {
            date: "2024-05-01".into(),
            kid: "Alex".into(),
            amount: "40".into(),
            notes: "dribbling".into(),
        })
        .unwrap();
        store.replace_all(&Table::from(vec![rec])).unwrap();

        assert!(!store.temp_path().exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("2024-05-01,Alex,40,dribbling"));
    }
}
