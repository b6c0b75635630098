//! Load/append/save semantics over a record store.

use crate::models::{LessonRecord, RawRow, Table};
use crate::store::{RecordStore, StoreError, StoreResult};
use crate::ui::messages::warning;
use std::collections::BTreeSet;

pub struct Repository {
    store: Box<dyn RecordStore>,
}

impl Repository {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Every non-blank stored row, in store order.
    ///
    /// Blank rows are dropped silently. A row that cannot be decoded is
    /// reported with a warning naming it and kept aside in the table, so the
    /// next save writes it back unchanged.
    pub fn load(&mut self) -> StoreResult<Table> {
        let raw = self.store.load_all()?;
        decode_rows(raw)
    }

    /// New table with `record` at the end. Nothing is persisted.
    pub fn append(table: &Table, record: LessonRecord) -> Table {
        let mut out = table.clone();
        out.push(record);
        out
    }

    /// Overwrite the whole store with `table` (last writer wins).
    pub fn save(&mut self, table: &Table) -> StoreResult<()> {
        self.store.replace_all(table)
    }

    /// Distinct non-empty kid names, ascending.
    pub fn list_participants(table: &Table) -> BTreeSet<String> {
        table
            .iter()
            .filter(|r| r.has_kid())
            .map(|r| r.kid.clone())
            .collect()
    }
}

fn decode_rows(raw: Vec<RawRow>) -> StoreResult<Table> {
    let mut table = Table::new();
    for (i, row) in raw.into_iter().enumerate() {
        if row.is_blank() {
            continue;
        }
        match LessonRecord::from_row(&row) {
            Ok(rec) => table.push(rec),
            Err(reason) => {
                warning(format!("{} (skipped)", StoreError::malformed(i + 1, reason)));
                table.keep_unreadable(row);
            }
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LessonInput, validate};
    use crate::store::SqliteStore;

    fn lesson(date: &str, kid: &str, amount: &str) -> LessonRecord {
        validate(LessonInput {
            date: date.into(),
            kid: kid.into(),
            amount: amount.into(),
            notes: String::new(),
        })
        .unwrap()
    }

    fn seeded(rows: &[RawRow]) -> Repository {
        let mut store = SqliteStore::in_memory().unwrap();
        for r in rows {
            store.insert_raw(r).unwrap();
        }
        Repository::new(Box::new(store))
    }

    #[test]
    fn load_drops_blank_rows_only() {
        let mut repo = seeded(&[
            RawRow::new(Some("2024-05-01"), Some("Alex"), Some("40"), Some("")),
            RawRow::default(),
            RawRow::new(Some(""), Some(" "), None, None),
            RawRow::new(Some("2024-05-02"), None, Some("10"), Some("court fee")),
        ]);

        let table = repo.load().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].kid, "Alex");
        assert_eq!(table.rows()[1].kid, "");
    }

    #[test]
    fn undecodable_rows_are_skipped_and_survive_a_save() {
        let bad_date = RawRow::new(Some("someday"), Some("Sam"), Some("35"), None);
        let no_date = RawRow::new(None, Some("Kim"), Some("30"), Some("no date"));
        let mut repo = seeded(&[
            RawRow::new(Some("2024-05-01"), Some("Alex"), Some("40"), None),
            bad_date.clone(),
            no_date.clone(),
        ]);

        let table = repo.load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.unreadable(), &[bad_date.clone(), no_date.clone()][..]);

        let new = lesson("2024-05-03", "Alex", "40");
        repo.save(&Repository::append(&table, new.clone())).unwrap();

        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.last(), Some(&new));
        assert_eq!(reloaded.unreadable().len(), 2);
        assert_eq!(reloaded.unreadable()[0].date.as_deref(), Some("someday"));
        assert_eq!(reloaded.unreadable()[1].notes.as_deref(), Some("no date"));
    }

    #[test]
    fn append_is_pure() {
        let base = Table::from(vec![lesson("2024-05-01", "Alex", "40")]);
        let next = Repository::append(&base, lesson("2024-05-01", "Alex", "40"));

        assert_eq!(base.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.rows()[0], next.rows()[1]);
    }

    #[test]
    fn save_then_load_round_trips_with_new_row_last() {
        let mut repo = seeded(&[
            RawRow::new(Some("2024-05-02"), Some("Alex"), Some("40"), None),
            RawRow::default(),
        ]);

        let table = repo.load().unwrap();
        let new = lesson("2024-04-30", "Sam", "35");
        repo.save(&Repository::append(&table, new.clone())).unwrap();

        let reloaded = repo.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.last(), Some(&new));
    }

    #[test]
    fn load_then_save_is_idempotent() {
        let mut repo = seeded(&[
            RawRow::new(Some("2024-05-01"), Some("Alex"), Some("40"), Some("")),
            RawRow::new(Some("2024-05-01"), Some("Sam"), Some("35"), Some("")),
        ]);

        let first = repo.load().unwrap();
        repo.save(&first).unwrap();
        assert_eq!(repo.load().unwrap(), first);
    }

    #[test]
    fn participants_are_sorted_and_distinct() {
        let table = Table::from(vec![
            lesson("2024-05-01", "Sam", "35"),
            lesson("2024-05-01", "Alex", "40"),
            lesson("2024-05-02", "Sam", "35"),
        ]);

        let kids: Vec<String> = Repository::list_participants(&table).into_iter().collect();
        assert_eq!(kids, vec!["Alex".to_string(), "Sam".to_string()]);
    }
}
