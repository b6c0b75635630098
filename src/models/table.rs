//! In-memory lesson table and the raw rows a store hands back.

use crate::models::lesson::LessonRecord;

/// One stored row before decoding: four optional text cells
/// (`Date, Kid, Amount, Notes`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub date: Option<String>,
    pub kid: Option<String>,
    pub amount: Option<String>,
    pub notes: Option<String>,
}

impl RawRow {
    pub fn new(
        date: Option<&str>,
        kid: Option<&str>,
        amount: Option<&str>,
        notes: Option<&str>,
    ) -> Self {
        Self {
            date: date.map(String::from),
            kid: kid.map(String::from),
            amount: amount.map(String::from),
            notes: notes.map(String::from),
        }
    }

    /// Every cell missing or whitespace only (spreadsheet leftovers).
    pub fn is_blank(&self) -> bool {
        [&self.date, &self.kid, &self.amount, &self.notes]
            .iter()
            .all(|c| c.as_deref().is_none_or(|s| s.trim().is_empty()))
    }

    /// Cells in `COLUMNS` order, missing ones as empty text.
    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.kid, &self.amount, &self.notes].map(|c| c.as_deref().unwrap_or(""))
    }
}

/// Ordered lesson rows. Insertion order is the stored order.
///
/// Stored rows that could not be decoded ride along untouched in
/// `unreadable`, so saving a loaded table never drops them. They are not
/// lessons: `len`, iteration and every aggregate ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<LessonRecord>,
    unreadable: Vec<RawRow>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[LessonRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LessonRecord> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&LessonRecord> {
        self.rows.last()
    }

    pub fn unreadable(&self) -> &[RawRow] {
        &self.unreadable
    }

    pub(crate) fn push(&mut self, record: LessonRecord) {
        self.rows.push(record);
    }

    pub(crate) fn keep_unreadable(&mut self, row: RawRow) {
        self.unreadable.push(row);
    }
}

impl From<Vec<LessonRecord>> for Table {
    fn from(rows: Vec<LessonRecord>) -> Self {
        Self {
            rows,
            unreadable: Vec::new(),
        }
    }
}

impl FromIterator<LessonRecord> for Table {
    fn from_iter<I: IntoIterator<Item = LessonRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
            unreadable: Vec::new(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a LessonRecord;
    type IntoIter = std::slice::Iter<'a, LessonRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_row_detection() {
        assert!(RawRow::default().is_blank());
        assert!(RawRow::new(Some(""), Some("  "), None, Some("")).is_blank());
        assert!(!RawRow::new(None, None, None, Some("note")).is_blank());
    }

    #[test]
    fn raw_cells_fill_missing_with_empty() {
        let row = RawRow::new(Some("soon"), None, Some("40"), None);
        assert_eq!(row.cells(), ["soon", "", "40", ""]);
    }
}
