//! Participant and date-range selection over a lesson table.

use crate::models::Table;
use chrono::NaiveDate;

/// Participant value meaning "no participant filter".
pub const ALL_PARTICIPANTS: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub participant: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Criteria {
    /// Matches every row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_participant(kid: &str) -> Self {
        Self {
            participant: Some(kid.to_string()),
            ..Self::default()
        }
    }

    fn participant_filter(&self) -> Option<&str> {
        self.participant
            .as_deref()
            .filter(|p| *p != ALL_PARTICIPANTS)
    }
}

/// Earliest and latest lesson date, or `None` for an empty table.
pub fn date_bounds(table: &Table) -> Option<(NaiveDate, NaiveDate)> {
    let min = table.iter().map(|r| r.date).min()?;
    let max = table.iter().map(|r| r.date).max()?;
    Some((min, max))
}

/// Rows matching `criteria`, in input order.
///
/// Unset bounds default to the table's own min/max date, so an empty
/// `Criteria` keeps everything.
pub fn filter(table: &Table, criteria: &Criteria) -> Table {
    let Some((min, max)) = date_bounds(table) else {
        return Table::new();
    };
    let start = criteria.start.unwrap_or(min);
    let end = criteria.end.unwrap_or(max);
    let kid = criteria.participant_filter();

    table
        .iter()
        .filter(|r| kid.is_none_or(|k| r.kid == k))
        .filter(|r| r.date >= start && r.date <= end)
        .cloned()
        .collect()
}

/// Display order: newest first, ties keep stored order.
pub fn sort_by_date_desc(table: &Table) -> Table {
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    Table::from(rows)
}
