use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Amount earned from one kid over the selected rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantTotal {
    pub kid: String,
    pub total: Decimal,
}

/// Lessons given on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub lessons: usize,
    pub total: Decimal,
}

/// Every aggregate shown by the report, computed from one filtered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_amount: Decimal,
    pub lesson_count: usize,
    pub top_participant: String,
    pub by_participant: Vec<ParticipantTotal>,
    pub daily: Vec<DaySummary>,
}
