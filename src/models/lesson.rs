use crate::errors::ValidationError;
use crate::models::table::RawRow;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Column names of the persisted layout, in storage order.
pub const COLUMNS: [&str; 4] = ["Date", "Kid", "Amount", "Notes"];

/// Largest amount accepted for a single lesson.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonRecord {
    pub date: NaiveDate,   // ⇔ Date   (TEXT "YYYY-MM-DD")
    pub kid: String,       // ⇔ Kid    (exact match identity)
    pub amount: Decimal,   // ⇔ Amount (TEXT decimal)
    pub notes: String,     // ⇔ Notes
}

/// Raw form input for a new lesson, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct LessonInput {
    pub date: String,
    pub kid: String,
    pub amount: String,
    pub notes: String,
}

/// Turn raw input into a record, or say exactly what is wrong with it.
///
/// The kid name is trimmed; an empty name, an unparseable, negative or
/// oversized amount and a date not in `YYYY-MM-DD` form are rejected.
pub fn validate(raw: LessonInput) -> Result<LessonRecord, ValidationError> {
    let kid = raw.kid.trim();
    if kid.is_empty() {
        return Err(ValidationError::EmptyKid);
    }

    let date = NaiveDate::parse_from_str(raw.date.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.date.clone()))?;

    let amount = Decimal::from_str(raw.amount.trim())
        .map_err(|_| ValidationError::InvalidAmount(raw.amount.clone()))?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }

    Ok(LessonRecord {
        date,
        kid: kid.to_string(),
        amount,
        notes: raw.notes.trim_end_matches(['\r', '\n']).to_string(),
    })
}

impl LessonRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// True when the row names a participant (rows from the store may not).
    pub fn has_kid(&self) -> bool {
        !self.kid.trim().is_empty()
    }

    /// Cells in `COLUMNS` order, as written to every backend.
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.date_str(),
            self.kid.clone(),
            self.amount.to_string(),
            self.notes.clone(),
        ]
    }

    /// Decode a non-blank stored row.
    ///
    /// Stored rows are read leniently: a missing amount counts as zero, a
    /// missing kid or note is kept empty, and dates written with a time part
    /// keep only the day. The date itself is mandatory.
    pub fn from_row(row: &RawRow) -> Result<Self, String> {
        let date_raw = non_blank(&row.date).ok_or_else(|| "missing Date".to_string())?;
        let date = parse_stored_date(date_raw)
            .ok_or_else(|| format!("invalid Date '{}'", date_raw))?;

        let amount = match non_blank(&row.amount) {
            None => Decimal::ZERO,
            Some(a) => Decimal::from_str(a).map_err(|_| format!("invalid Amount '{}'", a))?,
        };

        Ok(Self {
            date,
            kid: non_blank(&row.kid).unwrap_or_default().to_string(),
            amount,
            notes: row.notes.clone().unwrap_or_default(),
        })
    }
}

fn non_blank(cell: &Option<String>) -> Option<&str> {
    cell.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time (`' '` or `'T'` separated).
fn parse_stored_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    match (s.get(..10), s.get(10..11)) {
        (Some(day), Some(" " | "T")) => NaiveDate::parse_from_str(day, "%Y-%m-%d").ok(),
        _ => None,
    }
}
