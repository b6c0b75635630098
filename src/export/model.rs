// src/export/model.rs

use crate::models::LessonRecord;
use crate::models::lesson::COLUMNS;
use serde::Serialize;

/// Flat lesson row for export, with the stored column names.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LessonExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Kid")]
    pub kid: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&LessonRecord> for LessonExport {
    fn from(r: &LessonRecord) -> Self {
        let [date, kid, amount, notes] = r.to_cells();
        Self {
            date,
            kid,
            amount,
            notes,
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> [&'static str; 4] {
    COLUMNS
}
