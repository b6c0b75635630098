//! Summary metrics over a (usually filtered) lesson table.
//! Everything here is a pure function of the input rows.
//! Sums use checked arithmetic: stored rows are not capped like new input.

use crate::errors::{AppError, AppResult};
use crate::models::{DaySummary, ParticipantTotal, Report, Table};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Shown instead of a kid name when there is nobody to show.
pub const NOT_AVAILABLE: &str = "N/A";

fn add_amount(acc: &mut Decimal, amount: Decimal, what: &'static str) -> AppResult<()> {
    *acc = acc
        .checked_add(amount)
        .ok_or(AppError::AmountOverflow(what))?;
    Ok(())
}

pub fn total_amount(table: &Table) -> AppResult<Decimal> {
    let mut total = Decimal::ZERO;
    for r in table {
        add_amount(&mut total, r.amount, "the total amount")?;
    }
    Ok(total)
}

pub fn lesson_count(table: &Table) -> usize {
    table.len()
}

/// Kid with the most lessons.
///
/// On a tie the kid whose first lesson appears earliest in the table wins.
/// Rows without a kid are not counted.
pub fn top_participant(table: &Table) -> String {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for r in table.iter().filter(|r| r.has_kid()) {
        let kid = r.kid.as_str();
        match index.get(kid).copied() {
            Some(i) => order[i].1 += 1,
            None => {
                index.insert(kid, order.len());
                order.push((kid, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(kid, n) in &order {
        if best.is_none_or(|(_, max)| n > max) {
            best = Some((kid, n));
        }
    }

    best.map(|(kid, _)| kid.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Amount per kid, ascending by name.
pub fn totals_by_participant(table: &Table) -> AppResult<Vec<ParticipantTotal>> {
    let mut groups: BTreeMap<&str, Decimal> = BTreeMap::new();
    for r in table.iter().filter(|r| r.has_kid()) {
        add_amount(
            groups.entry(r.kid.as_str()).or_default(),
            r.amount,
            "the totals by kid",
        )?;
    }

    Ok(groups
        .into_iter()
        .map(|(kid, total)| ParticipantTotal {
            kid: kid.to_string(),
            total,
        })
        .collect())
}

/// Lessons and amount per day, ascending by date.
pub fn daily_summary(table: &Table) -> AppResult<Vec<DaySummary>> {
    let mut days: BTreeMap<NaiveDate, (usize, Decimal)> = BTreeMap::new();
    for r in table {
        let entry = days.entry(r.date).or_default();
        entry.0 += 1;
        add_amount(&mut entry.1, r.amount, "the daily summary")?;
    }

    Ok(days
        .into_iter()
        .map(|(date, (lessons, total))| DaySummary {
            date,
            lessons,
            total,
        })
        .collect())
}

pub fn summarize(table: &Table) -> AppResult<Report> {
    Ok(Report {
        total_amount: total_amount(table)?,
        lesson_count: lesson_count(table),
        top_participant: top_participant(table),
        by_participant: totals_by_participant(table)?,
        daily: daily_summary(table)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{Criteria, filter};
    use crate::models::{LessonInput, LessonRecord, RawRow, validate};

    fn lesson(date: &str, kid: &str, amount: &str) -> LessonRecord {
        validate(LessonInput {
            date: date.into(),
            kid: kid.into(),
            amount: amount.into(),
            notes: String::new(),
        })
        .unwrap()
    }

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Table {
        Table::from(vec![
            lesson("2024-05-01", "Alex", "40"),
            lesson("2024-05-01", "Sam", "35"),
            lesson("2024-05-02", "Alex", "40"),
        ])
    }

    #[test]
    fn scenario_metrics() {
        let t = sample();
        assert_eq!(total_amount(&t).unwrap(), dec(115));
        assert_eq!(lesson_count(&t), 3);
        assert_eq!(top_participant(&t), "Alex");
        assert_eq!(
            totals_by_participant(&t).unwrap(),
            vec![
                ParticipantTotal { kid: "Alex".into(), total: dec(80) },
                ParticipantTotal { kid: "Sam".into(), total: dec(35) },
            ]
        );
        assert_eq!(
            daily_summary(&t).unwrap(),
            vec![
                DaySummary { date: d("2024-05-01"), lessons: 2, total: dec(75) },
                DaySummary { date: d("2024-05-02"), lessons: 1, total: dec(40) },
            ]
        );
    }

    #[test]
    fn filtered_total_matches_definition() {
        let t = sample();
        let sam = filter(&t, &Criteria::for_participant("Sam"));
        assert_eq!(lesson_count(&sam), 1);
        assert_eq!(total_amount(&sam).unwrap(), dec(35));

        let expected: Decimal = t.iter().filter(|r| r.kid == "Alex").map(|r| r.amount).sum();
        assert_eq!(
            total_amount(&filter(&t, &Criteria::for_participant("Alex"))).unwrap(),
            expected
        );
    }

    #[test]
    fn empty_table_edges() {
        let t = Table::new();
        assert_eq!(top_participant(&t), NOT_AVAILABLE);
        assert_eq!(total_amount(&t).unwrap(), Decimal::ZERO);
        assert!(daily_summary(&t).unwrap().is_empty());
        assert!(totals_by_participant(&t).unwrap().is_empty());
    }

    #[test]
    fn tie_goes_to_earliest_first_occurrence() {
        let t = Table::from(vec![
            lesson("2024-05-03", "Sam", "35"),
            lesson("2024-05-01", "Alex", "40"),
            lesson("2024-05-02", "Alex", "40"),
            lesson("2024-05-04", "Sam", "35"),
        ]);
        assert_eq!(top_participant(&t), "Sam");
    }

    #[test]
    fn rows_without_kid_count_toward_totals_only() {
        let mut rows = vec![lesson("2024-05-01", "Alex", "40")];
        rows.push(
            LessonRecord::from_row(&RawRow::new(Some("2024-05-01"), None, Some("5"), None))
                .unwrap(),
        );
        let t = Table::from(rows);

        assert_eq!(total_amount(&t).unwrap(), dec(45));
        assert_eq!(lesson_count(&t), 2);
        assert_eq!(totals_by_participant(&t).unwrap().len(), 1);
        assert_eq!(daily_summary(&t).unwrap()[0].lessons, 2);
    }

    #[test]
    fn only_kidless_rows_have_no_top_participant() {
        let t = Table::from(vec![
            LessonRecord::from_row(&RawRow::new(Some("2024-05-01"), None, Some("5"), None))
                .unwrap(),
        ]);
        assert_eq!(top_participant(&t), NOT_AVAILABLE);
    }

    #[test]
    fn decimal_amounts_sum_exactly() {
        let t = Table::from(vec![
            lesson("2024-05-01", "Alex", "0.10"),
            lesson("2024-05-01", "Alex", "0.20"),
        ]);
        assert_eq!(total_amount(&t).unwrap(), Decimal::new(30, 2));
    }

    fn stored(date: &str, kid: &str, amount: &str) -> LessonRecord {
        LessonRecord::from_row(&RawRow::new(Some(date), Some(kid), Some(amount), None)).unwrap()
    }

    #[test]
    fn overflowing_stored_amounts_are_an_error() {
        let huge = "79228162514264337593543950335";
        let t = Table::from(vec![
            stored("2024-05-01", "Alex", huge),
            stored("2024-05-01", "Alex", huge),
        ]);

        assert!(matches!(total_amount(&t), Err(AppError::AmountOverflow(_))));
        assert!(totals_by_participant(&t).is_err());
        assert!(daily_summary(&t).is_err());
        assert!(summarize(&t).is_err());
    }

    #[test]
    fn summarize_bundles_everything() {
        let report = summarize(&sample()).unwrap();
        assert_eq!(report.total_amount, dec(115));
        assert_eq!(report.top_participant, "Alex");
        assert_eq!(report.by_participant.len(), 2);
        assert_eq!(report.daily.len(), 2);
    }
}
