pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod kids;
pub mod list;
pub mod log;
pub mod report;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::filter::Criteria;
use crate::core::repository::Repository;
use crate::errors::{AppError, AppResult};
use crate::store::open_store;
use crate::utils::date;

/// Repository over the configured store.
pub(crate) fn open_repository(cfg: &Config) -> AppResult<Repository> {
    Ok(Repository::new(open_store(cfg)?))
}

/// Turn the filter flags into criteria.
///
/// `--period` sets both bounds; `--from` / `--to` override either one.
pub(crate) fn criteria_from(args: &FilterArgs) -> AppResult<Criteria> {
    let (mut start, mut end) = match args.period.as_deref() {
        None => (None, None),
        Some(p) if p.eq_ignore_ascii_case("all") => (None, None),
        Some(p) => {
            let (s, e) = date::parse_range(p)?;
            (Some(s), Some(e))
        }
    };

    if let Some(f) = &args.from {
        start = Some(date::parse_date(f).ok_or_else(|| AppError::InvalidDate(f.clone()))?);
    }
    if let Some(t) = &args.to {
        end = Some(date::parse_date(t).ok_or_else(|| AppError::InvalidDate(t.clone()))?);
    }

    Ok(Criteria {
        participant: args.kid.as_deref().map(str::trim).map(String::from),
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn empty_flags_match_everything() {
        assert_eq!(criteria_from(&FilterArgs::default()).unwrap(), Criteria::all());
    }

    #[test]
    fn explicit_bounds_override_period() {
        let args = FilterArgs {
            kid: Some("Sam".into()),
            from: Some("2024-05-10".into()),
            to: None,
            period: Some("2024-05".into()),
        };
        let c = criteria_from(&args).unwrap();
        assert_eq!(c.participant.as_deref(), Some("Sam"));
        assert_eq!(c.start, d(2024, 5, 10));
        assert_eq!(c.end, d(2024, 5, 31));
    }

    #[test]
    fn bad_date_is_reported() {
        let args = FilterArgs {
            to: Some("tomorrow".into()),
            ..FilterArgs::default()
        };
        assert!(matches!(criteria_from(&args), Err(AppError::InvalidDate(_))));
    }
}
