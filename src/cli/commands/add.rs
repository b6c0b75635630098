use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::models::LessonInput;
use crate::ui::messages::success;
use crate::utils::{date, money, short_date};

/// Log a new lesson.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kid,
        date: lesson_date,
        amount,
        notes,
    } = cmd
    {
        //
        // 1. Form input, with the configured defaults
        //
        let input = LessonInput {
            date: lesson_date
                .clone()
                .unwrap_or_else(|| date::today().format("%Y-%m-%d").to_string()),
            kid: kid.clone(),
            amount: amount
                .clone()
                .unwrap_or_else(|| cfg.default_amount.to_string()),
            notes: notes.clone().unwrap_or_default(),
        };

        //
        // 2. Validate, append, save
        //
        let mut repo = open_repository(cfg)?;
        let record = AddLogic::apply(&mut repo, input)?;

        let msg = format!(
            "Saved lesson for {} on {}",
            record.kid,
            short_date(record.date)
        );
        success(format!(
            "{} ({})",
            msg,
            money(record.amount, &cfg.currency_symbol)
        ));

        //
        // 3. Internal log (non-blocking)
        //
        LogLogic::record(cfg, "add", &record.kid, &msg);
    }

    Ok(())
}
