use crate::cli::commands::{criteria_from, open_repository};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::summarize;
use crate::core::filter::filter;
use crate::errors::{AppError, AppResult};
use crate::models::Report;
use crate::ui::messages::{header, info, metric};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, TextTable};
use crate::utils::{lessons_label, money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { filter: args, json } = cmd {
        let criteria = criteria_from(args)?;
        let mut repo = open_repository(cfg)?;
        let table = repo.load()?;

        if table.is_empty() && !*json {
            info("No lessons yet! Add one first.");
            return Ok(());
        }

        let report = summarize(&filter(&table, &criteria))?;

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
            println!("{out}");
        } else {
            print_report(&report, cfg);
        }
    }
    Ok(())
}

fn print_report(report: &Report, cfg: &Config) {
    let symbol = &cfg.currency_symbol;

    header("Dashboard");
    metric("💵", "Total Earned", money(report.total_amount, symbol));
    metric("📚", "Lessons Given", report.lesson_count);
    metric("🏅", "Most Active Kid", bold(&report.top_participant));

    header("💰 Total Amount by Kid");
    print!("{}", render_by_participant(report, cfg));

    header("📅 Lessons Per Day Summary");
    for line in daily_lines(report, symbol) {
        println!("{line}");
    }
}

fn render_by_participant(report: &Report, cfg: &Config) -> String {
    let mut t = TextTable::new(vec![Column::left("Kid"), Column::right("Total Amount")])
        .with_separator(cfg.separator_char.chars().next().unwrap_or('-'));

    for p in &report.by_participant {
        t.add_row(vec![p.kid.clone(), money(p.total, &cfg.currency_symbol)]);
    }
    t.render()
}

/// `2024-05-01 — 2 lessons ($75.00)`
fn daily_lines(report: &Report, symbol: &str) -> Vec<String> {
    report
        .daily
        .iter()
        .map(|d| {
            format!(
                "{} — {} ({})",
                d.date.format("%Y-%m-%d"),
                lessons_label(d.lessons),
                money(d.total, symbol)
            )
        })
        .collect()
}
