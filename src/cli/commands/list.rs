use crate::cli::commands::{criteria_from, open_repository};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{filter, sort_by_date_desc};
use crate::errors::AppResult;
use crate::models::Table;
use crate::ui::messages::{header, info, warning};
use crate::utils::table::{Column, TextTable};
use crate::utils::{lessons_label, money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter: args } = cmd {
        let criteria = criteria_from(args)?;
        let mut repo = open_repository(cfg)?;
        let table = repo.load()?;

        if table.is_empty() {
            info("No lessons yet! Add one first.");
            return Ok(());
        }

        let selected = filter(&table, &criteria);
        if selected.is_empty() {
            warning("No lessons match the selected filters.");
            return Ok(());
        }

        header("Lesson Log");
        print!("{}", render_log(&sort_by_date_desc(&selected), cfg));
        println!("{}", lessons_label(selected.len()));
    }
    Ok(())
}

fn render_log(table: &Table, cfg: &Config) -> String {
    let mut t = TextTable::new(vec![
        Column::left("Date"),
        Column::left("Kid"),
        Column::right("Amount"),
        Column::left("Notes"),
    ])
    .with_separator(cfg.separator_char.chars().next().unwrap_or('-'));

    for r in table {
        t.add_row(vec![
            r.date_str(),
            r.kid.clone(),
            money(r.amount, &cfg.currency_symbol),
            r.notes.replace(['\r', '\n'], " "),
        ]);
    }
    t.render()
}
