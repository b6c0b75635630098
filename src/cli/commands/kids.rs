use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::Repository;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Kids) {
        let mut repo = open_repository(cfg)?;
        let kids = Repository::list_participants(&repo.load()?);

        if kids.is_empty() {
            info("No kids yet! Add a lesson first.");
            return Ok(());
        }

        header("Kids");
        for kid in &kids {
            println!("- {kid}");
        }
    }
    Ok(())
}
