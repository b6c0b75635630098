use crate::cli::commands::{criteria_from, open_repository};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let criteria = criteria_from(filter)?;
        let path = expand_tilde(file);
        let mut repo = open_repository(cfg)?;

        let n = ExportLogic::export(&mut repo, *format, &path, &criteria, *force)?;

        if n > 0 {
            LogLogic::record(
                cfg,
                "export",
                &path.to_string_lossy(),
                &format!("Exported {n} lessons as {}", format.as_str()),
            );
        }
    }
    Ok(())
}
