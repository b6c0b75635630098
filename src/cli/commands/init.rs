use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::init_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the store: SQLite schema + migrations, or a CSV file with its header
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.init_all(cli.test)?;

    println!("⚙️  Initializing lessonlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Store       : {} ({})", cfg.database, cfg.backend.as_str());

    init_store(cfg)?;

    println!("✅ Store initialized at {}", cfg.database);

    LogLogic::record(
        cfg,
        "init",
        "Store initialized",
        &format!("Store initialized at {}", cfg.database),
    );

    println!("🎉 lessonlog initialization completed!");
    Ok(())
}
