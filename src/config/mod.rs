use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Which record store holds the lessons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Sqlite,
    Csv,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Csv => "csv",
        }
    }

    fn default_file_name(&self) -> &'static str {
        match self {
            Backend::Sqlite => "lessonlog.sqlite",
            Backend::Csv => "lessons.csv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    /// Empty in the file means the backend's default store.
    #[serde(default)]
    pub database: String,
    #[serde(default = "default_amount")]
    pub default_amount: Decimal,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_amount() -> Decimal {
    Decimal::new(4000, 2)
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let backend = Backend::default();
        Self {
            backend,
            database: Self::database_file(backend).to_string_lossy().to_string(),
            default_amount: default_amount(),
            currency_symbol: default_currency_symbol(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("lessonlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".lessonlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lessonlog.conf")
    }

    /// Default store location for a backend
    pub fn database_file(backend: Backend) -> PathBuf {
        Self::config_dir().join(backend.default_file_name())
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut cfg: Self = serde_yaml::from_str(content)?;
        if cfg.database.trim().is_empty() {
            cfg.database = Self::database_file(cfg.backend).to_string_lossy().to_string();
        }
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Point the config at another backend, moving the store to that
    /// backend's default file unless an explicit path is given.
    pub fn with_overrides(mut self, backend: Option<Backend>, database: Option<&str>) -> Self {
        if let Some(b) = backend
            && b != self.backend
        {
            self.backend = b;
            self.database = Self::database_file(b).to_string_lossy().to_string();
        }
        if let Some(db) = database {
            self.database = db.to_string();
        }
        self
    }

    /// Create the configuration directory and write the config file.
    /// In test mode the file is left untouched.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            fs::write(Self::config_file(), self.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(())
    }
}
