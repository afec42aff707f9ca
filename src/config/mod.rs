use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// First data row of the agenda sheet (zero-based); rows above hold titles and headers.
pub const DEFAULT_START_ROW: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_start_row")]
    pub start_row: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_start_row() -> usize {
    DEFAULT_START_ROW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            start_row: default_start_row(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.agenda`, or `./.agenda` without a home dir)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".agenda")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("agenda.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("agenda.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a YAML document; missing keys fall back to defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply per-run overrides coming from the command line.
    pub fn with_overrides(mut self, db: Option<&str>, start_row: Option<usize>) -> Self {
        if let Some(custom_db) = db {
            self.database = custom_db.to_string();
        }
        if let Some(row) = start_row {
            self.start_row = row;
        }
        self
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Make sure the directory holding the database exists.
    pub fn ensure_database_dir(&self) -> AppResult<()> {
        if let Some(parent) = self.database_path().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}
