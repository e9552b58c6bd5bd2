use crate::errors::{AppError, AppResult};
use crate::models::category::DEFAULT_CATEGORIES;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "HourTracker";
const UNIX_APP_DIR: &str = ".hourtracker";
const CONFIG_FILE: &str = "hourtracker.conf";
const DATABASE_FILE: &str = "hours.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Upper bound for `hours` accepted by `add` / `edit`.
    #[serde(default = "default_max_hours")]
    pub max_hours: f64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Write `Name` and `Notes` columns on CSV export by default.
    #[serde(default)]
    pub csv_extended: bool,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}
fn default_max_hours() -> f64 {
    24.0
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            categories: default_categories(),
            max_hours: default_max_hours(),
            separator_char: default_separator_char(),
            csv_extended: false,
        }
    }
}

impl Config {
    /// Per-user storage directory:
    /// `%LOCALAPPDATA%\HourTracker` on Windows,
    /// `~/Library/Application Support/HourTracker` on macOS,
    /// `~/.hourtracker` elsewhere.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") || cfg!(target_os = "macos") {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(UNIX_APP_DIR)
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Database path with `~` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Separator character used under table headers.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Create the storage directory and write the configuration file.
    /// A relative `custom_db` is placed inside the storage directory.
    /// In test mode nothing is written outside the database location.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() || is_test { p } else { dir.join(p) }
            }
            None => dir.join(DATABASE_FILE),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::load().unwrap_or_default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
