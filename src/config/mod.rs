use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_WEEKS: u32 = 4;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Weeks of history created by `generate` when `--weeks` is omitted.
    #[serde(default = "default_weeks")]
    pub default_weeks: u32,
    /// Show the description column in `list`.
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
    /// chrono format used to print check-off timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_weeks() -> u32 {
    DEFAULT_WEEKS
}
fn default_show_descriptions() -> bool {
    true
}
fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_weeks: default_weeks(),
            show_descriptions: default_show_descriptions(),
            date_format: default_date_format(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhabits")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rhabits")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhabits.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rhabits.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: same resolution as the global --db flag of other commands
        let db_path = custom_name
            .map(PathBuf::from)
            .unwrap_or_else(Self::database_file);

        // Write config file
        if !is_test {
            let config = Self::with_database(db_path.clone());
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(config.to_yaml()?.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
