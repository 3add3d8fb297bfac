use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Event preselected when roster/summary get no explicit id.
    #[serde(default)]
    pub default_event: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Rendered in place of a missing check-in/check-out instant.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

fn default_placeholder() -> String {
    "--".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_event: String::new(),
            separator_char: default_separator_char(),
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcheckin.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("Failed to read configuration file");
            serde_yaml::from_str(&content).expect("Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Write the configuration file (YAML).
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the config directory and file on first run.
    /// In test mode nothing is written to the user's home.
    pub fn init_all(custom_db: Option<String>, test_mode: bool) -> AppResult<()> {
        if test_mode {
            return Ok(());
        }

        let path = Self::config_file();
        if !path.exists() {
            let mut cfg = Config::default();
            if let Some(db) = custom_db {
                cfg.database = db;
            }
            cfg.save()?;
        }
        Ok(())
    }
}
