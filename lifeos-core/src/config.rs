use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default note date format (US short date, e.g. 8/18/2025)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Default tracing filter when neither RUST_LOG nor config set one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// YAML config file structure (~/.lifeos/config.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigYaml {
    /// Book file to show instead of the built-in sample (JSON or YAML)
    pub books_path: Option<PathBuf>,
    /// strftime pattern for note dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub books_path: Option<PathBuf>,
    pub date_format: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_path: None,
            date_format: default_date_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load from `.env` in dev mode, otherwise from `~/.lifeos/config.yaml`.
    ///
    /// Runs before logging is configured, so nothing is logged here. A broken
    /// config file yields the defaults together with the error, for the
    /// caller to report once a subscriber is installed.
    pub fn load() -> (Self, Option<ConfigError>) {
        Self::or_defaults(Self::try_load())
    }

    pub fn try_load() -> Result<Self, ConfigError> {
        let dev_mode = std::env::var("LIFEOS_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            return Ok(Self::from_env());
        }

        match Self::lifeos_dir() {
            Some(lifeos_dir) => Self::load_from_dir(&lifeos_dir),
            None => Ok(Self::default()),
        }
    }

    /// Keep a loaded config, or fall back to the defaults and hand back the error.
    pub fn or_defaults(result: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match result {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|s| !s.is_empty());
        Self {
            books_path: var("LIFEOS_BOOKS_PATH").map(PathBuf::from),
            date_format: var("LIFEOS_DATE_FORMAT").unwrap_or_else(default_date_format),
            log_filter: var("LIFEOS_LOG").unwrap_or_else(default_log_filter),
        }
    }

    /// `~/.lifeos`
    pub fn lifeos_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".lifeos"))
    }

    /// Read `config.yaml` from `dir`. A missing file yields the defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join("config.yaml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let yaml: ConfigYaml = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::Serialization(format!("{}: {e}", config_path.display())))?;

        // Relative book paths are resolved against the config directory
        let books_path = yaml.books_path.map(|p| {
            if p.is_relative() {
                dir.join(p)
            } else {
                p
            }
        });

        Ok(Self {
            books_path,
            date_format: yaml.date_format,
            log_filter: yaml.log_filter,
        })
    }

    pub fn save_to_dir(&self, dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(dir)?;
        let yaml = ConfigYaml {
            books_path: self.books_path.clone(),
            date_format: self.date_format.clone(),
            log_filter: self.log_filter.clone(),
        };
        let contents =
            serde_yaml::to_string(&yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        std::fs::write(dir.join("config.yaml"), contents)?;
        Ok(())
    }
}
