//! Runtime configuration.
//!
//! Resolution order: built-in defaults, then an optional JSON file, then
//! `PITCHFLOW_*` environment overrides. Empty override values are ignored.

use crate::logging::normalize_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_DATA_DIR: &str = "PITCHFLOW_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "PITCHFLOW_LOG_LEVEL";
pub const DEFAULT_DB_FILE_NAME: &str = "pitchflow.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config file `{}`: {source}", path.display())
            }
            Self::Invalid(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Root for the database, session entries and logs. Must be absolute.
    pub data_dir: PathBuf,
    pub log_level: String,
    /// Overrides `data_dir/logs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
    pub db_file_name: String,
    /// Serve bundled fixture data when persisted data is missing.
    pub demo_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: None,
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            demo_mode: true,
        }
    }
}

impl AppConfig {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Loads, overrides from the process environment and validates.
    ///
    /// `default_data_dir` is used when neither the file nor the environment
    /// names a data directory.
    pub fn load(
        config_file: Option<&Path>,
        default_data_dir: &Path,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, default_data_dir, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`] with an explicit environment lookup.
    pub fn load_with_env(
        config_file: Option<&Path>,
        default_data_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if config.data_dir.as_os_str().is_empty() {
            config.data_dir = default_data_dir.to_path_buf();
        }
        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = non_empty(env(ENV_DATA_DIR)) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = non_empty(env(ENV_LOG_LEVEL)) {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data_dir.is_absolute() {
            return Err(ConfigError::Invalid(format!(
                "data_dir must be an absolute path, got `{}`",
                self.data_dir.display()
            )));
        }
        if self.db_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("db_file_name cannot be empty".to_string()));
        }
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        Ok(())
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    /// Directory holding one JSON file per session entry.
    pub fn session_dir(&self) -> PathBuf {
        self.data_dir.join("session")
    }

    pub fn effective_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("logs"))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
