//! User configuration and data-directory resolution.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::DateBucket;
use crate::errors::PersistenceError;
use crate::storage::json_backend::{ensure_dir, tmp_path, write_atomic};

pub const HOME_ENV: &str = "BILL_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".bill_core";
const CONFIG_FILE: &str = "config.json";
const STORE_DIR: &str = "store";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error(transparent)]
    Storage(#[from] PersistenceError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub default_period: DateBucket,
    pub decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".into(),
            default_period: DateBucket::All,
            decimals: 2,
        }
    }
}

/// Resolves the data directory: explicit override, then `BILL_CORE_HOME`, then `~/.bill_core`.
pub fn app_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the key-value files (`bills`, `theme`).
pub fn store_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR)
}

/// Loads and saves [`Config`] as `config.json` under the data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn with_base_dir(base: &Path) -> Result<Self, ConfigError> {
        ensure_dir(base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
