//! Configuration loading

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use fleetflow_types::ConfigError;

/// User configuration, read from `fleetflow/config.toml` under the platform
/// config directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the default snapshot directory
    pub store_dir: Option<PathBuf>,
}

impl Config {
    /// Path of the configuration file, if the platform has a config dir
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fleetflow").join("config.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw =
            fs::read_to_string(&path).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Directory holding the snapshot document
    pub fn store_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.store_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("fleetflow"))
            .ok_or(ConfigError::NoDataDir)
    }
}
