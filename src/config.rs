use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{get_xdg, logging::LogLevel, point::Format};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Couldn't read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Couldn't parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: Format,
    pub log: Log,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) => {
                warn!("Couldn't read config file: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Same as [`Config::load`] but falls back to the default config if
    /// the file is missing or broken.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Using the default config: {}", e);
            Self::default()
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
}

/// Returns the path of the config file inside the XDG config directory.
pub fn default_config_path() -> Result<PathBuf, crate::Error> {
    get_xdg()?
        .place_config_file(CONFIG_FILE)
        .map_err(crate::Error::from)
}
