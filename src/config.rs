//! User configuration.
//!
//! Read from `<config dir>/chapnav/config.toml` (or the file named by
//! `CHAPNAV_CONFIG`). Every section and field is optional; missing values
//! take their defaults, so a file containing only
//!
//! ```toml
//! [keys]
//! next = "."
//! prev = ","
//! ```
//!
//! is a complete configuration.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chapters::{CollectorConfig, NavigationConfig, PositionConfig};
use crate::hotkeys::{Keymap, KeymapError};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "CHAPNAV_CONFIG";

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid key bindings: {0}")]
    Keys(#[from] KeymapError),

    #[error("Invalid seek_offset {0}: must be a finite, non-negative number of seconds")]
    SeekOffset(f64),
}

/// How page snapshots are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Selector for link-like elements
    pub link_selector: String,
    /// Absolute URL that relative link addresses are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            link_selector: "a".to_string(),
            base_url: Some("https://www.youtube.com".to_string()),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub collector: CollectorConfig,
    pub position: PositionConfig,
    pub navigation: NavigationConfig,
    pub keys: Keymap,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("chapnav").join("config.toml"))
    }

    /// Load the config file, or the defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.keys.validate()?;
        let offset = self.navigation.seek_offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::SeekOffset(offset));
        }
        Ok(())
    }
}
