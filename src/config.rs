//! Configuration management for launchtab.
//!
//! Configuration is a single TOML file in the platform config directory
//! (e.g. `~/.config/launchtab/config.toml` on Linux). Every field has a
//! default, so a missing file just means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::Column;

/// Default launches endpoint (SpaceX API v4).
pub const DEFAULT_ENDPOINT: &str = "https://api.spacexdata.com/v4/launches";

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Could not determine the platform config directory.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// Could not create the config directory.
    #[error("Could not create configuration directory: {0}")]
    CreateDirError(std::io::Error),

    /// Could not read the config file.
    #[error("Could not read configuration file: {0}")]
    ReadError(std::io::Error),

    /// Could not write the config file.
    #[error("Could not write configuration file: {0}")]
    WriteError(std::io::Error),

    /// The config file is not valid TOML.
    #[error("Could not parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Could not serialize the configuration.
    #[error("Could not serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// The configuration violates an invariant.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// URL of the launches endpoint.
    pub endpoint: String,

    /// The enumerated page-size options offered by the footer selector.
    pub page_sizes: Vec<usize>,

    /// Page size selected at startup. Must be one of `page_sizes`.
    pub default_page_size: usize,

    /// Columns to display, in render order.
    pub columns: Vec<Column>,

    /// Number of leading columns pinned while the rest scroll horizontally.
    pub left_fixed_columns: usize,

    /// Number of trailing columns pinned. Only honored when no left columns
    /// are pinned, matching the layout this mirrors.
    pub right_fixed_columns: usize,

    /// Whether vim-style navigation keys (h/j/k/l) are enabled.
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_sizes: crate::model::DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: 20,
            columns: vec![
                Column::new("id", false),
                Column::new("name", true),
                Column::new("flight_number", true),
                Column::new("date_utc", false),
                Column::new("date_unix", true),
            ],
            left_fixed_columns: 0,
            right_fixed_columns: 0,
            vim_mode: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the default configuration; a present but
    /// invalid file is an error, so typos do not silently vanish.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to the default location, creating the directory
    /// if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(ConfigError::CreateDirError)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(ConfigError::WriteError)?;

        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if any
    /// invariant is violated.
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "endpoint '{}' must start with http:// or https://",
                self.endpoint
            )));
        }

        if self.page_sizes.is_empty() {
            return Err(ConfigError::ValidationError(
                "page_sizes cannot be empty".to_string(),
            ));
        }

        if self.page_sizes.iter().any(|&s| s == 0) {
            return Err(ConfigError::ValidationError(
                "page sizes must be positive".to_string(),
            ));
        }

        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(ConfigError::ValidationError(format!(
                "default_page_size {} is not one of the page_sizes options",
                self.default_page_size
            )));
        }

        if self.columns.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one column must be configured".to_string(),
            ));
        }

        if self.left_fixed_columns + self.right_fixed_columns > self.columns.len() {
            return Err(ConfigError::ValidationError(format!(
                "{} pinned columns exceed the {} configured columns",
                self.left_fixed_columns + self.right_fixed_columns,
                self.columns.len()
            )));
        }

        if self.left_fixed_columns > 0 && self.right_fixed_columns > 0 {
            warn!("Both left and right pinned columns set; right is ignored");
        }

        Ok(())
    }

    /// The path of the config file in the platform config directory.
    pub fn config_file_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("launchtab").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.default_page_size = 50;
        config.left_fixed_columns = 1;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_sizes = \"twenty\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "vim_mode = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = Config {
            endpoint: "spacexdata.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_page_sizes() {
        let config = Config {
            page_sizes: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = Config {
            page_sizes: vec![0, 10],
            default_page_size: 10,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unlisted_default_size() {
        let config = Config {
            default_page_size: 37,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excess_pinned_columns() {
        let config = Config {
            left_fixed_columns: 4,
            right_fixed_columns: 4,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
