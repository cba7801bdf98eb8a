//! Configuration file support.
//!
//! Settings are read from an INI file at `~/.greatcircle/config.ini`, or
//! from the path named by `GREATCIRCLE_CONFIG`. A missing file yields the
//! defaults; CLI flags override whatever the file says.
//!
//! ```ini
//! [display]
//! unit = nm
//! precision = 1
//!
//! [logging]
//! level = info
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use crate::commands::common::DistanceUnit;

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "GREATCIRCLE_CONFIG";

/// Default number of decimals in printed numbers.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest accepted precision.
pub const MAX_PRECISION: usize = 12;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The file is not valid INI.
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A key holds a value outside its domain.
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Output settings from the `[display]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Unit for distances.
    pub unit: DistanceUnit,
    /// Decimals in printed numbers.
    pub precision: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::Km,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Settings from the `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingSettings {
    /// Log level; `None` leaves the built-in default in place.
    pub level: Option<String>,
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Loads the configuration from [`config_file_path`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Loads the configuration from `path`, returning defaults if it does
    /// not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        debug!(path = %path.display(), "Loading config file");
        Self::parse(&contents)
    }

    /// Parses configuration from INI text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let mut config = Self::default();

        if let Some(value) = ini.get_from(Some("display"), "unit") {
            config.display.unit = DistanceUnit::from_config_str(value).ok_or_else(|| {
                ConfigError::InvalidValue {
                    key: "display.unit".to_string(),
                    value: value.to_string(),
                }
            })?;
        }

        if let Some(value) = ini.get_from(Some("display"), "precision") {
            config.display.precision = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|p| *p <= MAX_PRECISION)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "display.precision".to_string(),
                    value: value.to_string(),
                })?;
        }

        if let Some(value) = ini.get_from(Some("logging"), "level") {
            let level = value.trim().to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidValue {
                    key: "logging.level".to_string(),
                    value: value.to_string(),
                });
            }
            config.logging.level = Some(level);
        }

        Ok(config)
    }

    /// Effective settings as `(section, key, value)` rows for display.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("display", "unit", self.display.unit.as_str().to_string()),
            ("display", "precision", self.display.precision.to_string()),
            (
                "logging",
                "level",
                self.logging.level.clone().unwrap_or_default(),
            ),
        ]
    }
}

/// Location of the configuration file.
///
/// `GREATCIRCLE_CONFIG` wins when set; otherwise `~/.greatcircle/config.ini`.
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".greatcircle")
        .join("config.ini")
}
