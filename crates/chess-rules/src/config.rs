//! Session configuration.
//!
//! Settings are read from TOML. Every field has a default, so an empty file
//! (or no file at all) gives the standard behavior:
//!
//! ```toml
//! [clock]
//! tick_seconds = 1
//!
//! [geometry]
//! square_px = 50
//! top_offset_px = 25
//!
//! [rules]
//! stalemate_is_checkmate = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// The file is not valid TOML or has fields of the wrong type.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but makes no sense.
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Per-side clock settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Seconds added to the thinking side's clock on every tick.
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u32,
}

fn default_tick_seconds() -> u32 {
    1
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            tick_seconds: default_tick_seconds(),
        }
    }
}

/// Where the board sits in the window, for turning clicks into squares.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GeometryConfig {
    /// Side length of one square in pixels.
    #[serde(default = "default_square_px")]
    pub square_px: u32,
    /// Pixels above rank 0 (the window title bar).
    #[serde(default = "default_top_offset_px")]
    pub top_offset_px: u32,
}

fn default_square_px() -> u32 {
    50
}

fn default_top_offset_px() -> u32 {
    25
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            square_px: default_square_px(),
            top_offset_px: default_top_offset_px(),
        }
    }
}

/// Game-ending rules.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    /// When true, a side with no legal move loses even if it is not in
    /// check. When false that position is reported as a stalemate.
    #[serde(default = "default_stalemate_is_checkmate")]
    pub stalemate_is_checkmate: bool,
}

fn default_stalemate_is_checkmate() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            stalemate_is_checkmate: default_stalemate_is_checkmate(),
        }
    }
}

/// Complete session configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] for zero tick or square sizes.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from `path`, falling back to the defaults if
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// otherwise the errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!("no config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.clock.tick_seconds == 0 {
            return Err(ConfigError::InvalidValue("clock.tick_seconds must be positive".into()));
        }
        if self.geometry.square_px == 0 {
            return Err(ConfigError::InvalidValue("geometry.square_px must be positive".into()));
        }
        Ok(())
    }
}
