//! User configuration, persisted as TOML.
//!
//! Every section is `#[serde(default)]` so a partial file (or none at all)
//! loads with defaults for whatever is missing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::player::clock::{is_usable_fps, DEFAULT_FPS};

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Playback timing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Frame rate assumed when the media reports none
    pub default_fps: f64,
    /// A paused playhead this close to the end makes tap-to-play replay the shot
    pub end_epsilon_secs: f64,
    /// Progress event cadence in milliseconds
    pub progress_interval_ms: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_fps: DEFAULT_FPS,
            end_epsilon_secs: 0.1,
            progress_interval_ms: 16.67,
        }
    }
}

/// On-screen controls settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Delay before controls hide during playback
    pub auto_hide_ms: u64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { auto_hide_ms: 3000 }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub controls: ControlsConfig,
}

impl Config {
    /// Default config file location: `<config_dir>/shotsync/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("shotsync").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the playback core cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let playback = &self.playback;
        if !is_usable_fps(playback.default_fps) {
            return Err(ConfigError::Invalid {
                field: "playback.default_fps",
                message: format!("must be a finite rate above 1, got {}", playback.default_fps),
            });
        }
        if !(playback.end_epsilon_secs.is_finite() && playback.end_epsilon_secs >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "playback.end_epsilon_secs",
                message: format!("must be >= 0, got {}", playback.end_epsilon_secs),
            });
        }
        if !(playback.progress_interval_ms.is_finite() && playback.progress_interval_ms > 0.0) {
            return Err(ConfigError::Invalid {
                field: "playback.progress_interval_ms",
                message: format!("must be > 0, got {}", playback.progress_interval_ms),
            });
        }
        Ok(())
    }
}
