//! Configuration loading and validation.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/seekramp/config.toml` on Linux). Every field has a default,
//! so a missing or partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::seek::ramp::{
    DEFAULT_ACCELERATING_MS, DEFAULT_DECELERATING_MS, DEFAULT_DECELERATION_THRESHOLD,
    DEFAULT_STEP_FRACTION,
};
use crate::seek::{RampError, RampProfile, RampSchedule, SeekSettings};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SEEKRAMP_CONFIG";

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("skip_length_secs must be a positive number of seconds, got {0}")]
    InvalidSkipLength(f64),

    #[error("Invalid ramp: {0}")]
    Ramp(#[from] RampError),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub seek: SeekConfig,
    pub session: SessionConfig,
    pub input: InputConfig,
    pub controls: ControlsConfig,
}

/// `[seek]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekConfig {
    /// Seconds moved by a single press
    pub skip_length_secs: f64,
    /// Fraction of the duration covered by one repeat tick
    pub step_fraction: f64,
    /// Fraction of the duration after which forward scrubs decelerate
    pub deceleration_threshold: f64,
    /// Tick delays (ms) for the accelerating schedule
    pub accelerating_ms: Vec<u64>,
    /// Tick delays (ms) for the decelerating schedule
    pub decelerating_ms: Vec<u64>,
}

impl Default for SeekConfig {
    fn default() -> Self {
        Self {
            skip_length_secs: SeekSettings::default().skip_length,
            step_fraction: DEFAULT_STEP_FRACTION,
            deceleration_threshold: DEFAULT_DECELERATION_THRESHOLD,
            accelerating_ms: DEFAULT_ACCELERATING_MS.to_vec(),
            decelerating_ms: DEFAULT_DECELERATING_MS.to_vec(),
        }
    }
}

impl SeekConfig {
    /// Validate into controller settings.
    pub fn settings(&self) -> Result<SeekSettings, ConfigError> {
        if !(self.skip_length_secs.is_finite() && self.skip_length_secs > 0.0) {
            return Err(ConfigError::InvalidSkipLength(self.skip_length_secs));
        }
        let profile = RampProfile::new(
            RampSchedule::new(self.accelerating_ms.clone())?,
            RampSchedule::new(self.decelerating_ms.clone())?,
            self.step_fraction,
            self.deceleration_threshold,
        )?;
        Ok(SeekSettings {
            skip_length: self.skip_length_secs,
            profile,
        })
    }
}

/// `[session]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long to wait for the player to initialize
    pub init_timeout_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            init_timeout_ms: 30_000,
        }
    }
}

impl SessionConfig {
    pub fn init_timeout(&self) -> Duration {
        Duration::from_millis(self.init_timeout_ms)
    }
}

/// `[input]` section (terminal hold detection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum hold time before the first repeat tick
    pub repeat_delay_ms: u64,
    /// Silence after a single key-down that counts as release
    pub tap_release_ms: u64,
    /// Silence during auto-repeat that counts as release
    pub hold_release_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_delay_ms: 300,
            tap_release_ms: 600,
            hold_release_ms: 150,
        }
    }
}

/// `[controls]` section (on-screen progress and status overlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// How long the overlay stays up after it was shown
    pub hide_after_ms: u64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_after_ms: 3000,
        }
    }
}

impl ControlsConfig {
    pub fn hide_after(&self) -> Duration {
        Duration::from_millis(self.hide_after_ms)
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Write to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Config file location. `SEEKRAMP_CONFIG` wins over the platform default.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("seekramp").join("config.toml"))
    }
}
