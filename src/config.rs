use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
    #[serde(default = "default_duration_presets")]
    pub duration_presets: Vec<u32>,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_duration_secs() -> u32 {
    60
}
fn default_duration_presets() -> Vec<u32> {
    vec![30, 60]
}
fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("typemaster")
        .to_string_lossy()
        .to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            duration_presets: default_duration_presets(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Load from the user config file. A missing file gives defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Record `secs` as the default duration in the file at `path`. Other
    /// settings are taken from the file, not from command-line overrides. An
    /// unparsable file is left alone.
    pub fn save_duration(path: &Path, secs: u32) -> Result<()> {
        let mut on_disk = Self::load_from(path)?;
        on_disk.duration_secs = secs;
        on_disk.save_to(path)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typemaster")
            .join("config.toml")
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// Repair values a hand-edited file may get wrong.
    pub fn validate(&mut self) {
        if self.duration_secs == 0 {
            self.duration_secs = default_duration_secs();
        }

        let mut presets = Vec::with_capacity(self.duration_presets.len());
        for &secs in &self.duration_presets {
            if secs > 0 && !presets.contains(&secs) {
                presets.push(secs);
            }
        }
        if presets.is_empty() {
            presets = default_duration_presets();
        }
        self.duration_presets = presets;

        self.tick_rate_ms = self.tick_rate_ms.clamp(MIN_TICK_RATE_MS, MAX_TICK_RATE_MS);

        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
    }

    /// The preset after `current`, wrapping around. A duration that isn't a
    /// preset (a custom one) moves to the first preset.
    pub fn next_preset(&self, current: u32) -> u32 {
        let presets = &self.duration_presets;
        match presets.iter().position(|&p| p == current) {
            Some(i) => presets[(i + 1) % presets.len()],
            None => presets.first().copied().unwrap_or_else(default_duration_secs),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duration is empty")]
    Empty,
    #[error("'{0}' is not a whole number of seconds")]
    NotANumber(String),
    #[error("duration must be positive, got {0}")]
    NonPositive(i64),
    #[error("duration of {0} seconds is too long")]
    TooLarge(i64),
}

/// Parse a user-entered test duration in seconds.
pub fn parse_duration(input: &str) -> Result<u32, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty);
    }
    let secs: i64 = trimmed
        .parse()
        .map_err(|_| ConfigError::NotANumber(trimmed.to_string()))?;
    if secs <= 0 {
        return Err(ConfigError::NonPositive(secs));
    }
    u32::try_from(secs).map_err(|_| ConfigError::TooLarge(secs))
}
