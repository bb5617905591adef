//! Configuration constants and settings
//!
//! Card settings come from three layers, later layers winning:
//! 1. Built-in defaults (the constants below)
//! 2. `config.toml` under the user config directory, or `--config PATH`
//! 3. Command line flags

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::countdown::TimeLeft;

// Clock arithmetic
pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY: u32 = 24;

// Card defaults
pub const DEFAULT_LEFT_CONTENDER: &str = "Naruto";
pub const DEFAULT_RIGHT_CONTENDER: &str = "Sasuke";
pub const DEFAULT_TOTAL_VOTES: u64 = 20_000;
pub const DEFAULT_TIME_LEFT: TimeLeft = TimeLeft {
    days: 3,
    hours: 5,
    minutes: 23,
};

// Timing
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 60; // One countdown minute per real minute
pub const DEFAULT_SUBMIT_LATENCY_MS: u64 = 1000; // Simulated submission round trip
pub const REDRAW_INTERVAL_MS: u64 = 250; // Interactive redraw, drives the spinner

// Vote count display
pub const THOUSANDS_THRESHOLD: u64 = 1000;

// Config file location
pub const APP_DIR_NAME: &str = "battle-vote";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Invalid card settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid time '{0}', expected D:H:M")]
    InvalidTime(String),

    #[error("hours must be below 24, got {0}")]
    HoursOutOfRange(u32),

    #[error("minutes must be below 60, got {0}")]
    MinutesOutOfRange(u32),

    #[error("tick interval must be at least one second")]
    ZeroTickInterval,

    #[error("contender names must not be empty")]
    EmptyContender,

    #[error("unknown reaction '{0}', expected fire, fox or snake")]
    UnknownReaction(String),
}

/// Settings for one mounted card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Contender shown on the left half
    pub left: String,
    /// Contender shown on the right half
    pub right: String,
    /// Headline; `"{left} Vs {right}"` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tally shown before this session votes
    pub total_votes: u64,
    /// Starting countdown
    pub time_left: TimeLeft,
    /// Real seconds per countdown minute
    pub tick_interval_secs: u64,
    /// Latency of the simulated submission
    pub submit_latency_ms: u64,
    /// Closing the success dialog also clears the voted latch
    pub allow_revote_on_dismiss: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_CONTENDER.to_string(),
            right: DEFAULT_RIGHT_CONTENDER.to_string(),
            title: None,
            total_votes: DEFAULT_TOTAL_VOTES,
            time_left: DEFAULT_TIME_LEFT,
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            allow_revote_on_dismiss: false,
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub total_votes: Option<u64>,
    pub time_left: Option<TimeLeft>,
    pub tick_interval_secs: Option<u64>,
    pub submit_latency_ms: Option<u64>,
    pub allow_revote_on_dismiss: bool,
}

impl CardConfig {
    pub fn title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{} Vs {}", self.left, self.right),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    /// Checks values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        TimeLeft::new(
            self.time_left.days,
            self.time_left.hours,
            self.time_left.minutes,
        )?;
        if self.tick_interval_secs == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.left.trim().is_empty() || self.right.trim().is_empty() {
            return Err(ConfigError::EmptyContender);
        }
        Ok(())
    }

    /// Applies command line values on top of file values
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(votes) = overrides.total_votes {
            self.total_votes = votes;
        }
        if let Some(time_left) = overrides.time_left {
            self.time_left = time_left;
        }
        if let Some(secs) = overrides.tick_interval_secs {
            self.tick_interval_secs = secs;
        }
        if let Some(ms) = overrides.submit_latency_ms {
            self.submit_latency_ms = ms;
        }
        if overrides.allow_revote_on_dismiss {
            self.allow_revote_on_dismiss = true;
        }
        self
    }

    /// Parses a config file body
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CardConfig = toml::from_str(content).context("Failed to parse card config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads settings from `path`, or from the default location when `path` is `None`
    ///
    /// An explicit path must exist. A missing default file means built-in defaults.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// `<config dir>/battle-vote/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
