//! Referee configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Tunable referee policy. Game-variant constants (board geometry,
/// hand size, flying threshold) are not configurable.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct RefereeConfig {
    /// Per-move time budget in seconds.
    #[serde(default = "default_move_timeout_secs")]
    move_timeout_secs: u64,

    /// Grace period in milliseconds between asking a player process to
    /// exit and force-killing it.
    #[serde(default = "default_stop_grace_ms")]
    stop_grace_ms: u64,

    /// Repetition cycle length in plies for the oscillation draw. The
    /// last `2 * cycle` moves must repeat with this period.
    #[serde(default = "default_repetition_cycle")]
    repetition_cycle: usize,

    /// Consecutive capture-free moves after which the game is drawn.
    #[serde(default = "default_capture_drought_limit")]
    capture_drought_limit: u32,
}

fn default_move_timeout_secs() -> u64 {
    60
}

fn default_stop_grace_ms() -> u64 {
    500
}

fn default_repetition_cycle() -> usize {
    4
}

fn default_capture_drought_limit() -> u32 {
    20
}

impl RefereeConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "loading referee config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config: {e}")))?;

        info!(?config, "referee config loaded");
        Ok(config)
    }

    /// Per-move time budget.
    pub fn move_timeout(&self) -> Duration {
        Duration::from_secs(self.move_timeout_secs)
    }

    /// Grace period before force-killing a player process.
    pub fn stop_grace(&self) -> Duration {
        Duration::from_millis(self.stop_grace_ms)
    }
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            move_timeout_secs: default_move_timeout_secs(),
            stop_grace_ms: default_stop_grace_ms(),
            repetition_cycle: default_repetition_cycle(),
            capture_drought_limit: default_capture_drought_limit(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
