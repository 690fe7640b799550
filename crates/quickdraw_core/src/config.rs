//! # Duel Configuration
//!
//! Timing constants for the round protocol. Loaded once at startup from TOML
//! (or taken as defaults) and never mutated afterwards.
//!
//! ## Invariant
//!
//! The fourth countdown stage must *begin* at the press-validity threshold,
//! so `countdown_threshold_ms` is pinned to three stage durations. A config
//! that breaks this would silently shift the fairness boundary, which is why
//! [`DuelConfig::validate`] rejects it instead.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Number of countdown stages (one indicator each).
pub const COUNTDOWN_STAGES: usize = 4;

/// Default elapsed time at which a press becomes valid, in milliseconds.
pub const DEFAULT_COUNTDOWN_THRESHOLD_MS: u32 = 3000;

/// Default duration of each countdown stage, in milliseconds.
pub const DEFAULT_STAGE_DURATION_MS: u32 = 1000;

/// Default pause between rounds, in milliseconds.
pub const DEFAULT_INTER_ROUND_PAUSE_MS: u32 = 3000;

/// Timing configuration for the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DuelConfig {
    /// Elapsed time at which a press stops being "too early" (ms).
    pub countdown_threshold_ms: u32,
    /// Duration of each of the four countdown stages (ms).
    pub stage_duration_ms: u32,
    /// Pause after a round resolves before the next begins (ms).
    pub inter_round_pause_ms: u32,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            countdown_threshold_ms: DEFAULT_COUNTDOWN_THRESHOLD_MS,
            stage_duration_ms: DEFAULT_STAGE_DURATION_MS,
            inter_round_pause_ms: DEFAULT_INTER_ROUND_PAUSE_MS,
        }
    }
}

/// Errors raised while loading or validating a [`DuelConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Stage duration of zero would collapse the countdown.
    #[error("stage duration must be non-zero")]
    ZeroStageDuration,
    /// The threshold must coincide with the start of the final stage.
    #[error("countdown threshold {threshold_ms} ms must equal three stage durations ({stage_duration_ms} ms each)")]
    ThresholdMismatch {
        /// Configured threshold (ms).
        threshold_ms: u32,
        /// Configured stage duration (ms).
        stage_duration_ms: u32,
    },
}

impl DuelConfig {
    /// Checks the timing invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroStageDuration`] or
    /// [`ConfigError::ThresholdMismatch`] when the invariants do not hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stage_duration_ms == 0 {
            return Err(ConfigError::ZeroStageDuration);
        }
        let expected = (COUNTDOWN_STAGES as u32 - 1) * self.stage_duration_ms;
        if self.countdown_threshold_ms != expected {
            return Err(ConfigError::ThresholdMismatch {
                threshold_ms: self.countdown_threshold_ms,
                stage_duration_ms: self.stage_duration_ms,
            });
        }
        Ok(())
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text does not parse or the parsed
    /// values fail [`DuelConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, does not parse,
    /// or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
