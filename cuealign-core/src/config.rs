//! Configuration for segmentation and alignment

use crate::error::{Error, Result};
use crate::text::terminator::DEFAULT_TERMINATORS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default configuration constants
pub mod defaults {
    /// Tokens searched ahead of the cursor for a local match
    pub const LOOKAHEAD_WINDOW: usize = 4;

    /// Completion ratio the active segment must exceed before a jump
    pub const JUMP_THRESHOLD: f64 = 0.6;

    /// Opening tokens of the next segment checked for a jump
    pub const JUMP_WINDOW: usize = 3;

    /// Delay between completing a segment and advancing past it
    pub const DEBOUNCE_MS: u64 = 50;
}

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Characters that end a segment
    pub terminators: Vec<char>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }
}

/// Alignment engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Tokens searched ahead of the cursor for a local match
    pub lookahead_window: usize,
    /// Completion ratio that must be exceeded before a jump is considered
    pub jump_threshold: f64,
    /// Opening tokens of the next segment compared for a jump
    pub jump_window: usize,
    /// Auto-advance debounce in milliseconds
    pub debounce_ms: u64,
    /// Script segmentation rules
    pub segmenter: SegmenterConfig,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            lookahead_window: defaults::LOOKAHEAD_WINDOW,
            jump_threshold: defaults::JUMP_THRESHOLD,
            jump_window: defaults::JUMP_WINDOW,
            debounce_ms: defaults::DEBOUNCE_MS,
            segmenter: SegmenterConfig::default(),
        }
    }
}

impl AlignerConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Auto-advance debounce delay
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.lookahead_window == 0 {
            return Err(Error::ZeroLookahead);
        }

        if self.jump_window == 0 {
            return Err(Error::ZeroJumpWindow);
        }

        if !(0.0..1.0).contains(&self.jump_threshold) {
            return Err(Error::InvalidJumpThreshold(self.jump_threshold));
        }

        if self.segmenter.terminators.is_empty() {
            return Err(Error::EmptyTerminators);
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    lookahead_window: Option<usize>,
    jump_threshold: Option<f64>,
    jump_window: Option<usize>,
    debounce: Option<Duration>,
    terminators: Option<Vec<char>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the local lookahead window in tokens
    pub fn lookahead_window(mut self, tokens: usize) -> Self {
        self.lookahead_window = Some(tokens);
        self
    }

    /// Set the completion ratio gate for jumps
    pub fn jump_threshold(mut self, ratio: f64) -> Self {
        self.jump_threshold = Some(ratio);
        self
    }

    /// Set how many opening tokens of the next segment are compared
    pub fn jump_window(mut self, tokens: usize) -> Self {
        self.jump_window = Some(tokens);
        self
    }

    /// Set the auto-advance debounce delay
    ///
    /// The delay is stored in milliseconds; [`build`](Self::build) rejects
    /// one with a sub-millisecond remainder.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }

    /// Replace the segment terminator set
    pub fn terminators(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.terminators = Some(chars.into_iter().collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AlignerConfig> {
        let mut config = AlignerConfig::default();

        if let Some(tokens) = self.lookahead_window {
            config.lookahead_window = tokens;
        }

        if let Some(ratio) = self.jump_threshold {
            config.jump_threshold = ratio;
        }

        if let Some(tokens) = self.jump_window {
            config.jump_window = tokens;
        }

        if let Some(delay) = self.debounce {
            if delay.subsec_nanos() % 1_000_000 != 0 {
                return Err(Error::FractionalDebounce(delay));
            }
            config.debounce_ms = delay.as_millis() as u64;
        }

        if let Some(chars) = self.terminators {
            config.segmenter.terminators = chars;
        }

        config.validate()?;
        Ok(config)
    }
}
