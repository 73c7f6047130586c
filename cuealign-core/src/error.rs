//! Error types for the alignment engine
//!
//! Alignment itself never fails: malformed or out-of-order input is absorbed
//! as a no-op. The only fallible surface is configuration.

use std::time::Duration;
use thiserror::Error;

/// Error type for engine configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Local lookahead window of zero tokens
    #[error("lookahead_window must be greater than 0")]
    ZeroLookahead,

    /// Jump window of zero tokens
    #[error("jump_window must be greater than 0")]
    ZeroJumpWindow,

    /// Jump threshold outside `[0, 1)`
    #[error("jump_threshold must be in [0, 1), got {0}")]
    InvalidJumpThreshold(f64),

    /// Segmenter configured without any terminator
    #[error("terminator set must not be empty")]
    EmptyTerminators,

    /// Debounce delay that is not a whole number of milliseconds
    #[error("debounce must be a whole number of milliseconds, got {0:?}")]
    FractionalDebounce(Duration),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;
