//! cuealign CLI library
//!
//! This library provides the command-line interface for the cuealign
//! script/transcript alignment engine: segmenting scripts and replaying
//! recorded transcript sessions against them.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod replay;

pub use error::{CliError, CliResult};
