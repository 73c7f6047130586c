//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod generate_config;
pub mod replay;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split script files into segments and show their tokens
    Segment(segment::SegmentArgs),

    /// Replay a recorded transcript session against a script
    Replay(replay::ReplayArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> CliResult<()> {
        match self {
            Commands::Segment(args) => args.execute(quiet),
            Commands::Replay(args) => args.execute(quiet),
            Commands::GenerateConfig(args) => args.execute(quiet),
            Commands::Validate(args) => args.execute(quiet),
        }
    }
}
