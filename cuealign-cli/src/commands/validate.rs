//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::load(&self.config) {
            Ok(config) => config,
            Err(e) => {
                if !quiet {
                    println!("✗ Configuration is invalid!");
                    println!("  Error: {e:#}");
                }
                return Err(e.context("Validation failed"));
            }
        };

        if !quiet {
            let alignment = &config.alignment;
            println!("✓ Configuration is valid!");
            println!("  Lookahead window: {}", alignment.lookahead_window);
            println!("  Jump threshold: {}", alignment.jump_threshold);
            println!("  Jump window: {}", alignment.jump_window);
            println!("  Debounce: {}ms", alignment.debounce_ms);
            println!(
                "  Terminators: {}",
                alignment.segmenter.terminators.iter().collect::<String>()
            );
        }
        Ok(())
    }
}
