//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use cuealign_core::config::defaults;
use cuealign_core::text::DEFAULT_TERMINATORS;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        use std::fs;

        let template = generate_template();
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;
        log::info!("Wrote configuration template to {}", self.output.display());

        if !quiet {
            println!("✓ Configuration template written to {}", self.output.display());
            println!();
            println!("Next steps:");
            println!("1. Edit the values to tune alignment");
            println!("2. Validate your configuration:");
            println!("   cuealign validate -c {}", self.output.display());
            println!("3. Use it for a replay:");
            println!(
                "   cuealign replay -s script.txt -t session.jsonl -c {}",
                self.output.display()
            );
        }

        Ok(())
    }
}

/// Commented TOML holding the default configuration
fn generate_template() -> String {
    let terminators = DEFAULT_TERMINATORS
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# cuealign configuration

[alignment]
# Tokens past the current position searched for the next spoken token
lookahead_window = {lookahead}

# Share of the active segment that must be matched before a jump
# to the next segment is considered (exclusive, 0.0 to 1.0)
jump_threshold = {threshold:?}

# Leading tokens of the next segment that can trigger a jump
jump_window = {jump_window}

# Delay in milliseconds between finishing a segment and moving past it
debounce_ms = {debounce}

[alignment.segmenter]
# Characters that end a segment
terminators = [{terminators}]

[output]
# Pretty print JSON output
pretty_json = true

# Show the active segment's text next to each replay step
include_text = false
"#,
        lookahead = defaults::LOOKAHEAD_WINDOW,
        threshold = defaults::JUMP_THRESHOLD,
        jump_window = defaults::JUMP_WINDOW,
        debounce = defaults::DEBOUNCE_MS,
    )
}
