//! Replay command implementation

use crate::config::CliConfig;
use crate::input::{parse_session, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use crate::replay::Replayer;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the replay command
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Script file to align against
    #[arg(short, long, value_name = "FILE", required = true)]
    pub script: PathBuf,

    /// Session file (JSON Lines of timed host events)
    #[arg(short = 't', long = "transcript", value_name = "SESSION.jsonl", required = true)]
    pub session: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ReplayArgs {
    /// Execute the replay command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let script = FileReader::read_text(&self.script)?;
        let session = parse_session(&FileReader::read_text(&self.session)?)
            .with_context(|| format!("Invalid session file: {}", self.session.display()))?;

        log::info!(
            "Replaying {} events from {} against {}",
            session.len(),
            self.session.display(),
            self.script.display()
        );

        let mut replayer = Replayer::new(&script, config.alignment)?;
        let mut formatter = create_formatter(self.format, self.output.as_deref(), &config.output)?;

        let mut progress = ProgressReporter::new(quiet);
        progress.start(session.len() as u64, "events");

        for event in &session {
            for step in replayer.apply(event) {
                formatter.format_step(step)?;
            }
            progress.tick(event.action.label());
        }
        for step in replayer.drain() {
            formatter.format_step(step)?;
        }
        progress.finish();

        let (_, summary) = replayer.finish();
        log::info!(
            "Replay ended at {:?} ({} jumps, {} completions)",
            summary.final_state.position(),
            summary.jumps,
            summary.completions
        );
        formatter.finish(Some(&summary))
    }
}
