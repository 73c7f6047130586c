//! Output formatting module

use crate::config::OutputConfig;
use crate::replay::{ReplayStep, ReplaySummary};
use anyhow::{Context, Result};
use cuealign_core::{AlignmentEvent, Segment};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output one segment of the script read from `source`
    fn format_segment(&mut self, source: &str, segment: &Segment) -> Result<()>;

    /// Output one replay step
    fn format_step(&mut self, step: &ReplayStep) -> Result<()>;

    /// Finalize output, with the replay totals when replaying
    fn finish(&mut self, summary: Option<&ReplaySummary>) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one line per segment or step
    Text,
    /// A single JSON document
    Json,
    /// Markdown lists and tables
    Markdown,
}

/// Build a formatter writing to `output`, or stdout when `None`
pub fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
    config: &OutputConfig,
) -> Result<Box<dyn OutputFormatter>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(with_writer(format, BufWriter::new(file), config))
        }
        None => Ok(with_writer(format, io::stdout(), config)),
    }
}

fn with_writer<W>(format: OutputFormat, writer: W, config: &OutputConfig) -> Box<dyn OutputFormatter>
where
    W: io::Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, config.include_text)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, config.include_text)),
    }
}

/// Human-readable form of an event
pub fn describe_event(event: &AlignmentEvent) -> String {
    match event {
        AlignmentEvent::SegmentCompleted { index } => format!("completed {index}"),
        AlignmentEvent::Jumped { from, to, offset } => format!("jumped {from}->{to} (+{offset})"),
        AlignmentEvent::Navigated { from, to } => format!("navigated {from}->{to}"),
    }
}

/// Events of a step joined for a single line, `-` when there are none
pub(crate) fn describe_events(events: &[AlignmentEvent]) -> String {
    if events.is_empty() {
        return "-".to_string();
    }
    events
        .iter()
        .map(describe_event)
        .collect::<Vec<_>>()
        .join(", ")
}
