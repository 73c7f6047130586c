//! Markdown output formatter

use super::{describe_events, OutputFormatter};
use crate::replay::{ReplayStep, ReplaySummary};
use anyhow::Result;
use cuealign_core::Segment;
use std::io::Write;

/// Markdown formatter - segments as lists, replay steps as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_text: bool,
    current_source: Option<String>,
    segment_count: usize,
    table_started: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_text: bool) -> Self {
        Self {
            writer,
            include_text,
            current_source: None,
            segment_count: 0,
            table_started: false,
        }
    }
}

/// Keep cell text from breaking the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, source: &str, segment: &Segment) -> Result<()> {
        if self.current_source.as_deref() != Some(source) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
            self.current_source = Some(source.to_string());
        }

        self.segment_count += 1;
        writeln!(
            self.writer,
            "{}. {} *({} tokens)*",
            segment.index + 1,
            segment.raw_text,
            segment.token_count()
        )?;
        Ok(())
    }

    fn format_step(&mut self, step: &ReplayStep) -> Result<()> {
        if !self.table_started {
            if self.include_text {
                writeln!(self.writer, "| time (ms) | trigger | position | events | active segment |")?;
                writeln!(self.writer, "|---:|---|---|---|---|")?;
            } else {
                writeln!(self.writer, "| time (ms) | trigger | position | events |")?;
                writeln!(self.writer, "|---:|---|---|---|")?;
            }
            self.table_started = true;
        }

        let (index, matched) = step.state.position();
        write!(
            self.writer,
            "| {} | {} | ({index}, {matched}) | {} |",
            step.at_ms,
            step.trigger.label(),
            describe_events(&step.events)
        )?;
        if self.include_text {
            let text = step.active_text.as_deref().unwrap_or("*end*");
            write!(self.writer, " {} |", escape_cell(text))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, summary: Option<&ReplaySummary>) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        match summary {
            Some(summary) => {
                let (index, matched) = summary.final_state.position();
                writeln!(
                    self.writer,
                    "*Final position: ({index}, {matched}) of {} segments, {:.0}% complete*",
                    summary.segments,
                    summary.progress * 100.0
                )?;
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "*Completions: {}, jumps: {}, navigations: {}*",
                    summary.completions, summary.jumps, summary.navigations
                )?;
            }
            None => writeln!(self.writer, "*Total segments: {}*", self.segment_count)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
