//! Plain text output formatter

use super::{describe_events, OutputFormatter};
use crate::replay::{ReplayStep, ReplaySummary};
use anyhow::Result;
use cuealign_core::Segment;
use std::io::Write;

/// Plain text formatter - one line per segment or replay step
pub struct TextFormatter<W: Write> {
    writer: W,
    include_text: bool,
    current_source: Option<String>,
    segment_count: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_text: bool) -> Self {
        Self {
            writer,
            include_text,
            current_source: None,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, source: &str, segment: &Segment) -> Result<()> {
        if self.current_source.as_deref() != Some(source) {
            if self.current_source.is_some() {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "== {source} ==")?;
            self.current_source = Some(source.to_string());
        }

        let tokens: Vec<&str> = segment.tokens.iter().map(|t| t.text.as_str()).collect();
        writeln!(
            self.writer,
            "{:>4}  {}  [{}]",
            segment.index,
            segment.raw_text,
            tokens.join(" ")
        )?;
        self.segment_count += 1;
        Ok(())
    }

    fn format_step(&mut self, step: &ReplayStep) -> Result<()> {
        let (index, matched) = step.state.position();
        write!(
            self.writer,
            "{:>8}ms  {:<10} ({index}, {matched})  {}",
            step.at_ms,
            step.trigger.label(),
            describe_events(&step.events)
        )?;
        if self.include_text {
            match &step.active_text {
                Some(text) => write!(self.writer, "  | {text}")?,
                None => write!(self.writer, "  | <end>")?,
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, summary: Option<&ReplaySummary>) -> Result<()> {
        match summary {
            Some(summary) => {
                let (index, matched) = summary.final_state.position();
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "final position: ({index}, {matched}) of {} segments{}",
                    summary.segments,
                    if summary.finished { ", finished" } else { "" }
                )?;
                writeln!(self.writer, "progress: {:.0}%", summary.progress * 100.0)?;
                writeln!(
                    self.writer,
                    "completions: {}, jumps: {}, navigations: {}",
                    summary.completions, summary.jumps, summary.navigations
                )?;
            }
            None if self.segment_count == 0 => writeln!(self.writer, "(no segments)")?,
            None => {}
        }
        self.writer.flush()?;
        Ok(())
    }
}
