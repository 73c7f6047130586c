//! JSON output formatter

use super::OutputFormatter;
use crate::replay::{ReplayStep, ReplaySummary};
use anyhow::Result;
use cuealign_core::Segment;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - buffers everything and writes one document on finish
///
/// Segmenting produces an array of [`SegmentData`]; replaying produces an
/// object with `steps` and `summary`.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    segments: Vec<SegmentData>,
    steps: Vec<ReplayStep>,
}

/// Data structure for JSON segment output
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// File the segment came from
    pub source: String,
    /// Position of the segment in its script
    pub index: usize,
    /// The segment text
    pub text: String,
    /// Starting byte offset in the script
    pub start: usize,
    /// Ending byte offset in the script
    pub end: usize,
    /// Token texts in order
    pub tokens: Vec<String>,
}

#[derive(Serialize)]
struct ReplayDocument<'a> {
    steps: &'a [ReplayStep],
    summary: &'a ReplaySummary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            segments: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, source: &str, segment: &Segment) -> Result<()> {
        self.segments.push(SegmentData {
            source: source.to_string(),
            index: segment.index,
            text: segment.raw_text.clone(),
            start: segment.start,
            end: segment.end,
            tokens: segment.tokens.iter().map(|t| t.text.clone()).collect(),
        });
        Ok(())
    }

    fn format_step(&mut self, step: &ReplayStep) -> Result<()> {
        self.steps.push(step.clone());
        Ok(())
    }

    fn finish(&mut self, summary: Option<&ReplaySummary>) -> Result<()> {
        match summary {
            Some(summary) => {
                let steps = std::mem::take(&mut self.steps);
                self.write_value(&ReplayDocument {
                    steps: &steps,
                    summary,
                })?;
            }
            None => {
                let segments = std::mem::take(&mut self.segments);
                self.write_value(&segments)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HostAction;
    use crate::replay::StepTrigger;
    use cuealign_core::{segment, AlignmentEvent, AlignmentState};
    use serde_json::Value;

    fn parse(formatter: JsonFormatter<Vec<u8>>) -> Value {
        serde_json::from_slice(&formatter.writer).unwrap()
    }

    #[test]
    fn test_segments_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        for seg in segment("Hello world. Testing one two.") {
            formatter.format_segment("script.txt", &seg).unwrap();
        }
        formatter.finish(None).unwrap();

        let value = parse(formatter);
        let segments: Vec<SegmentData> = serde_json::from_value(value).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].source, "script.txt");
        assert_eq!(segments[1].text, "Testing one two.");
        assert_eq!(segments[1].start, 13);
        assert_eq!(segments[1].tokens, vec!["Testing", "one", "two"]);
    }

    #[test]
    fn test_replay_document() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter
            .format_step(&ReplayStep {
                at_ms: 50,
                trigger: StepTrigger::Timer,
                state: AlignmentState {
                    active_segment_index: 1,
                    matched_token_count: 0,
                    consumed_transcript_length: 11,
                },
                events: vec![AlignmentEvent::SegmentCompleted { index: 0 }],
                active_text: None,
            })
            .unwrap();
        formatter
            .format_step(&ReplayStep {
                at_ms: 60,
                trigger: StepTrigger::Host(HostAction::Seek(0)),
                state: AlignmentState::default(),
                events: vec![AlignmentEvent::Navigated { from: 1, to: 0 }],
                active_text: Some("Hello world.".into()),
            })
            .unwrap();
        formatter
            .finish(Some(&ReplaySummary {
                segments: 2,
                completions: 1,
                navigations: 1,
                ..ReplaySummary::default()
            }))
            .unwrap();

        let value = parse(formatter);
        let steps = value["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0]["trigger"], "timer");
        assert_eq!(steps[0]["events"][0]["kind"], "segment_completed");
        assert_eq!(steps[0]["state"]["active_segment_index"], 1);
        assert_eq!(steps[1]["trigger"]["host"]["action"], "seek");
        assert_eq!(steps[1]["trigger"]["host"]["value"], 0);
        assert_eq!(value["summary"]["segments"], 2);
        assert_eq!(value["summary"]["navigations"], 1);
    }
}
