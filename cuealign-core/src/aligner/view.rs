//! Read-only views for renderers

use super::Aligner;
use crate::clock::Clock;
use crate::text::{Segment, Token};
use serde::Serialize;

/// Highlight status of a segment relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SegmentStatus {
    /// Already passed
    Done,
    /// Being spoken, with `matched` leading tokens heard
    Active {
        /// Tokens matched so far
        matched: usize,
    },
    /// Not reached yet
    Upcoming,
}

/// A segment paired with its highlight status
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SegmentView<'a> {
    /// The segment
    pub segment: &'a Segment,
    /// How it should be highlighted
    pub status: SegmentStatus,
}

impl<'a> SegmentView<'a> {
    /// Tokens already spoken
    pub fn spoken_tokens(&self) -> &'a [Token] {
        match self.status {
            SegmentStatus::Done => &self.segment.tokens,
            SegmentStatus::Active { matched } => &self.segment.tokens[..matched],
            SegmentStatus::Upcoming => &[],
        }
    }

    /// Tokens not spoken yet
    pub fn pending_tokens(&self) -> &'a [Token] {
        let spoken = self.spoken_tokens().len();
        &self.segment.tokens[spoken..]
    }
}

impl<C: Clock> Aligner<C> {
    /// Status of the segment at `index`
    pub fn status_of(&self, index: usize) -> SegmentStatus {
        let active = self.state.active_segment_index;
        match index.cmp(&active) {
            std::cmp::Ordering::Less => SegmentStatus::Done,
            std::cmp::Ordering::Equal => SegmentStatus::Active {
                matched: self.state.matched_token_count,
            },
            std::cmp::Ordering::Greater => SegmentStatus::Upcoming,
        }
    }

    /// Active segment plus up to `radius` neighbours on each side
    ///
    /// At end of script the last `radius` segments are returned, all done.
    pub fn window(&self, radius: usize) -> Vec<SegmentView<'_>> {
        let active = self.state.active_segment_index;
        let start = active.saturating_sub(radius);
        let end = active
            .saturating_add(radius)
            .saturating_add(1)
            .min(self.segments.len());

        self.segments
            .get(start..end)
            .unwrap_or(&[])
            .iter()
            .map(|segment| SegmentView {
                segment,
                status: self.status_of(segment.index),
            })
            .collect()
    }

    /// Fraction of the script already passed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        let total = self.segments.len();
        if total == 0 {
            return 1.0;
        }

        let active = self.state.active_segment_index.min(total);
        let partial = self
            .active_segment()
            .filter(|s| s.token_count() > 0)
            .map_or(0.0, |s| {
                self.state.matched_token_count as f64 / s.token_count() as f64
            });

        (active as f64 + partial) / total as f64
    }
}

#[cfg(test)]
mod tests {
    use crate::{Aligner, AlignerConfig, ManualClock, SegmentStatus};

    fn aligner(script: &str) -> Aligner<ManualClock> {
        Aligner::with_clock(script, AlignerConfig::default(), ManualClock::new()).unwrap()
    }

    #[test]
    fn test_window_around_active_segment() {
        let mut aligner = aligner("One. Two. Three. Four. Five.");
        aligner.seek(2);
        aligner.consume_transcript("three");

        let window = aligner.window(1);
        let statuses: Vec<_> = window.iter().map(|v| v.status).collect();
        assert_eq!(
            statuses,
            vec![
                SegmentStatus::Done,
                SegmentStatus::Active { matched: 1 },
                SegmentStatus::Upcoming,
            ]
        );
        assert_eq!(window[1].segment.raw_text, "Three.");
        assert_eq!(window[1].spoken_tokens().len(), 1);
        assert!(window[1].pending_tokens().is_empty());
    }

    #[test]
    fn test_window_clamped_at_edges() {
        let aligner = aligner("One. Two. Three.");
        let window = aligner.window(5);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].status, SegmentStatus::Active { matched: 0 });
    }

    #[test]
    fn test_window_empty_script() {
        let aligner = aligner("");
        assert!(aligner.window(2).is_empty());
        assert_eq!(aligner.progress(), 1.0);
    }

    #[test]
    fn test_progress_counts_partial_segment() {
        let mut aligner = aligner("one two three four. five.");
        aligner.consume_transcript("one two");
        assert_eq!(aligner.progress(), 0.25);
    }
}
