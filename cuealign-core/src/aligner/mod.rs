//! Incremental alignment state machine
//!
//! The [`Aligner`] owns the only mutable state of the engine: the active
//! segment, how many of its tokens have been heard, and how much of the
//! transcript has already been read. It is driven by three host calls:
//!
//! - [`Aligner::consume_transcript`] with the full transcript so far
//! - [`Aligner::advance`] / [`Aligner::retreat`] / [`Aligner::seek`] for
//!   manual navigation
//! - [`Aligner::poll`] to fire the debounce timer once its deadline passes
//!
//! # Example
//!
//! ```rust
//! use cuealign_core::{AlignerConfig, Aligner, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut aligner = Aligner::with_clock(
//!     "Hello world. Testing one two.",
//!     AlignerConfig::default(),
//!     clock.clone(),
//! )?;
//!
//! aligner.consume_transcript("Hello world");
//! assert_eq!(aligner.state().position(), (0, 2));
//!
//! clock.advance(Duration::from_millis(50));
//! aligner.poll();
//! assert_eq!(aligner.state().position(), (1, 0));
//! # Ok::<(), cuealign_core::Error>(())
//! ```

mod matcher;
pub mod state;
pub mod view;

use crate::clock::{Clock, SystemClock};
use crate::config::AlignerConfig;
use crate::error::Result;
use crate::text::{tokenize, Segment, Segmenter, Token};
use log::{debug, trace};
use matcher::{completion_ratio, jump_offset, local_match};
use std::time::Duration;

pub use state::{AlignmentEvent, AlignmentState, Events, Update};
pub use view::{SegmentStatus, SegmentView};

/// Aligns a growing transcript against a segmented script
#[derive(Debug)]
pub struct Aligner<C: Clock = SystemClock> {
    config: AlignerConfig,
    segmenter: Segmenter,
    segments: Vec<Segment>,
    state: AlignmentState,
    /// Deadline of the pending auto-advance, on `clock`
    pending_advance: Option<Duration>,
    /// Spoken tokens left unprocessed by a jump
    carry: Vec<Token>,
    active: bool,
    clock: C,
}

impl Aligner<SystemClock> {
    /// Create an aligner with default configuration and wall-clock time
    pub fn new(script: &str) -> Self {
        Self::build(script, AlignerConfig::default(), SystemClock::new())
    }
}

impl<C: Clock> Aligner<C> {
    /// Create an aligner with explicit configuration and clock
    ///
    /// Fails with the first [`validate`](AlignerConfig::validate) error of
    /// `config`.
    pub fn with_clock(script: &str, config: AlignerConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(script, config, clock))
    }

    fn build(script: &str, config: AlignerConfig, clock: C) -> Self {
        let segmenter = Segmenter::new(&config.segmenter);
        let segments = segmenter.segment(script);
        debug!("built {} segments from script", segments.len());

        Self {
            config,
            segmenter,
            segments,
            state: AlignmentState::default(),
            pending_advance: None,
            carry: Vec::new(),
            active: true,
            clock,
        }
    }

    /// Replace the script, rebuilding token tables and resetting position
    pub fn set_script(&mut self, script: &str) {
        self.segments = self.segmenter.segment(script);
        debug!("script replaced, {} segments", self.segments.len());
        self.reset();
    }

    /// Turn alignment on or off; both directions reset the position
    ///
    /// Transcripts fed while inactive are ignored.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.reset();
    }

    /// Whether transcripts are currently aligned
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Return to the start of the script and discard any pending timer
    pub fn reset(&mut self) {
        self.state = AlignmentState::default();
        self.pending_advance = None;
        self.carry.clear();
    }

    /// Feed the full transcript recognised so far
    ///
    /// Only the part beyond the previously consumed length is matched. A
    /// transcript that is not longer than that length is ignored, including
    /// revisions of earlier text.
    pub fn consume_transcript(&mut self, transcript: &str) -> Update {
        let mut events = Events::new();
        if let Some(event) = self.poll() {
            events.push(event);
        }

        if !self.active {
            return self.update(events);
        }

        let consumed = self.state.consumed_transcript_length;
        if transcript.len() <= consumed {
            if transcript.len() < consumed {
                debug!(
                    "transcript shrank from {} to {} bytes, ignoring",
                    consumed,
                    transcript.len()
                );
            }
            return self.update(events);
        }

        let start = (consumed..=transcript.len())
            .find(|&i| transcript.is_char_boundary(i))
            .unwrap_or(transcript.len());
        self.state.consumed_transcript_length = transcript.len();

        let mut spoken = std::mem::take(&mut self.carry);
        spoken.extend(tokenize(&transcript[start..]));

        if let Some(event) = self.match_tokens(spoken) {
            events.push(event);
        }

        self.update(events)
    }

    /// Fire the auto-advance timer if its deadline has passed
    pub fn poll(&mut self) -> Option<AlignmentEvent> {
        let deadline = self.pending_advance?;
        if self.clock.now() < deadline {
            return None;
        }
        self.pending_advance = None;

        let index = self.state.active_segment_index;
        if index >= self.segments.len() {
            return None;
        }

        self.state.active_segment_index = index + 1;
        self.state.matched_token_count = 0;
        debug!("segment {index} completed, advancing");

        Some(AlignmentEvent::SegmentCompleted { index })
    }

    /// Instant at which [`poll`](Self::poll) will next have work to do
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending_advance
    }

    /// Move to the next segment
    pub fn advance(&mut self) -> Option<AlignmentEvent> {
        let next = self.state.active_segment_index + 1;
        if next >= self.segments.len() {
            return None;
        }
        self.move_to(next)
    }

    /// Move to the previous segment
    pub fn retreat(&mut self) -> Option<AlignmentEvent> {
        let previous = self.state.active_segment_index.checked_sub(1)?;
        self.move_to(previous)
    }

    /// Move to an arbitrary segment, clamped to the last one
    pub fn seek(&mut self, index: usize) -> Option<AlignmentEvent> {
        self.move_to(index)
    }

    fn move_to(&mut self, target: usize) -> Option<AlignmentEvent> {
        let last = self.segments.len().checked_sub(1)?;
        let target = target.min(last);
        let from = self.state.active_segment_index;
        if target == from {
            return None;
        }

        self.pending_advance = None;
        self.state.active_segment_index = target;
        self.state.matched_token_count = 0;
        debug!("navigated from segment {from} to {target}");

        Some(AlignmentEvent::Navigated { from, to: target })
    }

    fn match_tokens(&mut self, spoken: Vec<Token>) -> Option<AlignmentEvent> {
        let mut spoken = spoken.into_iter();

        while let Some(token) = spoken.next() {
            let index = self.state.active_segment_index;
            let Some(segment) = self.segments.get(index) else {
                break;
            };
            let matched = self.state.matched_token_count;

            if let Some(count) =
                local_match(&segment.tokens, matched, &token, self.config.lookahead_window)
            {
                trace!("'{}' matched segment {index} up to {count}", token.text);
                self.state.matched_token_count = count;
                continue;
            }

            let ratio = completion_ratio(matched, segment.token_count());
            if ratio > self.config.jump_threshold {
                let hit = self.segments.get(index + 1).and_then(|next| {
                    jump_offset(&next.tokens, &token, self.config.jump_window)
                });

                if let Some(offset) = hit {
                    self.state.active_segment_index = index + 1;
                    self.state.matched_token_count = offset + 1;
                    self.pending_advance = None;
                    self.carry = spoken.collect();
                    debug!(
                        "jumped from segment {index} to {} on '{}' (offset {offset})",
                        index + 1,
                        token.text
                    );
                    return Some(AlignmentEvent::Jumped {
                        from: index,
                        to: index + 1,
                        offset,
                    });
                }
            }

            trace!("'{}' discarded at segment {index}", token.text);
        }

        self.arm_if_complete();
        None
    }

    fn arm_if_complete(&mut self) {
        let Some(segment) = self.segments.get(self.state.active_segment_index) else {
            return;
        };
        if self.state.matched_token_count >= segment.token_count()
            && self.pending_advance.is_none()
        {
            let deadline = self.clock.now() + self.config.debounce();
            trace!("auto-advance armed for {deadline:?}");
            self.pending_advance = Some(deadline);
        }
    }

    fn update(&self, events: Events) -> Update {
        Update {
            state: self.state,
            events,
        }
    }

    /// Current position
    pub fn state(&self) -> AlignmentState {
        self.state
    }

    /// All segments of the current script
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments in the current script
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Segment currently being spoken, `None` at end of script
    pub fn active_segment(&self) -> Option<&Segment> {
        self.segments.get(self.state.active_segment_index)
    }

    /// Whether the end of the script has been reached
    pub fn is_finished(&self) -> bool {
        self.state.active_segment_index >= self.segments.len()
    }

    /// Whether an auto-advance is waiting to fire
    pub fn pending_advance(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Active configuration
    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }
}
