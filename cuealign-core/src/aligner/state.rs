//! Alignment position, events and per-call results

use serde::Serialize;
use smallvec::SmallVec;

/// Current position of the speaker in the script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentState {
    /// Segment being spoken; equals the segment count at end of script
    pub active_segment_index: usize,
    /// Tokens of the active segment matched so far
    pub matched_token_count: usize,
    /// Bytes of transcript already processed
    pub consumed_transcript_length: usize,
}

impl AlignmentState {
    /// `(active_segment_index, matched_token_count)` pair
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.active_segment_index, self.matched_token_count)
    }
}

/// Notable transitions reported to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlignmentEvent {
    /// The debounce timer fired and the script moved past `index`
    SegmentCompleted {
        /// Segment that was completed
        index: usize,
    },
    /// The speaker was recognised at the start of the next segment
    Jumped {
        /// Segment left behind
        from: usize,
        /// Segment now active
        to: usize,
        /// Opening token of `to` that triggered the jump
        offset: usize,
    },
    /// A manual navigation call moved the position
    Navigated {
        /// Previous active segment
        from: usize,
        /// New active segment
        to: usize,
    },
}

/// Events raised during a single engine call, in order
pub type Events = SmallVec<[AlignmentEvent; 2]>;

/// Result of feeding the engine one transcript update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Update {
    /// Position after the call
    pub state: AlignmentState,
    /// Events raised by the call
    pub events: Events,
}

impl Update {
    /// Whether this update contains a jump
    pub fn jumped(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, AlignmentEvent::Jumped { .. }))
    }
}
