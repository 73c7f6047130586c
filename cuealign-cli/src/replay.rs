//! Replays a recorded session against a script on virtual time
//!
//! This is the host event loop the engine expects: every session event is
//! applied at its recorded instant, and the debounce timer is polled at its
//! own deadline whenever that falls between two events.

use crate::input::{HostAction, SessionEvent};
use cuealign_core::{AlignerConfig, AlignmentEvent, AlignmentState, Aligner, Clock, ManualClock};
use serde::Serialize;
use std::time::Duration;

/// What caused a replay step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepTrigger {
    /// A session event
    Host(HostAction),
    /// The debounce timer fired
    Timer,
}

impl StepTrigger {
    /// Short label for text output
    pub fn label(&self) -> &'static str {
        match self {
            StepTrigger::Host(action) => action.label(),
            StepTrigger::Timer => "timer",
        }
    }
}

/// One observed engine transition
#[derive(Debug, Clone, Serialize)]
pub struct ReplayStep {
    /// Virtual time in milliseconds
    pub at_ms: u64,
    /// What happened
    pub trigger: StepTrigger,
    /// Position afterwards
    pub state: AlignmentState,
    /// Events raised
    pub events: Vec<AlignmentEvent>,
    /// Text of the active segment afterwards, if any
    pub active_text: Option<String>,
}

/// Totals over a replay
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaySummary {
    /// Segments in the script
    pub segments: usize,
    /// Final position
    pub final_state: AlignmentState,
    /// Whether the end of the script was reached
    pub finished: bool,
    /// Fraction of the script passed
    pub progress: f64,
    /// Cross-segment jumps
    pub jumps: usize,
    /// Debounced auto-advances
    pub completions: usize,
    /// Manual navigations that moved the position
    pub navigations: usize,
}

/// Drives an [`Aligner`] through a session
pub struct Replayer {
    aligner: Aligner<ManualClock>,
    clock: ManualClock,
    steps: Vec<ReplayStep>,
}

impl Replayer {
    /// Create a replayer for `script`
    pub fn new(script: &str, config: AlignerConfig) -> cuealign_core::Result<Self> {
        let clock = ManualClock::new();
        let aligner = Aligner::with_clock(script, config, clock.clone())?;
        Ok(Self {
            aligner,
            clock,
            steps: Vec::new(),
        })
    }

    /// Apply one session event, firing any timer due before it
    pub fn apply(&mut self, event: &SessionEvent) -> &[ReplayStep] {
        let first_new = self.steps.len();
        self.fire_timers_until(Some(event.at));
        self.clock.advance_to(event.at);

        let mut events = Vec::new();
        match &event.action {
            HostAction::Transcript(text) => {
                events.extend(self.aligner.consume_transcript(text).events);
            }
            HostAction::Advance => events.extend(self.aligner.advance()),
            HostAction::Retreat => events.extend(self.aligner.retreat()),
            HostAction::Seek(index) => events.extend(self.aligner.seek(*index)),
            HostAction::SetActive(active) => self.aligner.set_active(*active),
        }

        self.record(StepTrigger::Host(event.action.clone()), events);
        &self.steps[first_new..]
    }

    /// Let every pending timer fire
    pub fn drain(&mut self) -> &[ReplayStep] {
        let first_new = self.steps.len();
        self.fire_timers_until(None);
        &self.steps[first_new..]
    }

    /// Replay a whole session and return every step
    pub fn run(mut self, session: &[SessionEvent]) -> (Vec<ReplayStep>, ReplaySummary) {
        for event in session {
            self.apply(event);
        }
        self.drain();
        self.finish()
    }

    /// Stop replaying and summarise
    pub fn finish(self) -> (Vec<ReplayStep>, ReplaySummary) {
        let mut summary = ReplaySummary {
            segments: self.aligner.segment_count(),
            final_state: self.aligner.state(),
            finished: self.aligner.is_finished(),
            progress: self.aligner.progress(),
            ..ReplaySummary::default()
        };

        for event in self.steps.iter().flat_map(|s| s.events.iter()) {
            match event {
                AlignmentEvent::Jumped { .. } => summary.jumps += 1,
                AlignmentEvent::SegmentCompleted { .. } => summary.completions += 1,
                AlignmentEvent::Navigated { .. } => summary.navigations += 1,
            }
        }

        (self.steps, summary)
    }

    fn fire_timers_until(&mut self, limit: Option<Duration>) {
        while let Some(deadline) = self.aligner.next_deadline() {
            if limit.is_some_and(|limit| deadline > limit) {
                break;
            }
            self.clock.advance_to(deadline);
            let fired: Vec<_> = self.aligner.poll().into_iter().collect();
            self.record(StepTrigger::Timer, fired);
        }
    }

    fn record(&mut self, trigger: StepTrigger, events: Vec<AlignmentEvent>) {
        let step = ReplayStep {
            at_ms: self.clock_ms(),
            trigger,
            state: self.aligner.state(),
            events,
            active_text: self.aligner.active_segment().map(|s| s.raw_text.clone()),
        };
        log::debug!(
            "{}ms {} -> {:?}",
            step.at_ms,
            step.trigger.label(),
            step.state.position()
        );
        self.steps.push(step);
    }

    fn clock_ms(&self) -> u64 {
        self.clock.now().as_millis() as u64
    }
}
