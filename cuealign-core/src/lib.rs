//! Live alignment of a speech transcript against a reference script
//!
//! This crate follows a speaker through a pre-written script so that a
//! display can highlight the words already spoken and move on line by line.
//! The script is split once into segments and token tables; the growing
//! transcript from a speech recogniser is then matched incrementally against
//! them.
//!
//! # Architecture
//!
//! - **Text layer** ([`text`]): terminator table, segmenter and tokenizer.
//!   Latin-style words are single tokens, ideographic characters are one
//!   token each.
//! - **Alignment layer** ([`aligner`]): the state machine that consumes
//!   transcript updates with a bounded lookahead, jumps to the next segment
//!   when its opening words are heard, and auto-advances after a debounce.
//! - **Time** ([`clock`]): an injected clock, so the debounce timer can be
//!   driven by virtual time in tests and replays.
//!
//! # Example
//!
//! ```rust
//! use cuealign_core::{AlignmentEvent, Aligner, AlignerConfig, ManualClock};
//!
//! let mut aligner = Aligner::with_clock(
//!     "Hello world. Testing one two.",
//!     AlignerConfig::default(),
//!     ManualClock::new(),
//! )?;
//!
//! aligner.consume_transcript("Hello world");
//! let update = aligner.consume_transcript("Hello world. Testing");
//!
//! assert_eq!(update.state.position(), (1, 1));
//! assert!(matches!(
//!     update.events.as_slice(),
//!     [AlignmentEvent::Jumped { from: 0, to: 1, offset: 0 }]
//! ));
//! # Ok::<(), cuealign_core::Error>(())
//! ```

pub mod aligner;
pub mod clock;
pub mod config;
pub mod error;
pub mod text;

pub use aligner::{
    Aligner, AlignmentEvent, AlignmentState, Events, SegmentStatus, SegmentView, Update,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{AlignerConfig, ConfigBuilder, SegmenterConfig};
pub use error::{Error, Result};
pub use text::{segment, tokenize, Segment, Segmenter, Token};
