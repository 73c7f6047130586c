//! Script segmentation into display units
//!
//! The script is cut after each terminal punctuation mark. Runs of
//! terminators (`?!`, `...`) and the closing quotes or brackets that follow
//! them stay with the unit they end, so every non-whitespace character of
//! the script lands in exactly one segment.

use super::terminator::TermTable;
use super::tokenizer::{tokenize, Token};
use crate::config::SegmenterConfig;
use serde::Serialize;

/// One display-sized unit of the reference script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// 0-based position in the script
    pub index: usize,
    /// Trimmed source text, punctuation included
    pub raw_text: String,
    /// Byte offset of `raw_text` in the script
    pub start: usize,
    /// Byte offset one past the end of `raw_text` in the script
    pub end: usize,
    /// Token table used by the matcher
    pub tokens: Vec<Token>,
}

impl Segment {
    /// Number of tokens in this segment
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Splits scripts into segments using a terminator table
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    table: TermTable,
}

impl Segmenter {
    /// Create a segmenter from configuration
    pub fn new(config: &SegmenterConfig) -> Self {
        Self {
            table: TermTable::new(config.terminators.iter().copied()),
        }
    }

    /// Split `text` into segments, in script order
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut segments = Vec::new();
        let mut unit_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i].1;
            let prev = i.checked_sub(1).map(|p| chars[p].1);
            let next = chars.get(i + 1).map(|&(_, c)| c);

            if !self.table.ends_unit(prev, ch, next) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len()
                && (self.table.is_terminator(chars[j].1) || TermTable::is_closer(chars[j].1))
            {
                j += 1;
            }

            let unit_end = chars.get(j).map_or(text.len(), |&(idx, _)| idx);
            push_unit(&mut segments, text, unit_start, unit_end);
            unit_start = unit_end;
            i = j;
        }

        push_unit(&mut segments, text, unit_start, text.len());
        segments
    }
}

fn push_unit(segments: &mut Vec<Segment>, text: &str, start: usize, end: usize) {
    let unit = &text[start..end];
    let trimmed = unit.trim();
    if trimmed.is_empty() {
        return;
    }

    let leading = unit.len() - unit.trim_start().len();
    let start = start + leading;

    segments.push(Segment {
        index: segments.len(),
        raw_text: trimmed.to_string(),
        start,
        end: start + trimmed.len(),
        tokens: tokenize(trimmed),
    });
}

/// Split `text` into segments with the default terminator set
pub fn segment(text: &str) -> Vec<Segment> {
    Segmenter::default().segment(text)
}
