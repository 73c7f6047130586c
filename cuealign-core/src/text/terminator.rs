//! Terminator character detection with O(1) lookup
//!
//! Optimized for the segmenter's per-character scan with an ASCII fast-path.

use std::collections::HashSet;

/// Sentence-ending marks recognised when no custom set is configured
pub const DEFAULT_TERMINATORS: &[char] = &['.', '!', '?', '…', '。', '！', '？', '｡'];

/// Closing marks that stay attached to the unit they close
const CLOSERS: &[char] = &[
    '"', '\'', ')', ']', '}', '”', '’', '）', '」', '』', '】', '〉', '》', '〕',
];

/// Fast terminator lookup table
#[derive(Debug, Clone)]
pub struct TermTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII terminators
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create from list of terminator characters
    pub fn new(terminators: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in terminators {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is a terminator - hot path
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Check if a terminator at this position actually ends a unit
    ///
    /// A `.` between two ASCII digits is a decimal point.
    #[inline]
    pub fn ends_unit(&self, prev: Option<char>, ch: char, next: Option<char>) -> bool {
        if !self.is_terminator(ch) {
            return false;
        }
        if ch == '.' {
            if let (Some(p), Some(n)) = (prev, next) {
                if p.is_ascii_digit() && n.is_ascii_digit() {
                    return false;
                }
            }
        }
        true
    }

    /// Check if character closes a quotation or bracket
    #[inline]
    pub fn is_closer(ch: char) -> bool {
        CLOSERS.contains(&ch)
    }
}

impl Default for TermTable {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS.iter().copied())
    }
}
