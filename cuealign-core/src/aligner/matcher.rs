//! Bounded token matching against segment token tables

use crate::text::Token;

/// Search the window after the cursor for `spoken`
///
/// Returns the new matched count (position + 1) of the first hit within
/// `window` tokens of `matched`. The window is clamped to the table.
#[inline]
pub(crate) fn local_match(
    tokens: &[Token],
    matched: usize,
    spoken: &Token,
    window: usize,
) -> Option<usize> {
    let start = matched.min(tokens.len());
    let end = start.saturating_add(window).min(tokens.len());
    tokens[start..end]
        .iter()
        .position(|t| t.matches(spoken))
        .map(|pos| start + pos + 1)
}

/// Offset of `spoken` among the first `window` tokens of the next segment
#[inline]
pub(crate) fn jump_offset(next: &[Token], spoken: &Token, window: usize) -> Option<usize> {
    next.iter().take(window).position(|t| t.matches(spoken))
}

/// Fraction of a segment already matched; token-less segments count as done
#[inline]
pub(crate) fn completion_ratio(matched: usize, token_count: usize) -> f64 {
    if token_count == 0 {
        1.0
    } else {
        matched as f64 / token_count as f64
    }
}
