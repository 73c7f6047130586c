//! Tokenizer producing comparable units for the matcher
//!
//! Latin-style scripts are grouped into words (maximal alphanumeric runs)
//! while ideographic and syllabic scripts produce one token per character,
//! since they carry no whitespace between words. Everything else is dropped.

use serde::Serialize;

/// Minimal comparable unit of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Surface text as it appeared in the source
    pub text: String,
    /// Whether this token is a single ideographic/syllabic character
    pub is_ideographic: bool,
    /// Comparison form (lower-cased for non-ideographic tokens)
    #[serde(skip)]
    normalized: String,
}

impl Token {
    /// Create a word token from an alphanumeric run
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        let normalized = text.to_lowercase();
        Self {
            text,
            is_ideographic: false,
            normalized,
        }
    }

    /// Create a token from a single ideographic character
    pub fn ideograph(ch: char) -> Self {
        let text = ch.to_string();
        Self {
            normalized: text.clone(),
            text,
            is_ideographic: true,
        }
    }

    /// Normalized comparison form
    #[inline]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Check whether two tokens refer to the same spoken unit
    ///
    /// Word tokens compare case-insensitively, ideographs exactly.
    #[inline]
    pub fn matches(&self, other: &Token) -> bool {
        if self.is_ideographic || other.is_ideographic {
            self.is_ideographic == other.is_ideographic && self.text == other.text
        } else {
            self.normalized == other.normalized
        }
    }
}

/// Check if a character is tokenized on its own
pub fn is_ideographic(ch: char) -> bool {
    matches!(ch as u32,
        0x3005..=0x3007       // 々 〆 〇
        | 0x3041..=0x309F     // Hiragana
        | 0x30A1..=0x30FA     // Katakana
        | 0x30FC..=0x30FF     // Katakana prolonged sound mark and iteration marks
        | 0x31F0..=0x31FF     // Katakana phonetic extensions
        | 0x3400..=0x4DBF     // CJK Extension A
        | 0x4E00..=0x9FFF     // CJK Unified Ideographs
        | 0xAC00..=0xD7AF     // Hangul syllables
        | 0xF900..=0xFAFF     // CJK Compatibility Ideographs
        | 0xFF66..=0xFF9D     // Halfwidth Katakana
        | 0x20000..=0x2FA1F   // CJK Extensions B-F and compatibility supplement
        | 0x30000..=0x3134F   // CJK Extension G
    )
}

/// Split text into tokens, left to right
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if is_ideographic(ch) {
            if let Some(start) = run_start.take() {
                tokens.push(Token::word(&text[start..idx]));
            }
            tokens.push(Token::ideograph(ch));
        } else if ch.is_alphanumeric() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
        } else if let Some(start) = run_start.take() {
            tokens.push(Token::word(&text[start..idx]));
        }
    }

    if let Some(start) = run_start {
        tokens.push(Token::word(&text[start..]));
    }

    tokens
}
