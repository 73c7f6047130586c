//! Script text processing: terminator lookup, segmentation and tokenization

pub mod segmenter;
pub mod terminator;
pub mod tokenizer;

pub use segmenter::{segment, Segment, Segmenter};
pub use terminator::{TermTable, DEFAULT_TERMINATORS};
pub use tokenizer::{is_ideographic, tokenize, Token};
