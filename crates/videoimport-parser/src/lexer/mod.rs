//! Logos-based lexer for encoded durations.
//!
//! This module tokenizes provider duration strings using the
//! [logos](https://docs.rs/logos) crate, which generates the lexer from regex
//! patterns at compile time.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Tokenize `input` completely.
///
/// Returns the span of the first unrecognized byte run on failure.
pub fn tokenize(input: &str) -> Result<Vec<(Token<'_>, Span)>, Span> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(span),
        }
    }

    Ok(tokens)
}
