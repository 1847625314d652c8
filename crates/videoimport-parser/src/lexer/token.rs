//! Token types for the Logos-based duration lexer.

use logos::Logos;

/// Tokens of an ISO-8601-style time duration.
///
/// Each component token keeps its unit letter; the parser strips it.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// Period-and-time designator that must open the string.
    #[token("PT")]
    Designator,

    /// Hour component (e.g., 1H, 12H)
    #[regex(r"[0-9]+H")]
    Hours(&'src str),

    /// Minute component (e.g., 5M, 59M)
    #[regex(r"[0-9]+M")]
    Minutes(&'src str),

    /// Second component (e.g., 9S, 10S)
    #[regex(r"[0-9]+S")]
    Seconds(&'src str),
}

impl Token<'_> {
    /// Position of the component in `H`, `M`, `S` order; `None` for the designator.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Token::Designator => None,
            Token::Hours(_) => Some(0),
            Token::Minutes(_) => Some(1),
            Token::Seconds(_) => Some(2),
        }
    }

    /// Digits of a component token without the unit letter.
    pub fn digits(&self) -> Option<&str> {
        match self {
            Token::Designator => None,
            Token::Hours(s) | Token::Minutes(s) | Token::Seconds(s) => {
                Some(&s[..s.len() - 1])
            }
        }
    }
}
