//! Error types for URL extraction and duration normalization.

/// A string could not be recognized as a video URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// The input was empty or only whitespace.
    #[error("empty video URL")]
    Empty,

    /// No recognized host/path shape matched.
    #[error("not a recognized video URL: {0:?}")]
    Unrecognized(String),
}

/// An encoded duration could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    /// The input was empty or only whitespace.
    #[error("empty duration")]
    Empty,

    /// The input does not follow `PT[nH][nM][nS]`; `offset` is the byte
    /// where it stops doing so.
    #[error("malformed duration {input:?} at byte {offset}")]
    Malformed { input: String, offset: usize },

    /// A component count does not fit in 64 bits.
    #[error("duration component out of range: {0:?}")]
    Overflow(String),

    /// The duration is zero, so the one-second correction has nothing to
    /// subtract from.
    #[error("duration {0:?} is too short to correct")]
    ZeroLength(String),
}
