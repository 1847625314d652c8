//! Common error type used throughout videoimport.
//!
//! Shared values reject bad input at construction time; this is the error
//! they return.

/// Common error type for videoimport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PublishableRecord, VideoId};

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("empty title");
        assert_eq!(err.to_string(), "Invalid input: empty title");
    }

    #[test]
    fn test_constructors_report_invalid_input() {
        assert!(matches!(VideoId::new(""), Err(Error::InvalidInput(_))));
        assert!(matches!(
            PublishableRecord::new("", "https://www.youtube.com/watch?v=x", "00:01"),
            Err(Error::InvalidInput(_))
        ));
    }
}
