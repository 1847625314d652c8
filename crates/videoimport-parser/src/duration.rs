//! Provider duration normalization.
//!
//! The metadata provider reports durations as `PT[nH][nM][nS]` and counts one
//! second too many, because both clip boundaries are rounded inclusively.
//! [`normalize`] parses the encoding, removes that second, and renders the
//! result in the `MM:SS` / `HH:MM:SS` form shown to editors.

use std::fmt;

use crate::error::NormalizationError;
use crate::lexer::{self, Token};

/// A parsed `PT[nH][nM][nS]` duration.
///
/// Components are kept as given; `PT90M` stays 90 minutes rather than being
/// carried into hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    /// Parse an encoded duration.
    ///
    /// Every component is optional but at least one must be present, and they
    /// must appear in `H`, `M`, `S` order without repeats. Absent components
    /// are zero.
    pub fn parse(encoded: &str) -> Result<Self, NormalizationError> {
        let input = encoded.trim();
        if input.is_empty() {
            return Err(NormalizationError::Empty);
        }

        let malformed = |offset: usize| NormalizationError::Malformed {
            input: input.to_string(),
            offset,
        };
        let tokens = lexer::tokenize(input).map_err(|span| malformed(span.start))?;

        let mut tokens = tokens.into_iter();
        match tokens.next() {
            Some((Token::Designator, _)) => {}
            Some((_, span)) => return Err(malformed(span.start)),
            None => return Err(malformed(0)),
        }

        let mut duration = Duration::default();
        let mut last_rank: Option<u8> = None;

        for (token, span) in tokens {
            let rank = token.rank().ok_or_else(|| malformed(span.start))?;
            if last_rank.is_some_and(|last| rank <= last) {
                return Err(malformed(span.start));
            }
            last_rank = Some(rank);

            let digits = token.digits().ok_or_else(|| malformed(span.start))?;
            let value = digits
                .parse::<u64>()
                .map_err(|_| NormalizationError::Overflow(input.to_string()))?;

            match token {
                Token::Hours(_) => duration.hours = value,
                Token::Minutes(_) => duration.minutes = value,
                Token::Seconds(_) => duration.seconds = value,
                Token::Designator => return Err(malformed(span.start)),
            }
        }

        if last_rank.is_none() {
            return Err(malformed(input.len()));
        }

        Ok(duration)
    }

    /// Remove the provider's extra second.
    ///
    /// Borrows from minutes, then hours, when seconds are already zero.
    /// Returns `None` for a zero duration.
    pub fn corrected(self) -> Option<Self> {
        let Duration {
            mut hours,
            mut minutes,
            seconds,
        } = self;

        let seconds = match seconds.checked_sub(1) {
            Some(s) => s,
            None if minutes > 0 => {
                minutes -= 1;
                59
            }
            None if hours > 0 => {
                hours -= 1;
                minutes = 59;
                59
            }
            None => return None,
        };

        Some(Duration {
            hours,
            minutes,
            seconds,
        })
    }
}

impl fmt::Display for Duration {
    /// Renders `MM:SS`, or `HH:MM:SS` when hours are non-zero. Segments are
    /// padded to two digits but never truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{:02}:", self.hours)?;
        }
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Normalize a provider duration into its display form.
///
/// # Examples
///
/// ```
/// use videoimport_parser::normalize;
///
/// assert_eq!(normalize("PT1H2M10S").unwrap(), "01:02:09");
/// assert_eq!(normalize("PT9S").unwrap(), "00:08");
/// assert!(normalize("PT0S").is_err());
/// ```
pub fn normalize(encoded: &str) -> Result<String, NormalizationError> {
    let duration = Duration::parse(encoded)?;
    duration
        .corrected()
        .map(|d| d.to_string())
        .ok_or_else(|| NormalizationError::ZeroLength(encoded.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_documented_cases() {
        assert_eq!(normalize("PT1H2M10S").unwrap(), "01:02:09");
        assert_eq!(normalize("PT5M").unwrap(), "04:59");
        assert_eq!(normalize("PT9S").unwrap(), "00:08");
        assert_eq!(normalize("PT3M1S").unwrap(), "03:00");
    }

    #[test]
    fn test_normalize_common_shapes() {
        assert_eq!(normalize("PT7M3S").unwrap(), "07:02");
        assert_eq!(normalize("PT24S").unwrap(), "00:23");
        assert_eq!(normalize("PT1S").unwrap(), "00:00");
        assert_eq!(normalize("PT59M59S").unwrap(), "59:58");
    }

    #[test]
    fn test_normalize_hours_without_minutes() {
        assert_eq!(normalize("PT1H33S").unwrap(), "01:00:32");
    }

    #[test]
    fn test_normalize_zero_hours_omitted() {
        assert_eq!(normalize("PT0H5M3S").unwrap(), "05:02");
    }

    #[test]
    fn test_normalize_borrows_from_minutes() {
        assert_eq!(normalize("PT2M0S").unwrap(), "01:59");
        assert_eq!(normalize("PT1H10M").unwrap(), "01:09:59");
    }

    #[test]
    fn test_normalize_borrows_from_hours() {
        assert_eq!(normalize("PT2H").unwrap(), "01:59:59");
        // The hour segment disappears once it reaches zero.
        assert_eq!(normalize("PT1H").unwrap(), "59:59");
    }

    #[test]
    fn test_normalize_does_not_truncate() {
        assert_eq!(normalize("PT100H0M5S").unwrap(), "100:00:04");
        assert_eq!(normalize("PT90M1S").unwrap(), "90:00");
    }

    #[test]
    fn test_normalize_zero_length() {
        assert_eq!(
            normalize("PT0S"),
            Err(NormalizationError::ZeroLength("PT0S".to_string()))
        );
        assert!(matches!(
            normalize("PT0H0M0S"),
            Err(NormalizationError::ZeroLength(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        for input in [
            "PT", "P", "T5S", "5S", "PT5", "PT5s", "P1DT2H", "P0D", "PT1S2M", "PT1M1M", "PT1M PT1S",
            "01:02:03", "PT1.5S",
        ] {
            assert!(
                matches!(normalize(input), Err(NormalizationError::Malformed { .. })),
                "{input} should be malformed"
            );
        }
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), Err(NormalizationError::Empty));
        assert_eq!(normalize("   "), Err(NormalizationError::Empty));
    }

    #[test]
    fn test_normalize_overflow() {
        assert!(matches!(
            normalize("PT99999999999999999999999S"),
            Err(NormalizationError::Overflow(_))
        ));
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  PT9S\n").unwrap(), "00:08");
    }

    #[test]
    fn test_normalize_is_pure() {
        let first = normalize("PT4M13S");
        for _ in 0..5 {
            assert_eq!(normalize("PT4M13S"), first);
        }
    }

    #[test]
    fn test_parse_components() {
        let d = Duration::parse("PT1H2M10S").unwrap();
        assert_eq!(
            d,
            Duration {
                hours: 1,
                minutes: 2,
                seconds: 10
            }
        );
        assert_eq!(Duration::parse("PT0S").unwrap(), Duration::default());
    }

    #[test]
    fn test_malformed_reports_offset() {
        let offset = |input: &str| match normalize(input) {
            Err(NormalizationError::Malformed { offset, .. }) => offset,
            other => panic!("{input}: unexpected {other:?}"),
        };

        assert_eq!(offset("PT1.5S"), 2);
        assert_eq!(offset("PT1S2M"), 4);
        assert_eq!(offset("PT"), 2);
        assert_eq!(offset("5S"), 0);
        assert_eq!(offset("  PT1M1M "), 4);
    }

    #[test]
    fn test_corrected_zero_is_none() {
        assert_eq!(Duration::default().corrected(), None);
    }
}
