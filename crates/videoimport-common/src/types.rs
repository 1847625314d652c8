//! Core types shared between the parser and the import pipeline.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::ids::VideoId;

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// Raw URL cell as read from the file.
    pub source_url: String,
    /// 1-based line number in the source file, used in error reports.
    pub line: u64,
}

impl InputRow {
    pub fn new<S: Into<String>>(source_url: S, line: u64) -> Self {
        Self {
            source_url: source_url.into(),
            line,
        }
    }
}

/// Metadata for one video as returned by a metadata provider.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMetadata {
    /// Identifier echoed back by the provider.
    pub id: VideoId,
    /// Display title.
    pub title: String,
    /// Provider-encoded duration (e.g. `PT4M13S`).
    pub duration: String,
    /// Whether the provider allows playback outside its own site.
    pub embeddable: bool,
}

/// Canonical record handed to the publisher.
///
/// Fields are private so the record cannot be altered after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct PublishableRecord {
    title: String,
    url: String,
    length: String,
}

impl PublishableRecord {
    /// Build a record, checking that every field is non-empty and that
    /// `length` has the `MM:SS` / `HH:MM:SS` shape.
    pub fn new<T, U, L>(title: T, url: U, length: L) -> Result<Self>
    where
        T: Into<String>,
        U: Into<String>,
        L: Into<String>,
    {
        let title = title.into();
        let url = url.into();
        let length = length.into();

        if title.trim().is_empty() {
            return Err(Error::invalid_input("record title is empty"));
        }
        if url.trim().is_empty() {
            return Err(Error::invalid_input("record url is empty"));
        }
        if !is_display_length(&length) {
            return Err(Error::invalid_input(format!(
                "record length {length:?} is not in (HH:)MM:SS form"
            )));
        }

        Ok(Self { title, url, length })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn length(&self) -> &str {
        &self.length
    }

    /// Field map sent to the content backend, keyed by field name.
    pub fn fields(&self) -> BTreeMap<&'static str, &str> {
        BTreeMap::from([
            ("title", self.title.as_str()),
            ("url", self.url.as_str()),
            ("length", self.length.as_str()),
        ])
    }
}

/// Check the fixed-width display grammar: `MM:SS` or `HH:MM:SS`, every
/// segment made of at least two digits.
pub fn is_display_length(s: &str) -> bool {
    let parts: Vec<&str> = s.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return false;
    }
    parts
        .iter()
        .all(|p| p.len() >= 2 && p.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record =
            PublishableRecord::new("Test", "https://www.youtube.com/watch?v=BBB222", "03:00")
                .unwrap();
        assert_eq!(record.title(), "Test");
        assert_eq!(record.url(), "https://www.youtube.com/watch?v=BBB222");
        assert_eq!(record.length(), "03:00");
    }

    #[test]
    fn test_record_fields_map() {
        let record = PublishableRecord::new("T", "U", "01:02:09").unwrap();
        let fields = record.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields["title"], "T");
        assert_eq!(fields["url"], "U");
        assert_eq!(fields["length"], "01:02:09");
    }

    #[test]
    fn test_record_rejects_empty_fields() {
        assert!(PublishableRecord::new("", "u", "00:01").is_err());
        assert!(PublishableRecord::new("  ", "u", "00:01").is_err());
        assert!(PublishableRecord::new("t", "", "00:01").is_err());
        assert!(PublishableRecord::new("t", "u", "").is_err());
    }

    #[test]
    fn test_record_rejects_bad_length() {
        for length in ["3:00", "03:0", "PT3M", "03-00", "1:02:03", "00:00:00:01", "aa:bb"] {
            assert!(
                PublishableRecord::new("t", "u", length).is_err(),
                "{length} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_length_grammar() {
        assert!(is_display_length("00:08"));
        assert!(is_display_length("04:59"));
        assert!(is_display_length("01:02:09"));
        assert!(is_display_length("100:00:00"));
        assert!(!is_display_length("1:00:00"));
        assert!(!is_display_length("00:8"));
        assert!(!is_display_length(""));
    }

    #[test]
    fn test_input_row() {
        let row = InputRow::new("https://youtu.be/abc", 2);
        assert_eq!(row.source_url, "https://youtu.be/abc");
        assert_eq!(row.line, 2);
    }
}
