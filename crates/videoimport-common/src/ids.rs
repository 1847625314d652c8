//! Typed ID wrappers.
//!
//! [`VideoId`] wraps the provider's video token so it cannot be confused with
//! an arbitrary string such as a title or a full URL.

use crate::error::{Error, Result};

/// Identifier of one hosted video (e.g. the `dQw4w9WgXcQ` in a watch URL).
///
/// Always non-empty and made only of ASCII letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "String", into = "String"))]
pub struct VideoId(String);

impl VideoId {
    /// Validate and wrap a video identifier.
    pub fn new<S: Into<String>>(id: S) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::invalid_input("video id is empty"));
        }
        if !id.bytes().all(is_id_byte) {
            return Err(Error::invalid_input(format!(
                "video id contains invalid characters: {id:?}"
            )));
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bytes permitted in a video identifier.
pub fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

impl TryFrom<String> for VideoId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VideoId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
