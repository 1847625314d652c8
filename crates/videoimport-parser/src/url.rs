//! Video URL recognition.
//!
//! Accepts every shape editors paste into the import sheet:
//!
//! - protocol optional (`https:`, `http:`, protocol-relative `//`, or none)
//! - optional `www.` or `m.` subdomain
//! - the canonical `youtube.com` host or the `youtu.be` short-link host
//! - an empty path, `watch?v=`, `embed/`, or `v/` before the identifier
//!
//! Anything after the identifier (extra query parameters, a fragment, a
//! trailing slash) is ignored. A bare `youtube.com/<token>` path is the one
//! exception: there the trailer must start with `?`, `&` or `#`, otherwise
//! `youtube.com/feed/subscriptions` would yield `feed`.

use std::sync::LazyLock;

use regex::Regex;
use videoimport_common::VideoId;

use crate::error::ExtractionError;

/// Prefix of the canonical watch-page URL.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Path words that are never identifiers on their own.
const RESERVED_PATHS: [&str; 3] = ["watch", "embed", "v"];

/// Characters that may open the trailer of a bare `youtube.com/<id>` path.
const BARE_PATH_SEPARATORS: [char; 3] = ['?', '&', '#'];

// Groups: 1 = canonical host, 2 = path prefix, 3 = identifier, 4 = trailer.
static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?i:(?:https?:)?//)?",
        r"(?i:(?:www|m)\.)?",
        r"(?i:(youtube\.com)|youtu\.be)",
        r"/(watch\?(?:[^&#\s]*&)*?v=|embed/|v/)?",
        r"([A-Za-z0-9_-]+)",
        r"(\S*)$",
    ))
    .expect("video URL pattern is valid")
});

/// Extract the video identifier from a URL.
///
/// # Examples
///
/// ```
/// use videoimport_parser::extract;
///
/// let id = extract("https://www.youtube.com/watch?v=W-6v7IkfYKE&list=PLE2406712A8240C1F").unwrap();
/// assert_eq!(id.as_str(), "W-6v7IkfYKE");
///
/// assert!(extract("https://vimeo.com/12345").is_err());
/// ```
pub fn extract(url: &str) -> Result<VideoId, ExtractionError> {
    let input = url.trim();
    if input.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let unrecognized = || ExtractionError::Unrecognized(input.to_string());

    let caps = VIDEO_URL.captures(input).ok_or_else(unrecognized)?;
    let has_prefix = caps.get(2).is_some();
    let token = caps.get(3).ok_or_else(unrecognized)?.as_str();
    let trailer = caps.get(4).map_or("", |m| m.as_str());

    if !has_prefix && RESERVED_PATHS.contains(&token) {
        return Err(unrecognized());
    }

    let bare_path = !has_prefix && caps.get(1).is_some();
    if bare_path && !trailer.is_empty() && !trailer.starts_with(BARE_PATH_SEPARATORS) {
        return Err(unrecognized());
    }

    VideoId::new(token).map_err(|_| unrecognized())
}

/// Canonical watch-page URL for `id`.
pub fn watch_url(id: &VideoId) -> String {
    format!("{WATCH_URL_PREFIX}{id}")
}
