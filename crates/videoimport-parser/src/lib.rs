//! # videoimport-parser
//!
//! Parsing for the two provider-specific strings the importer deals with:
//!
//! - [`url`]: recognizes video URLs in their many equivalent shapes and
//!   extracts the canonical [`VideoId`].
//! - [`duration`]: turns an ISO-8601-style duration (`PT1H2M10S`) into the
//!   fixed-width `(HH:)MM:SS` display form, applying the provider's
//!   one-second correction.
//!
//! ## Quick Start
//!
//! ```
//! use videoimport_parser::{extract, normalize};
//!
//! let id = extract("https://youtu.be/dQw4w9WgXcQ?t=42").unwrap();
//! assert_eq!(id.as_str(), "dQw4w9WgXcQ");
//!
//! assert_eq!(normalize("PT1H2M10S").unwrap(), "01:02:09");
//! assert_eq!(normalize("PT5M").unwrap(), "04:59");
//! ```

pub mod duration;
pub mod error;
pub mod lexer;
pub mod url;

pub use duration::{normalize, Duration};
pub use error::{ExtractionError, NormalizationError};
pub use url::{extract, watch_url};
pub use videoimport_common::VideoId;
