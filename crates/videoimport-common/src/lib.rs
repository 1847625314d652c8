//! Videoimport-Common: Shared types, IDs, and errors.
//!
//! This crate provides the types that flow between the parser crate and the
//! import pipeline:
//!
//! - **Typed IDs**: [`VideoId`], a validated provider video identifier
//! - **Core Types**: [`InputRow`], [`RawMetadata`], and [`PublishableRecord`]
//! - **Error Handling**: the shared invalid-input error and result alias
//!
//! # Examples
//!
//! ```
//! use videoimport_common::{PublishableRecord, VideoId, Error, Result};
//!
//! let id = VideoId::new("dQw4w9WgXcQ").unwrap();
//! assert_eq!(id.as_str(), "dQw4w9WgXcQ");
//!
//! let record = PublishableRecord::new(
//!     "Never Gonna Give You Up",
//!     "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!     "03:32",
//! )
//! .unwrap();
//! assert_eq!(record.length(), "03:32");
//!
//! let err = VideoId::new("not an id").unwrap_err();
//! assert!(matches!(err, Error::InvalidInput(_)));
//!
//! fn check(title: &str) -> Result<PublishableRecord> {
//!     PublishableRecord::new(title, "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "03:32")
//! }
//! assert!(check("").is_err());
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
