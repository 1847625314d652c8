//! Video metadata lookup.
//!
//! - [`provider`] -- the [`MetadataProvider`] trait.
//! - [`providers`] -- concrete implementations (YouTube Data API v3).

pub mod provider;
pub mod providers;

pub use provider::MetadataProvider;
pub use providers::YoutubeProvider;
