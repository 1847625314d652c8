//! Trait definition for metadata providers.
//!
//! A provider resolves video identifiers into [`RawMetadata`]: the title, the
//! provider-encoded duration, and whether the video may be embedded.

use async_trait::async_trait;
use videoimport_common::{RawMetadata, VideoId};

/// Async trait that all metadata providers must implement.
///
/// Providers are shared as `Arc<dyn MetadataProvider>` and hold no mutable
/// state.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"youtube"`).
    fn name(&self) -> &'static str;

    /// Look up every id in a single request.
    ///
    /// Items come back in provider order. Ids the provider does not know are
    /// omitted rather than reported as errors.
    async fn fetch(&self, ids: &[VideoId]) -> anyhow::Result<Vec<RawMetadata>>;
}
