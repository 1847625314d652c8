//! Publishing prepared records to the content store.
//!
//! The [`Publisher`] trait hides the store's client, space and environment
//! chain behind one call per record. [`ContentfulPublisher`] talks to the
//! Contentful Content Management API.

pub mod contentful;

pub use contentful::ContentfulPublisher;

use async_trait::async_trait;
use serde::Serialize;
use videoimport_common::PublishableRecord;

/// An entry that has been created and published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedEntry {
    /// Store-assigned entry id
    pub id: String,
    /// Entry version after publishing
    pub version: u64,
    pub title: String,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Short, lowercase identifier for this publisher (e.g. `"contentful"`).
    fn name(&self) -> &'static str;

    /// Create an entry of `content_type` from `record`, then publish it.
    ///
    /// Either step failing fails the whole call; an entry that was created but
    /// not published is left as a draft.
    async fn create_and_publish(
        &self,
        content_type: &str,
        record: &PublishableRecord,
    ) -> anyhow::Result<PublishedEntry>;
}
