//! YouTube Data API v3 metadata provider.
//!
//! Implements [`MetadataProvider`] with a single `videos.list` call covering
//! every requested id.
//!
//! Features:
//! - One request per fetch, with the `contentDetails`, `snippet` and `status`
//!   parts.
//! - 30-second request timeout.
//! - Configurable base URL so tests can point the client at a local server.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use videoimport_common::{RawMetadata, VideoId};

use crate::config::YoutubeConfig;
use crate::metadata::provider::MetadataProvider;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const VIDEO_PARTS: &str = "contentDetails,snippet,status";

/// Largest id list the API documents for one `videos.list` call.
pub const MAX_IDS_PER_REQUEST: usize = 50;

// ---------------------------------------------------------------------------
// API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    content_details: ContentDetails,
    status: Option<Status>,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

#[derive(Debug, Deserialize)]
struct Status {
    embeddable: Option<bool>,
}

impl VideoItem {
    fn into_raw(self) -> Option<RawMetadata> {
        let id = match VideoId::new(self.id) {
            Ok(id) => id,
            Err(e) => {
                warn!("Ignoring item with unusable id: {}", e);
                return None;
            }
        };

        Some(RawMetadata {
            id,
            title: self.snippet.title,
            duration: self.content_details.duration,
            embeddable: self.status.and_then(|s| s.embeddable).unwrap_or(false),
        })
    }
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// YouTube metadata provider.
///
/// # Examples
///
/// ```no_run
/// use videoimport::config::YoutubeConfig;
/// use videoimport::metadata::YoutubeProvider;
///
/// let config = YoutubeConfig {
///     api_key: "your-api-key".into(),
///     ..Default::default()
/// };
/// let provider = YoutubeProvider::new(&config);
/// ```
pub struct YoutubeProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeProvider {
    pub fn new(config: &YoutubeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl MetadataProvider for YoutubeProvider {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn fetch(&self, ids: &[VideoId]) -> anyhow::Result<Vec<RawMetadata>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        if ids.len() > MAX_IDS_PER_REQUEST {
            warn!(
                count = ids.len(),
                "Requesting more than {} ids in one call; the API may truncate or reject it",
                MAX_IDS_PER_REQUEST
            );
        }

        let joined = ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}/videos", self.base_url);

        debug!(url = %url, count = ids.len(), "YouTube videos.list request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("id", joined.as_str()),
                ("part", VIDEO_PARTS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("YouTube request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("YouTube videos.list failed ({}): {}", status, body);
        }

        let list: VideoListResponse = response
            .json()
            .await
            .context("Failed to parse YouTube videos.list response")?;

        let items: Vec<RawMetadata> = list.items.into_iter().filter_map(VideoItem::into_raw).collect();
        debug!(returned = items.len(), "YouTube videos.list response");

        Ok(items)
    }
}
