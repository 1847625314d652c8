use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;
use videoimport_common::PublishableRecord;

use super::{PublishedEntry, Publisher};
use crate::config::ContentfulConfig;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);
const MANAGEMENT_MEDIA_TYPE: &str = "application/vnd.contentful.management.v1+json";

#[derive(Debug, Deserialize)]
struct EntryResponse {
    sys: EntrySys,
}

#[derive(Debug, Deserialize)]
struct EntrySys {
    id: String,
    version: u64,
}

/// Content Management API client scoped to one space and environment.
pub struct ContentfulPublisher {
    client: Client,
    base_url: String,
    access_token: String,
    space_id: String,
    environment_id: String,
    locale: String,
}

impl ContentfulPublisher {
    pub fn new(config: &ContentfulConfig) -> Self {
        let client = Client::builder()
            .timeout(CONNECTION_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            space_id: config.space_id.clone(),
            environment_id: config.environment_id.clone(),
            locale: config.locale.clone(),
        }
    }

    fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url, self.space_id, self.environment_id
        )
    }

    /// Localized field payload: `{"fields": {name: {locale: value}}}`.
    fn entry_body(&self, record: &PublishableRecord) -> Value {
        let fields: Map<String, Value> = record
            .fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), json!({ self.locale.as_str(): value })))
            .collect();

        json!({ "fields": fields })
    }

    async fn create_entry(&self, content_type: &str, record: &PublishableRecord) -> Result<EntrySys> {
        let url = self.entries_url();
        let body = serde_json::to_string(&self.entry_body(record))?;

        debug!(url = %url, content_type, title = record.title(), "Creating entry");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, MANAGEMENT_MEDIA_TYPE)
            .header("X-Contentful-Content-Type", content_type)
            .body(body)
            .send()
            .await
            .context("Contentful create request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Contentful entry creation failed ({}): {}", status, body);
        }

        let entry: EntryResponse = response
            .json()
            .await
            .context("Failed to parse Contentful create response")?;
        Ok(entry.sys)
    }

    async fn publish_entry(&self, id: &str, version: u64) -> Result<EntrySys> {
        let url = format!("{}/{}/published", self.entries_url(), id);

        debug!(url = %url, version, "Publishing entry");

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, MANAGEMENT_MEDIA_TYPE)
            .header("X-Contentful-Version", version.to_string())
            .send()
            .await
            .context("Contentful publish request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Contentful publish of {} failed ({}): {}", id, status, body);
        }

        let entry: EntryResponse = response
            .json()
            .await
            .context("Failed to parse Contentful publish response")?;
        Ok(entry.sys)
    }
}

#[async_trait]
impl Publisher for ContentfulPublisher {
    fn name(&self) -> &'static str {
        "contentful"
    }

    async fn create_and_publish(
        &self,
        content_type: &str,
        record: &PublishableRecord,
    ) -> Result<PublishedEntry> {
        let created = self.create_entry(content_type, record).await?;
        let published = self.publish_entry(&created.id, created.version).await?;

        Ok(PublishedEntry {
            id: published.id,
            version: published.version,
            title: record.title().to_string(),
        })
    }
}
