use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, info, warn};
use videoimport_common::{InputRow, PublishableRecord, RawMetadata, VideoId};
use videoimport_parser::{extract, normalize, watch_url};

use super::{PipelineError, Result};
use crate::config::{Config, InvalidPolicy};
use crate::metadata::MetadataProvider;
use crate::publish::{PublishedEntry, Publisher};

/// Records ready to publish, with the counters from the stages before it.
#[derive(Debug, Clone, Default)]
pub struct Prepared {
    pub records: Vec<PublishableRecord>,
    /// Items the provider reported as not embeddable
    pub skipped: usize,
    /// Rows or items dropped under the `skip` policy
    pub rejected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    pub published: Vec<PublishedEntry>,
    pub failed: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub published: usize,
    pub skipped: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} published, {} skipped, {} rejected, {} failed",
            self.published, self.skipped, self.rejected, self.failed
        )
    }
}

/// Runs the import against a metadata provider and a publisher.
pub struct Importer {
    provider: Arc<dyn MetadataProvider>,
    publisher: Arc<dyn Publisher>,
    on_invalid: InvalidPolicy,
    content_type: String,
}

impl Importer {
    pub fn new(
        config: &Config,
        provider: Arc<dyn MetadataProvider>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            provider,
            publisher,
            on_invalid: config.pipeline.on_invalid,
            content_type: config.contentful.content_type.clone(),
        }
    }

    /// Extract an id from every row, in input order.
    ///
    /// Returns the ids and the number of rows rejected under the `skip`
    /// policy. Duplicates are kept.
    pub fn collect_ids(&self, rows: &[InputRow]) -> Result<(Vec<VideoId>, usize)> {
        let mut ids = Vec::with_capacity(rows.len());
        let mut rejected = 0;

        for row in rows {
            match extract(&row.source_url) {
                Ok(id) => {
                    debug!(line = row.line, id = %id, "Extracted video id");
                    ids.push(id);
                }
                Err(source) if self.on_invalid == InvalidPolicy::Skip => {
                    warn!(line = row.line, "Rejecting row: {}", source);
                    rejected += 1;
                }
                Err(source) => {
                    return Err(PipelineError::Extraction {
                        line: row.line,
                        source,
                    })
                }
            }
        }

        info!(ids = ids.len(), rejected, "Collected video ids");
        Ok((ids, rejected))
    }

    /// Extract ids, fetch their metadata, and build publishable records.
    pub async fn prepare(&self, rows: &[InputRow]) -> Result<Prepared> {
        let (ids, rejected) = self.collect_ids(rows)?;
        let mut prepared = Prepared {
            rejected,
            ..Default::default()
        };

        if ids.is_empty() {
            info!("No video ids to look up");
            return Ok(prepared);
        }

        info!(provider = self.provider.name(), count = ids.len(), "Fetching metadata");
        let items = self
            .provider
            .fetch(&ids)
            .await
            .map_err(PipelineError::Fetch)?;
        info!(returned = items.len(), "Metadata received");

        warn_missing(&ids, &items);

        for item in &items {
            if !item.embeddable {
                info!(id = %item.id, title = %item.title, "Skipping video that cannot be embedded");
                prepared.skipped += 1;
                continue;
            }

            match build_record(item) {
                Ok(record) => prepared.records.push(record),
                Err(e) if self.on_invalid == InvalidPolicy::Skip => {
                    warn!(id = %item.id, "Rejecting video: {}", e);
                    prepared.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            records = prepared.records.len(),
            skipped = prepared.skipped,
            rejected = prepared.rejected,
            "Records prepared"
        );
        Ok(prepared)
    }

    /// Create and publish each record in order, one at a time.
    ///
    /// Failures are logged and counted; the remaining records are still
    /// attempted.
    pub async fn publish(&self, records: &[PublishableRecord]) -> PublishReport {
        let mut report = PublishReport::default();

        for record in records {
            match self
                .publisher
                .create_and_publish(&self.content_type, record)
                .await
            {
                Ok(entry) => {
                    info!("Entry {} ({}) created & published", entry.id, entry.title);
                    report.published.push(entry);
                }
                Err(e) => {
                    error!(
                        publisher = self.publisher.name(),
                        title = record.title(),
                        url = record.url(),
                        "Failed to publish entry: {:#}",
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Run the whole import.
    pub async fn run(&self, rows: &[InputRow]) -> Result<RunSummary> {
        let prepared = self.prepare(rows).await?;
        let report = self.publish(&prepared.records).await;

        let summary = RunSummary {
            published: report.published.len(),
            skipped: prepared.skipped,
            rejected: prepared.rejected,
            failed: report.failed,
        };

        info!("Import finished: {}", summary);
        Ok(summary)
    }
}

fn build_record(item: &RawMetadata) -> Result<PublishableRecord> {
    let length = normalize(&item.duration).map_err(|source| PipelineError::Normalization {
        id: item.id.clone(),
        source,
    })?;

    Ok(PublishableRecord::new(
        item.title.as_str(),
        watch_url(&item.id),
        length,
    )?)
}

/// The provider silently omits ids it does not know.
fn warn_missing(ids: &[VideoId], items: &[RawMetadata]) {
    let returned: HashSet<&VideoId> = items.iter().map(|item| &item.id).collect();
    let mut reported = HashSet::new();

    for id in ids {
        if !returned.contains(id) && reported.insert(id) {
            warn!(id = %id, "Video not found");
        }
    }
}
