//! Shared fakes for integration tests.
//!
//! [`FakeProvider`] answers from a fixed item list and records every id list
//! it is asked for. [`RecordingPublisher`] keeps every record it receives and
//! can be told to fail on chosen calls.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use videoimport::metadata::MetadataProvider;
use videoimport::publish::{PublishedEntry, Publisher};
use videoimport_common::{InputRow, PublishableRecord, RawMetadata, VideoId};

pub struct FakeProvider {
    items: Vec<RawMetadata>,
    calls: Mutex<Vec<Vec<VideoId>>>,
}

impl FakeProvider {
    pub fn new(items: Vec<RawMetadata>) -> Self {
        Self {
            items,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every id list passed to `fetch`, in call order.
    pub fn calls(&self) -> Vec<Vec<VideoId>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn fetch(&self, ids: &[VideoId]) -> anyhow::Result<Vec<RawMetadata>> {
        self.calls.lock().unwrap().push(ids.to_vec());
        let wanted: HashSet<&VideoId> = ids.iter().collect();
        Ok(self
            .items
            .iter()
            .filter(|item| wanted.contains(&item.id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    /// 1-based call numbers that fail
    fail_on: HashSet<usize>,
    calls: Mutex<Vec<(String, PublishableRecord)>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            fail_on: calls.iter().copied().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(content_type, record)` received, including failed attempts.
    pub fn calls(&self) -> Vec<(String, PublishableRecord)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn create_and_publish(
        &self,
        content_type: &str,
        record: &PublishableRecord,
    ) -> anyhow::Result<PublishedEntry> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((content_type.to_string(), record.clone()));
            calls.len()
        };

        if self.fail_on.contains(&call) {
            anyhow::bail!("publish call {} rejected", call);
        }

        Ok(PublishedEntry {
            id: format!("entry{}", call),
            version: 2,
            title: record.title().to_string(),
        })
    }
}

pub fn item(id: &str, title: &str, duration: &str, embeddable: bool) -> RawMetadata {
    RawMetadata {
        id: VideoId::new(id).unwrap(),
        title: title.to_string(),
        duration: duration.to_string(),
        embeddable,
    }
}

/// Rows numbered as if read from a CSV file with a header line.
pub fn rows(urls: &[&str]) -> Vec<InputRow> {
    urls.iter()
        .enumerate()
        .map(|(i, url)| InputRow::new(*url, i as u64 + 2))
        .collect()
}
