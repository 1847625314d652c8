//! The import pipeline: rows in, published entries out.
//!
//! [`Importer`] runs the stages strictly in order: extract ids, fetch
//! metadata once, build records, publish them one at a time.

mod importer;

pub use importer::{Importer, Prepared, PublishReport, RunSummary};

use videoimport_common::VideoId;
use videoimport_parser::{ExtractionError, NormalizationError};

/// A failure that ends the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Line {line}: {source}")]
    Extraction {
        line: u64,
        #[source]
        source: ExtractionError,
    },

    #[error("Video {id}: {source}")]
    Normalization {
        id: VideoId,
        #[source]
        source: NormalizationError,
    },

    #[error("Metadata fetch failed: {0:#}")]
    Fetch(anyhow::Error),

    #[error("Invalid record: {0}")]
    Record(#[from] videoimport_common::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
