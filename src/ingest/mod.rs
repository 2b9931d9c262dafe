//! Ingest path: the only writer of catalog records and stored documents.
//!
//! Every record is created together with its document, and its derived
//! counters (`total_components`, `unique_licenses`) are computed from that
//! document by the normalizer at the same time.

mod generator;
mod ingestor;
mod metadata;
mod summary;

pub use generator::{generated_filename, SbomGenerator};
pub use ingestor::Ingestor;
pub use metadata::IngestMetadata;
pub use summary::{ImportFailure, ImportSummary};
