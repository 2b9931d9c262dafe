//! Report generation.
//!
//! Every engine result can be rendered in two formats:
//! - JSON: the result objects serialized as-is, for programmatic use
//! - Summary: compact human-readable text for the terminal

mod json;
mod output;
mod summary;
mod types;

pub use json::JsonReporter;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::diff::DiffResult;
use crate::ingest::ImportSummary;
use crate::model::{CatalogFilter, CatalogRecord, SbomDocument};
use crate::similarity::SimilarityResult;
use crate::stats::CorpusStatistics;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Structural diff between two named documents
    fn diff_report(&self, first: &str, second: &str, result: &DiffResult) -> Result<String, ReportError>;

    /// Term similarity between two named documents
    fn similarity_report(
        &self,
        first: &str,
        second: &str,
        result: &SimilarityResult,
    ) -> Result<String, ReportError>;

    /// Corpus statistics, with the filter that produced them
    fn stats_report(
        &self,
        stats: &CorpusStatistics,
        filter: Option<&CatalogFilter>,
    ) -> Result<String, ReportError>;

    /// Catalog listing
    fn records_report(&self, records: &[CatalogRecord]) -> Result<String, ReportError>;

    /// One stored document and its catalog record, if cataloged
    fn document_report(
        &self,
        doc: &SbomDocument,
        record: Option<&CatalogRecord>,
    ) -> Result<String, ReportError>;

    /// Keyword search hits in one document
    fn search_report(&self, filename: &str, keyword: &str, hits: &[Value]) -> Result<String, ReportError>;

    /// Bulk import outcome
    fn import_report(&self, summary: &ImportSummary) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given (already resolved) format.
///
/// [`ReportFormat::Auto`] falls back to the summary reporter.
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
    }
}
