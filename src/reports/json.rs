//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;
use crate::ingest::ImportSummary;
use crate::model::{CatalogFilter, CatalogRecord, SbomDocument};
use crate::parsers::Dialect;
use crate::similarity::SimilarityResult;
use crate::stats::CorpusStatistics;
use serde::Serialize;
use serde_json::Value;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ReportError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    sbom_file: &'a str,
    keyword: &'a str,
    results: &'a [Value],
}

#[derive(Serialize)]
struct DocumentReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a CatalogRecord>,
    dialect: Dialect,
    content: &'a Value,
}

impl ReportGenerator for JsonReporter {
    fn diff_report(&self, _first: &str, _second: &str, result: &DiffResult) -> Result<String, ReportError> {
        self.render(result)
    }

    fn similarity_report(
        &self,
        _first: &str,
        _second: &str,
        result: &SimilarityResult,
    ) -> Result<String, ReportError> {
        self.render(result)
    }

    fn stats_report(
        &self,
        stats: &CorpusStatistics,
        _filter: Option<&CatalogFilter>,
    ) -> Result<String, ReportError> {
        self.render(stats)
    }

    fn records_report(&self, records: &[CatalogRecord]) -> Result<String, ReportError> {
        self.render(records)
    }

    fn document_report(
        &self,
        doc: &SbomDocument,
        record: Option<&CatalogRecord>,
    ) -> Result<String, ReportError> {
        self.render(&DocumentReport {
            record,
            dialect: doc.dialect(),
            content: &doc.content,
        })
    }

    fn search_report(&self, filename: &str, keyword: &str, hits: &[Value]) -> Result<String, ReportError> {
        self.render(&SearchReport {
            sbom_file: filename,
            keyword,
            results: hits,
        })
    }

    fn import_report(&self, summary: &ImportSummary) -> Result<String, ReportError> {
        self.render(summary)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
