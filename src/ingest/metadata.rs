//! Caller-supplied metadata for ingest.

use crate::model::CatalogRecord;
use crate::parsers::DocumentMetadata;
use serde::{Deserialize, Serialize};

/// Metadata supplied with an upload. Every field is optional; set fields win
/// over values extracted from the document and its filename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestMetadata {
    pub app_name: Option<String>,
    pub category: Option<String>,
    pub operating_system: Option<String>,
    pub binary_type: Option<String>,
    pub supplier: Option<String>,
    pub manufacturer: Option<String>,
    pub version: Option<String>,
    pub cost: Option<f64>,
    pub description: Option<String>,
}

impl IngestMetadata {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a catalog record, filling unset fields from `extracted`.
    pub(crate) fn into_record(self, filename: &str, extracted: DocumentMetadata) -> CatalogRecord {
        let pick = |explicit: Option<String>, fallback: String| {
            Some(explicit.filter(|v| !v.trim().is_empty()).unwrap_or(fallback))
        };

        let mut record = CatalogRecord::new(
            filename,
            self.app_name
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(extracted.app_name),
        );
        record.category = pick(self.category, extracted.category);
        record.operating_system = pick(self.operating_system, extracted.operating_system);
        record.binary_type = pick(self.binary_type, extracted.binary_type);
        record.supplier = pick(self.supplier, extracted.supplier);
        record.manufacturer = pick(self.manufacturer, extracted.manufacturer);
        record.version = pick(self.version, extracted.version);
        record.cost = self.cost.unwrap_or(0.0);
        record.description = self.description;
        record
    }
}
