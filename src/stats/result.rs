//! Corpus statistics result types.

use super::distribution::Distribution;
use super::platform::{Platform, PlatformStats};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a cataloged document was left out of the content-derived figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipReason {
    /// The record has no backing document
    Missing,
    /// The document exists but is not valid JSON
    Invalid,
    /// The store failed to read the document
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Missing => "missing",
            Self::Invalid => "invalid",
            Self::Unreadable => "unreadable",
        };
        f.write_str(s)
    }
}

/// A cataloged document that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: SkipReason,
    pub message: String,
}

/// Statistics over a (possibly filtered) corpus.
///
/// Metadata distributions count every record in the corpus. Component and
/// license figures cover only the `readable_sboms` documents; averages are
/// divided by that count, not by `total_sboms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    /// Catalog records in the corpus, readable or not
    pub total_sboms: usize,
    pub readable_sboms: usize,
    pub total_components: usize,
    pub average_components_per_sbom: f64,
    pub average_unique_licenses: f64,
    pub os_distribution: Distribution,
    pub category_distribution: Distribution,
    pub binary_type_distribution: Distribution,
    /// Top 10
    pub supplier_distribution: Distribution,
    /// Top 10
    pub manufacturer_distribution: Distribution,
    /// Top 10, counted per component occurrence
    pub license_distribution: Distribution,
    /// Always holds all five platforms
    pub platforms: IndexMap<Platform, PlatformStats>,
    #[serde(default)]
    pub skipped: Vec<SkippedDocument>,
}

impl CorpusStatistics {
    /// Whether any cataloged document had to be skipped.
    #[must_use]
    pub fn has_partial_failure(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Log a one-line summary.
    pub fn log_summary(&self) {
        tracing::info!(
            "Statistics computed: {} SBOMs ({} readable), {} components, {:.1} avg components, \
             {} distinct licenses in top list, {} skipped",
            self.total_sboms,
            self.readable_sboms,
            self.total_components,
            self.average_components_per_sbom,
            self.license_distribution.len(),
            self.skipped.len()
        );
    }
}
