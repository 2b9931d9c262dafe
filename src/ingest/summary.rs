//! Bulk import summary.

use serde::{Deserialize, Serialize};

/// A file that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub filename: String,
    pub reason: String,
}

/// Outcome of a bulk import. One bad file never aborts the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Newly cataloged filenames
    pub imported: Vec<String>,
    /// Filenames already in the catalog
    pub skipped: Vec<String>,
    pub failed: Vec<ImportFailure>,
}

impl ImportSummary {
    /// Files looked at.
    #[must_use]
    pub fn total(&self) -> usize {
        self.imported.len() + self.skipped.len() + self.failed.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: Self) {
        self.imported.extend(other.imported);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }

    /// Log summary of the import.
    pub fn log_summary(&self) {
        tracing::info!(
            "Import complete: {} imported, {} already cataloged, {} failed",
            self.imported.len(),
            self.skipped.len(),
            self.failed.len()
        );
        for failure in &self.failed {
            tracing::warn!("Import failed for {}: {}", failure.filename, failure.reason);
        }
    }
}
