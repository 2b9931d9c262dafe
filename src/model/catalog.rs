//! Catalog records and record filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value used in distributions when a metadata field is missing or empty.
pub const UNKNOWN_VALUE: &str = "Unknown";

/// Classification metadata for one stored SBOM document.
///
/// Only the ingest path creates records. `total_components` and
/// `unique_licenses` are derived from the document at ingest time and are
/// never edited on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Unique filename of the backing document
    pub filename: String,
    /// Application name
    pub app_name: String,
    /// Application category
    #[serde(default)]
    pub category: Option<String>,
    /// Operating system
    #[serde(default)]
    pub operating_system: Option<String>,
    /// Binary type (desktop, mobile, service, ...)
    #[serde(default, alias = "app_binary_type")]
    pub binary_type: Option<String>,
    /// Supplier name
    #[serde(default)]
    pub supplier: Option<String>,
    /// Manufacturer name
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Application version
    #[serde(default)]
    pub version: Option<String>,
    /// Cost
    #[serde(default)]
    pub cost: f64,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Component count derived from the document at ingest
    #[serde(default)]
    pub total_components: usize,
    /// Distinct license count derived from the document at ingest
    #[serde(default)]
    pub unique_licenses: usize,
    /// When the record was created
    #[serde(default = "Utc::now")]
    pub upload_date: DateTime<Utc>,
}

impl CatalogRecord {
    /// Create a record with only the filename and application name set.
    pub fn new(filename: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            app_name: app_name.into(),
            category: None,
            operating_system: None,
            binary_type: None,
            supplier: None,
            manufacturer: None,
            version: None,
            cost: 0.0,
            description: None,
            total_components: 0,
            unique_licenses: 0,
            upload_date: Utc::now(),
        }
    }

    /// Category, or [`UNKNOWN_VALUE`].
    #[must_use]
    pub fn category_or_unknown(&self) -> &str {
        or_unknown(self.category.as_deref())
    }

    /// Operating system, or [`UNKNOWN_VALUE`].
    #[must_use]
    pub fn os_or_unknown(&self) -> &str {
        or_unknown(self.operating_system.as_deref())
    }

    /// Binary type, or [`UNKNOWN_VALUE`].
    #[must_use]
    pub fn binary_type_or_unknown(&self) -> &str {
        or_unknown(self.binary_type.as_deref())
    }

    /// Supplier, or [`UNKNOWN_VALUE`].
    #[must_use]
    pub fn supplier_or_unknown(&self) -> &str {
        or_unknown(self.supplier.as_deref())
    }

    /// Manufacturer, or [`UNKNOWN_VALUE`].
    #[must_use]
    pub fn manufacturer_or_unknown(&self) -> &str {
        or_unknown(self.manufacturer.as_deref())
    }
}

fn or_unknown(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNKNOWN_VALUE,
    }
}

// ============================================================================
// Catalog Filter
// ============================================================================

/// Filter over catalog records.
///
/// All active filters are AND-combined. Each one is a case-insensitive
/// substring match; a record with no value for a filtered field never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub category: Option<String>,
    pub operating_system: Option<String>,
    pub supplier: Option<String>,
    pub manufacturer: Option<String>,
    pub binary_type: Option<String>,
}

impl CatalogFilter {
    /// Check if a record matches all active filters.
    #[must_use]
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        field_matches(self.category.as_deref(), record.category.as_deref())
            && field_matches(
                self.operating_system.as_deref(),
                record.operating_system.as_deref(),
            )
            && field_matches(self.supplier.as_deref(), record.supplier.as_deref())
            && field_matches(self.manufacturer.as_deref(), record.manufacturer.as_deref())
            && field_matches(self.binary_type.as_deref(), record.binary_type.as_deref())
    }

    /// Returns true if no filters are set (would match everything).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.operating_system.is_none()
            && self.supplier.is_none()
            && self.manufacturer.is_none()
            && self.binary_type.is_none()
    }

    /// Build a human-readable description of the active filters.
    #[must_use]
    pub fn description(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref c) = self.category {
            parts.push(format!("category~\"{c}\""));
        }
        if let Some(ref o) = self.operating_system {
            parts.push(format!("os~\"{o}\""));
        }
        if let Some(ref s) = self.supplier {
            parts.push(format!("supplier~\"{s}\""));
        }
        if let Some(ref m) = self.manufacturer {
            parts.push(format!("manufacturer~\"{m}\""));
        }
        if let Some(ref b) = self.binary_type {
            parts.push(format!("binary_type~\"{b}\""));
        }
        if parts.is_empty() {
            "*".to_string()
        } else {
            parts.join(" AND ")
        }
    }
}

fn field_matches(filter: Option<&str>, value: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(needle) => value.is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase())),
    }
}
