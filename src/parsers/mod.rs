//! Format normalization for CycloneDX, SPDX and Syft documents.
//!
//! The normalizer does not parse dialect-specific schemas. It locates the
//! component list with an ordered key resolver ([`DIALECT_RULES`]) and reads
//! licenses with a fixed set of per-entry rules, so unexpected shapes degrade
//! to skipped entries instead of failing the whole document.
//!
//! ## Usage
//!
//! ```
//! use sbom_finder::parsers::{normalize, resolve_dialect, Dialect};
//! use serde_json::json;
//!
//! let doc = json!({"packages": [{"name": "zlib", "licenseConcluded": "Zlib"}]});
//! assert_eq!(resolve_dialect(&doc), Dialect::Spdx);
//!
//! let components = normalize(&doc);
//! assert_eq!(components[0].licenses, vec!["Zlib"]);
//! ```

mod detection;
mod licenses;
pub mod metadata;

pub use detection::{extract_components, resolve_dialect, Dialect, DialectRule, DIALECT_RULES};
pub use licenses::{component_licenses, unique_license_count, UNKNOWN_LICENSE};
pub use metadata::{extract_metadata, DocumentMetadata};

use crate::model::Component;
use serde_json::Value;

/// Typed component views of a document, in source order.
#[must_use]
pub fn normalize(doc: &Value) -> Vec<Component> {
    extract_components(doc)
        .iter()
        .map(Component::from_value)
        .collect()
}
