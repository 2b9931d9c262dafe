//! Classification metadata extraction used by bulk import.
//!
//! Starts from filename-derived defaults, overlays whatever a CycloneDX
//! `metadata.component` declares, then falls back to filename keywords for
//! the operating system and binary type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_VALUE: &str = "unknown";
const DEFAULT_BINARY_TYPE: &str = "desktop";

/// OS keywords recognized in filenames, in probing order.
const FILENAME_OS_KEYWORDS: &[&str] = &["windows", "linux", "macos", "android", "ios"];

/// Binary-type keywords recognized in filenames, in probing order.
const FILENAME_TYPE_KEYWORDS: &[&str] = &["mobile", "web", "server", "service"];

/// Metadata extracted from a document and its filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub app_name: String,
    pub category: String,
    pub operating_system: String,
    pub binary_type: String,
    pub supplier: String,
    pub manufacturer: String,
    pub version: String,
}

impl DocumentMetadata {
    fn defaults(filename: &str) -> Self {
        let app_name = filename.split('_').next().unwrap_or(filename);
        Self {
            app_name: app_name.to_string(),
            category: DEFAULT_VALUE.to_string(),
            operating_system: DEFAULT_VALUE.to_string(),
            binary_type: DEFAULT_BINARY_TYPE.to_string(),
            supplier: DEFAULT_VALUE.to_string(),
            manufacturer: DEFAULT_VALUE.to_string(),
            version: DEFAULT_VALUE.to_string(),
        }
    }
}

/// Extract classification metadata for a document.
///
/// `filename` is the catalog filename (no directory part). When
/// `infer_from_filename` is false the OS and binary type keep whatever the
/// document (or the defaults) provide.
#[must_use]
pub fn extract_metadata(filename: &str, doc: &Value, infer_from_filename: bool) -> DocumentMetadata {
    let mut meta = DocumentMetadata::defaults(filename);

    if let Some(component) = doc.get("metadata").and_then(|m| m.get("component")) {
        apply_primary_component(&mut meta, component);
    }

    if infer_from_filename {
        let lower = filename.to_lowercase();
        if meta.operating_system == DEFAULT_VALUE {
            if let Some(os) = FILENAME_OS_KEYWORDS.iter().find(|k| lower.contains(*k)) {
                meta.operating_system = (*os).to_string();
            }
        }
        if meta.binary_type == DEFAULT_BINARY_TYPE {
            if let Some(kind) = FILENAME_TYPE_KEYWORDS.iter().find(|k| lower.contains(*k)) {
                meta.binary_type = (*kind).to_string();
            }
        }
    }

    meta
}

fn apply_primary_component(meta: &mut DocumentMetadata, component: &Value) {
    if let Some(name) = component.get("name").and_then(Value::as_str) {
        meta.app_name = name.to_string();
    }
    if let Some(version) = component.get("version").and_then(Value::as_str) {
        meta.version = version.to_string();
    }
    if let Some(supplier) = component
        .get("supplier")
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
    {
        meta.supplier = supplier.to_string();
        meta.manufacturer = supplier.to_string();
    }

    let Some(properties) = component.get("properties").and_then(Value::as_array) else {
        return;
    };
    for prop in properties {
        let Some(value) = prop.get("value").and_then(Value::as_str) else {
            continue;
        };
        match prop.get("name").and_then(Value::as_str) {
            Some("category") => meta.category = value.to_string(),
            Some("os") => meta.operating_system = value.to_string(),
            Some("type") => meta.binary_type = value.to_string(),
            _ => {}
        }
    }
}
