//! Per-component license extraction.

use serde_json::Value;
use std::collections::HashSet;

/// Sentinel contributed by a component that declares no license at all.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// Extract all license strings of a raw component entry.
///
/// Sources are read independently and concatenated in this order:
/// 1. every usable entry of the `licenses` sequence,
/// 2. a non-empty `licenseConcluded` string,
/// 3. a non-empty `licenseDeclared` string.
///
/// A `licenses` entry may be `{"license": {"id": ..}}` (or `{"license":
/// {"name": ..}}` when the id is absent), `{"expression": ..}`, a plain
/// string, or a Syft `{"value": ..}` object. Anything else is skipped.
/// When nothing is found the result is `["Unknown"]`.
#[must_use]
pub fn component_licenses(component: &Value) -> Vec<String> {
    let mut licenses = Vec::new();

    if let Some(entries) = component.get("licenses").and_then(Value::as_array) {
        licenses.extend(entries.iter().filter_map(license_entry));
    }

    for key in ["licenseConcluded", "licenseDeclared"] {
        if let Some(value) = non_empty_str(component.get(key)) {
            licenses.push(value.to_string());
        }
    }

    if licenses.is_empty() {
        licenses.push(UNKNOWN_LICENSE.to_string());
    }
    licenses
}

fn license_entry(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(obj) => {
            if let Some(license) = obj.get("license").and_then(Value::as_object) {
                return non_empty_str(license.get("id"))
                    .or_else(|| non_empty_str(license.get("name")))
                    .map(str::to_string);
            }
            non_empty_str(obj.get("expression"))
                .or_else(|| non_empty_str(obj.get("value")))
                .map(str::to_string)
        }
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Number of distinct license strings across a document's components.
///
/// The `"Unknown"` sentinel counts as a license like any other, so a
/// document whose components declare nothing reports 1.
#[must_use]
pub fn unique_license_count(doc: &Value) -> usize {
    super::extract_components(doc)
        .iter()
        .flat_map(component_licenses)
        .collect::<HashSet<_>>()
        .len()
}
