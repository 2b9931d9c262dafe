//! Typed view over a single component entry.

use crate::parsers::component_licenses;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A component as seen through the normalizer.
///
/// Field lookups tolerate all three dialects: CycloneDX and Syft use
/// `version`, SPDX uses `versionInfo`; SPDX keeps the purl in `externalRefs`;
/// CycloneDX suppliers are objects while SPDX suppliers are
/// `"Organization: name"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component name (empty when the entry has none)
    pub name: String,
    /// Component version
    pub version: Option<String>,
    /// Package URL
    pub purl: Option<String>,
    /// Component type / package purpose
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Supplier name
    pub supplier: Option<String>,
    /// License identifiers or expressions; never empty
    pub licenses: Vec<String>,
}

impl Component {
    /// Build the typed view from a raw component entry.
    ///
    /// Non-object entries produce an empty component carrying only the
    /// `"Unknown"` license sentinel.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: str_field(value, "name").unwrap_or_default(),
            version: str_field(value, "version").or_else(|| str_field(value, "versionInfo")),
            purl: str_field(value, "purl").or_else(|| spdx_purl(value)),
            kind: str_field(value, "type").or_else(|| str_field(value, "primaryPackagePurpose")),
            supplier: supplier_name(value),
            licenses: component_licenses(value),
        }
    }

    /// `name@version`, or just the name when unversioned.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(v) => format!("{}@{}", self.name, v),
            None => self.name.clone(),
        }
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn spdx_purl(value: &Value) -> Option<String> {
    value
        .get("externalRefs")?
        .as_array()?
        .iter()
        .find(|r| r.get("referenceType").and_then(Value::as_str) == Some("purl"))
        .and_then(|r| str_field(r, "referenceLocator"))
}

fn supplier_name(value: &Value) -> Option<String> {
    match value.get("supplier")? {
        Value::String(s) => {
            let name = s
                .strip_prefix("Organization:")
                .or_else(|| s.strip_prefix("Person:"))
                .unwrap_or(s)
                .trim();
            if name.is_empty() || name == "NOASSERTION" {
                None
            } else {
                Some(name.to_string())
            }
        }
        obj @ Value::Object(_) => str_field(obj, "name"),
        _ => None,
    }
}
