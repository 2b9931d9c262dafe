//! Dialect resolution for raw SBOM documents.
//!
//! The resolver is an ordered rule list. Each rule names the top-level key
//! that holds a dialect's component list; the first rule whose key is present
//! wins and no merging happens across dialects. The order is part of the
//! public contract: a document carrying both `components` and `packages` is
//! always CycloneDX.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// SBOM schema dialect identified by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    CycloneDx,
    Spdx,
    Syft,
    /// No known component list key
    Unknown,
}

impl Dialect {
    /// Get the human-readable name for this dialect.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CycloneDx => "CycloneDX",
            Self::Spdx => "SPDX",
            Self::Syft => "Syft",
            Self::Unknown => "Unknown",
        }
    }

    /// Top-level key that holds this dialect's component list.
    #[must_use]
    pub fn list_key(&self) -> Option<&'static str> {
        DIALECT_RULES
            .iter()
            .find(|rule| rule.dialect == *self)
            .map(|rule| rule.list_key)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One "try this extractor" rule of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectRule {
    pub dialect: Dialect,
    pub list_key: &'static str,
}

/// Resolver rules in probing order.
pub const DIALECT_RULES: &[DialectRule] = &[
    DialectRule {
        dialect: Dialect::CycloneDx,
        list_key: "components",
    },
    DialectRule {
        dialect: Dialect::Spdx,
        list_key: "packages",
    },
    DialectRule {
        dialect: Dialect::Syft,
        list_key: "artifacts",
    },
];

/// Find the first rule whose key is present on the document.
fn matching_rule(doc: &Value) -> Option<&'static DialectRule> {
    let obj = doc.as_object()?;
    DIALECT_RULES
        .iter()
        .find(|rule| obj.contains_key(rule.list_key))
}

/// Resolve the dialect of a parsed document.
#[must_use]
pub fn resolve_dialect(doc: &Value) -> Dialect {
    let dialect = matching_rule(doc).map_or(Dialect::Unknown, |rule| rule.dialect);
    tracing::debug!("Resolved SBOM dialect: {}", dialect);
    dialect
}

/// Extract the component sequence of a parsed document in source order.
///
/// A winning key whose value is not a sequence yields an empty slice; the
/// resolver does not fall through to later rules in that case.
#[must_use]
pub fn extract_components(doc: &Value) -> &[Value] {
    matching_rule(doc)
        .and_then(|rule| doc.get(rule.list_key))
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice)
}
