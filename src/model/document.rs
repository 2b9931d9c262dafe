//! Parsed SBOM documents.

use crate::error::{FinderError, Result};
use crate::model::Component;
use crate::parsers::{self, Dialect};
use serde_json::Value;
use std::fmt::Write;

/// A stored SBOM document, identified only by its filename.
///
/// The content is the raw JSON tree exactly as stored. Documents are never
/// mutated after they are written.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomDocument {
    /// Catalog filename of the document
    pub filename: String,
    /// Parsed JSON content
    pub content: Value,
}

impl SbomDocument {
    /// Wrap an already parsed JSON tree.
    pub fn new(filename: impl Into<String>, content: Value) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    /// Parse raw bytes as JSON.
    ///
    /// Invalid UTF-8 and malformed JSON both yield
    /// [`FinderError::InvalidDocument`].
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let filename = filename.into();
        match serde_json::from_slice::<Value>(bytes) {
            Ok(content) => Ok(Self { filename, content }),
            Err(e) => Err(FinderError::invalid_document(filename, e.to_string())),
        }
    }

    /// Parse a JSON string.
    pub fn from_json_str(filename: impl Into<String>, content: &str) -> Result<Self> {
        Self::from_bytes(filename, content.as_bytes())
    }

    /// Dialect the normalizer resolves for this document.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        parsers::resolve_dialect(&self.content)
    }

    /// Raw component entries in source order.
    #[must_use]
    pub fn components(&self) -> &[Value] {
        parsers::extract_components(&self.content)
    }

    /// Number of entries in the component list.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components().len()
    }

    /// Typed component views in source order.
    #[must_use]
    pub fn normalized(&self) -> Vec<Component> {
        parsers::normalize(&self.content)
    }

    /// Number of distinct license strings across all components.
    #[must_use]
    pub fn unique_license_count(&self) -> usize {
        parsers::unique_license_count(&self.content)
    }

    /// Compact textual serialization of the parsed tree.
    ///
    /// Non-ASCII characters are written as lowercase `\uXXXX` escapes over
    /// UTF-16 code units, so the output is pure ASCII.
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        escape_non_ascii(&self.content.to_string())
    }
}

fn escape_non_ascii(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 16);
    let mut units = [0u16; 2];
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}
