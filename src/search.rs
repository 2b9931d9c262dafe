//! Keyword search over a document's components.

use crate::error::{FinderError, Result};
use crate::model::SbomDocument;
use crate::parsers::extract_components;
use crate::store::DocumentStore;
use serde_json::Value;

/// Components of `doc` whose compact JSON contains `keyword`,
/// case-insensitively, in source order.
///
/// Works on every dialect the normalizer recognizes. An empty or blank
/// keyword is rejected.
pub fn search_components(doc: &Value, keyword: &str) -> Result<Vec<Value>> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Err(FinderError::validation("search keyword must not be empty"));
    }
    Ok(extract_components(doc)
        .iter()
        .filter(|component| {
            serde_json::to_string(component)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect())
}

/// Search a stored document by filename.
pub fn search_stored(store: &dyn DocumentStore, filename: &str, keyword: &str) -> Result<Vec<Value>> {
    let doc: SbomDocument = store.load(filename)?;
    let hits = search_components(&doc.content, keyword)?;
    tracing::debug!("{} components of {} match '{}'", hits.len(), filename, keyword);
    Ok(hits)
}
