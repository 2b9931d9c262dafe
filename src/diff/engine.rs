//! Structural diff engine implementation.

use super::{canonical_form, DiffResult, DiffSummary};
use crate::error::{FinderError, Result};
use crate::model::SbomDocument;
use crate::parsers::extract_components;
use crate::store::DocumentStore;
use serde_json::Value;
use std::collections::BTreeMap;

/// Set-based structural diff engine.
///
/// Stateless; one engine can be shared freely between callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Create a new diff engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Diff two documents fetched from a store by filename.
    ///
    /// Both filenames are checked for existence before either is parsed, so
    /// a missing file is reported as [`FinderError::NotFound`] even when the
    /// other one is malformed.
    pub fn diff_stored(
        &self,
        store: &dyn DocumentStore,
        first: &str,
        second: &str,
    ) -> Result<DiffResult> {
        let first_bytes = store.read(first)?.ok_or_else(|| FinderError::not_found(first))?;
        let second_bytes = store
            .read(second)?
            .ok_or_else(|| FinderError::not_found(second))?;

        let first_doc = SbomDocument::from_bytes(first, &first_bytes)?;
        let second_doc = SbomDocument::from_bytes(second, &second_bytes)?;
        Ok(self.diff(&first_doc, &second_doc))
    }

    /// Diff two parsed documents.
    pub fn diff(&self, first: &SbomDocument, second: &SbomDocument) -> DiffResult {
        tracing::debug!("Diffing {} against {}", first.filename, second.filename);
        self.diff_values(&first.content, &second.content)
    }

    /// Diff two raw JSON trees.
    pub fn diff_values(&self, first: &Value, second: &Value) -> DiffResult {
        let first_set = canonical_set(first);
        let second_set = canonical_set(second);

        let only_in_first: Vec<Value> = first_set
            .iter()
            .filter(|(key, _)| !second_set.contains_key(*key))
            .map(|(_, value)| (*value).clone())
            .collect();
        let only_in_second: Vec<Value> = second_set
            .iter()
            .filter(|(key, _)| !first_set.contains_key(*key))
            .map(|(_, value)| (*value).clone())
            .collect();

        let summary = DiffSummary {
            first_total: first_set.len(),
            second_total: second_set.len(),
            common: first_set.len() - only_in_first.len(),
            only_in_first: only_in_first.len(),
            only_in_second: only_in_second.len(),
        };
        tracing::debug!(
            "Structural diff: {} only in first, {} only in second, {} common",
            summary.only_in_first,
            summary.only_in_second,
            summary.common
        );

        DiffResult {
            only_in_first,
            only_in_second,
            summary,
        }
    }
}

/// Map canonical form to the first component that produced it.
fn canonical_set(doc: &Value) -> BTreeMap<String, &Value> {
    let mut set = BTreeMap::new();
    for component in extract_components(doc) {
        set.entry(canonical_form(component)).or_insert(component);
    }
    set
}
