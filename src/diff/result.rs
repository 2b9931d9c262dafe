//! Diff result structures.

use crate::model::Component;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a structural diff.
///
/// Serializes to `{"only_in_first": [...], "only_in_second": [...], "summary": {...}}`.
/// Components are the original entries, ordered by canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Components whose canonical form appears only in the first document
    pub only_in_first: Vec<Value>,
    /// Components whose canonical form appears only in the second document
    pub only_in_second: Vec<Value>,
    /// Counts over distinct canonical forms
    #[serde(default)]
    pub summary: DiffSummary,
}

/// Counts describing a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Distinct components in the first document
    pub first_total: usize,
    /// Distinct components in the second document
    pub second_total: usize,
    /// Distinct components present in both
    pub common: usize,
    /// Size of `only_in_first`
    pub only_in_first: usize,
    /// Size of `only_in_second`
    pub only_in_second: usize,
}

impl DiffResult {
    /// Whether the two documents have the same component set.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }

    /// Typed views of `only_in_first`.
    #[must_use]
    pub fn first_components(&self) -> Vec<Component> {
        self.only_in_first.iter().map(Component::from_value).collect()
    }
}
