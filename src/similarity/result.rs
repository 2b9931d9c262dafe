//! Similarity result structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Occurrences of a term present in both documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCounts {
    pub file1_count: usize,
    pub file2_count: usize,
    pub total: usize,
}

/// Distinct-term counts behind the similarity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTypeCounts {
    pub first: usize,
    pub second: usize,
    pub common: usize,
}

/// Result of a term-based comparison.
///
/// Maps keep rank order: most frequent first, ties broken by term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub common_terms: IndexMap<String, TermCounts>,
    pub unique_to_first: IndexMap<String, usize>,
    pub unique_to_second: IndexMap<String, usize>,
    /// Jaccard index over the two term sets, in `[0, 1]`
    pub similarity_score: f64,
    #[serde(default)]
    pub term_types: TermTypeCounts,
}
