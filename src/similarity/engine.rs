//! Term similarity engine implementation.

use super::{SimilarityResult, TermCounts, TermFrequencies, TermTypeCounts};
use crate::error::{FinderError, Result};
use crate::model::SbomDocument;
use crate::store::DocumentStore;
use indexmap::IndexMap;
use std::cmp::Reverse;

/// Number of common terms reported.
pub const COMMON_TERMS_LIMIT: usize = 50;

/// Number of unique terms reported per document.
pub const UNIQUE_TERMS_LIMIT: usize = 25;

/// Schema-agnostic lexical comparison of two documents.
#[derive(Debug, Clone, Copy)]
pub struct TermSimilarityEngine {
    common_limit: usize,
    unique_limit: usize,
}

impl Default for TermSimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TermSimilarityEngine {
    /// Create an engine with the standard listing limits (50 common, 25 unique).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            common_limit: COMMON_TERMS_LIMIT,
            unique_limit: UNIQUE_TERMS_LIMIT,
        }
    }

    /// Override the listing limits. The score is unaffected.
    #[must_use]
    pub const fn with_limits(mut self, common: usize, unique: usize) -> Self {
        self.common_limit = common;
        self.unique_limit = unique;
        self
    }

    /// Compare two documents fetched from a store by filename.
    ///
    /// Existence of both is checked before either is parsed.
    pub fn compare_stored(
        &self,
        store: &dyn DocumentStore,
        first: &str,
        second: &str,
    ) -> Result<SimilarityResult> {
        let first_bytes = store.read(first)?.ok_or_else(|| FinderError::not_found(first))?;
        let second_bytes = store
            .read(second)?
            .ok_or_else(|| FinderError::not_found(second))?;

        let first_doc = SbomDocument::from_bytes(first, &first_bytes)?;
        let second_doc = SbomDocument::from_bytes(second, &second_bytes)?;
        Ok(self.compare(&first_doc, &second_doc))
    }

    /// Compare two raw JSON texts.
    ///
    /// Each text must parse as JSON; it is re-serialized before tokenizing so
    /// formatting differences do not matter.
    pub fn compare_text(&self, first: &str, second: &str) -> Result<SimilarityResult> {
        let first_doc = SbomDocument::from_json_str("first", first)?;
        let second_doc = SbomDocument::from_json_str("second", second)?;
        Ok(self.compare(&first_doc, &second_doc))
    }

    /// Compare two parsed documents.
    #[must_use]
    pub fn compare(&self, first: &SbomDocument, second: &SbomDocument) -> SimilarityResult {
        let first_terms = TermFrequencies::from_text(&first.to_compact_string());
        let second_terms = TermFrequencies::from_text(&second.to_compact_string());
        tracing::debug!(
            "Term comparison: {} has {} terms, {} has {} terms",
            first.filename,
            first_terms.distinct(),
            second.filename,
            second_terms.distinct()
        );
        self.compare_frequencies(&first_terms, &second_terms)
    }

    /// Compare two frequency tables.
    #[must_use]
    pub fn compare_frequencies(
        &self,
        first: &TermFrequencies,
        second: &TermFrequencies,
    ) -> SimilarityResult {
        let mut common: Vec<(&str, TermCounts)> = first
            .iter()
            .filter(|(term, _)| second.contains(term))
            .map(|(term, count1)| {
                let count2 = second.get(term);
                (
                    term,
                    TermCounts {
                        file1_count: count1,
                        file2_count: count2,
                        total: count1 + count2,
                    },
                )
            })
            .collect();
        let common_types = common.len();

        common.sort_unstable_by(|a, b| {
            Reverse(a.1.total)
                .cmp(&Reverse(b.1.total))
                .then_with(|| a.0.cmp(b.0))
        });
        let common_terms: IndexMap<String, TermCounts> = common
            .into_iter()
            .take(self.common_limit)
            .map(|(term, counts)| (term.to_string(), counts))
            .collect();

        let denominator = first.distinct() + second.distinct() - common_types;
        let similarity_score = if denominator > 0 {
            common_types as f64 / denominator as f64
        } else {
            0.0
        };

        SimilarityResult {
            common_terms,
            unique_to_first: top_unique(first, second, self.unique_limit),
            unique_to_second: top_unique(second, first, self.unique_limit),
            similarity_score,
            term_types: TermTypeCounts {
                first: first.distinct(),
                second: second.distinct(),
                common: common_types,
            },
        }
    }
}

/// Terms of `own` absent from `other`, most frequent first, ties by term.
fn top_unique(own: &TermFrequencies, other: &TermFrequencies, limit: usize) -> IndexMap<String, usize> {
    let mut unique: Vec<(&str, usize)> = own.iter().filter(|(term, _)| !other.contains(term)).collect();
    unique.sort_unstable_by(|a, b| Reverse(a.1).cmp(&Reverse(b.1)).then_with(|| a.0.cmp(b.0)));
    unique
        .into_iter()
        .take(limit)
        .map(|(term, count)| (term.to_string(), count))
        .collect()
}
