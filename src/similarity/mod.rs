//! Term similarity between two SBOM documents.
//!
//! Works on the serialized text of a document rather than on normalized
//! components, which makes it independent of the schema dialect: a CycloneDX
//! and an SPDX description of the same product share most of their terms.
//!
//! ```
//! use sbom_finder::similarity::TermSimilarityEngine;
//!
//! let doc = r#"{"components": [{"name": "lodash", "version": "4.17.21"}]}"#;
//! let result = TermSimilarityEngine::new().compare_text(doc, doc).unwrap();
//! assert_eq!(result.similarity_score, 1.0);
//! ```

mod engine;
mod result;
mod terms;

pub use engine::{TermSimilarityEngine, COMMON_TERMS_LIMIT, UNIQUE_TERMS_LIMIT};
pub use result::{SimilarityResult, TermCounts, TermTypeCounts};
pub use terms::{TermFrequencies, MIN_TERM_CHARS};
