//! Structural diff between two SBOM documents.
//!
//! Both documents are normalized, every component is reduced to a canonical
//! key-sorted serialization of its full attribute set, and the two documents
//! are compared as sets of those strings. Two components that differ in any
//! field are different; identical duplicates inside one document collapse.
//!
//! # Example
//!
//! ```
//! use sbom_finder::diff::DiffEngine;
//! use serde_json::json;
//!
//! let first = json!({"artifacts": [{"name": "libx", "version": "1.0"}]});
//! let second = json!({"artifacts": []});
//!
//! let result = DiffEngine::new().diff_values(&first, &second);
//! assert_eq!(result.only_in_first.len(), 1);
//! assert!(result.only_in_second.is_empty());
//! ```

mod canonical;
mod engine;
mod result;

pub use canonical::canonical_form;
pub use engine::DiffEngine;
pub use result::{DiffResult, DiffSummary};
