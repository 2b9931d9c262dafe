//! Data model shared by the normalizer, differ, similarity and statistics engines.
//!
//! Documents are kept as generic JSON trees ([`SbomDocument`]) because the
//! three supported dialects disagree on almost every field. [`Component`] is a
//! typed, read-only view over one entry of a document's component list, and
//! [`CatalogRecord`] is the classification metadata the catalog keeps per file.

mod catalog;
mod component;
mod document;

pub use catalog::*;
pub use component::*;
pub use document::*;
