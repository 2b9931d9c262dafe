//! **Catalog, compare and summarize SBOMs across schema dialects.**
//!
//! `sbom-finder` works with Software Bills of Materials produced in several
//! incompatible JSON dialects (CycloneDX, SPDX, Syft) without validating them
//! against their formal schemas. It reads whatever component list a document
//! carries and offers four analyses on top of it:
//!
//! - **Normalization** ([`parsers`]): an ordered dialect resolver that extracts a
//!   uniform component list and per-component licenses from any document.
//! - **Structural diff** ([`diff`]): the set difference of two documents'
//!   components, compared as whole records in canonical form.
//! - **Term similarity** ([`similarity`]): a schema-agnostic Jaccard score over
//!   the words of two documents, with ranked common and unique terms.
//! - **Corpus statistics** ([`stats`]): license, supplier, OS and category
//!   distributions plus a per-platform breakdown across the catalog.
//!
//! Documents and their classification metadata live behind the
//! [`store::DocumentStore`] and [`store::Catalog`] traits. The [`ingest`]
//! module is the only writer and keeps each record's derived counters in step
//! with its document.
//!
//! ## Diffing two documents
//!
//! ```
//! use sbom_finder::{DiffEngine, SbomDocument};
//! use serde_json::json;
//!
//! let old = SbomDocument::new("old.json", json!({"artifacts": [{"name": "openssl", "version": "1.1.1"}]}));
//! let new = SbomDocument::new("new.json", json!({"artifacts": [{"name": "openssl", "version": "3.0.2"}]}));
//!
//! let result = DiffEngine::new().diff(&old, &new);
//! assert_eq!(result.only_in_first.len(), 1);
//! assert_eq!(result.only_in_second.len(), 1);
//! ```
//!
//! ## Statistics over a corpus
//!
//! ```
//! use sbom_finder::store::{MemoryCatalog, MemoryDocumentStore};
//! use sbom_finder::{CatalogRecord, StatisticsEngine};
//!
//! let catalog = MemoryCatalog::from_records([CatalogRecord::new("a.json", "app")]);
//! let store = MemoryDocumentStore::new()
//!     .with_document("a.json", r#"{"packages": [{"name": "zlib", "licenseConcluded": "Zlib"}]}"#);
//!
//! let stats = StatisticsEngine::new().compute(&catalog, &store, None);
//! assert_eq!(stats.total_components, 1);
//! assert_eq!(stats.license_distribution["Zlib"], 1);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `sbom-finder` binary wraps every analysis; see `sbom-finder --help`.

#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod ingest;
pub mod model;
pub mod parsers;
pub mod reports;
pub mod search;
pub mod similarity;
pub mod stats;
pub mod store;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use diff::{DiffEngine, DiffResult, DiffSummary};
pub use error::{FinderError, Result};
pub use ingest::{ImportSummary, IngestMetadata, Ingestor, SbomGenerator};
pub use model::{CatalogFilter, CatalogRecord, Component, SbomDocument};
pub use parsers::{normalize, resolve_dialect, Dialect};
pub use reports::{ReportFormat, ReportGenerator};
pub use search::search_components;
pub use similarity::{SimilarityResult, TermSimilarityEngine};
pub use stats::{CorpusStatistics, StatisticsEngine};
