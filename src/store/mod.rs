//! Collaborator interfaces: the document store and the catalog.
//!
//! The core engines only ever read through these traits. Writes exist for
//! the ingest path and are append-only: a filename can be written once and
//! is never replaced, which is what lets readers run without locks.

mod catalog;
mod documents;

pub use catalog::{Catalog, JsonFileCatalog, MemoryCatalog};
pub use documents::{validate_filename, DocumentStore, FsDocumentStore, MemoryDocumentStore};
