//! Catalog implementations.

use crate::error::{FinderError, Result};
use crate::model::{CatalogFilter, CatalogRecord};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Metadata record store keyed by unique filename.
pub trait Catalog: Send + Sync {
    /// All records matching the filter (all records when `None`), in
    /// insertion order.
    fn list_records(&self, filter: Option<&CatalogFilter>) -> Vec<CatalogRecord>;

    /// The record for a filename, if any.
    fn get_record(&self, filename: &str) -> Option<CatalogRecord>;

    /// Add a record. Fails with [`FinderError::DuplicateFilename`] if the
    /// filename is already cataloged.
    fn insert(&self, record: CatalogRecord) -> Result<()>;

    /// Whether the filename is already cataloged.
    fn contains(&self, filename: &str) -> bool {
        self.get_record(filename).is_some()
    }
}

fn filtered(
    records: &IndexMap<String, CatalogRecord>,
    filter: Option<&CatalogFilter>,
) -> Vec<CatalogRecord> {
    records
        .values()
        .filter(|r| filter.map_or(true, |f| f.matches(r)))
        .cloned()
        .collect()
}

// ============================================================================
// In-memory catalog
// ============================================================================

/// Catalog held in memory.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: RwLock<IndexMap<String, CatalogRecord>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, keeping the first of any duplicate filename.
    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> Self {
        let mut map = IndexMap::new();
        for record in records {
            map.entry(record.filename.clone()).or_insert(record);
        }
        Self {
            records: RwLock::new(map),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for MemoryCatalog {
    fn list_records(&self, filter: Option<&CatalogFilter>) -> Vec<CatalogRecord> {
        filtered(
            &self.records.read().unwrap_or_else(PoisonError::into_inner),
            filter,
        )
    }

    fn get_record(&self, filename: &str) -> Option<CatalogRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(filename)
            .cloned()
    }

    fn insert(&self, record: CatalogRecord) -> Result<()> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if records.contains_key(&record.filename) {
            return Err(FinderError::duplicate(record.filename));
        }
        records.insert(record.filename.clone(), record);
        Ok(())
    }
}

// ============================================================================
// JSON file catalog
// ============================================================================

/// Catalog persisted as a JSON array of records.
///
/// The whole file is loaded on open and rewritten (via a temporary file and
/// rename) after every insert.
#[derive(Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
    records: RwLock<IndexMap<String, CatalogRecord>>,
}

impl JsonFileCatalog {
    /// Open a catalog file. A missing file is an empty catalog.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| FinderError::io(&path, e))?;
            let list: Vec<CatalogRecord> = serde_json::from_str(&content).map_err(|e| {
                FinderError::config(format!("catalog {} is corrupt: {e}", path.display()))
            })?;
            let mut map = IndexMap::with_capacity(list.len());
            for record in list {
                if map.contains_key(&record.filename) {
                    tracing::warn!(
                        "Duplicate catalog entry for {} in {}, keeping the first",
                        record.filename,
                        path.display()
                    );
                    continue;
                }
                map.insert(record.filename.clone(), record);
            }
            map
        } else {
            IndexMap::new()
        };
        tracing::debug!("Opened catalog {} with {} records", path.display(), records.len());
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, records: &IndexMap<String, CatalogRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| FinderError::io(parent, e))?;
            }
        }
        let list: Vec<&CatalogRecord> = records.values().collect();
        let json = serde_json::to_string_pretty(&list)
            .map_err(|e| FinderError::config(format!("cannot serialize catalog: {e}")))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| FinderError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| FinderError::io(&self.path, e))?;
        Ok(())
    }
}

impl Catalog for JsonFileCatalog {
    fn list_records(&self, filter: Option<&CatalogFilter>) -> Vec<CatalogRecord> {
        filtered(
            &self.records.read().unwrap_or_else(PoisonError::into_inner),
            filter,
        )
    }

    fn get_record(&self, filename: &str) -> Option<CatalogRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(filename)
            .cloned()
    }

    fn insert(&self, record: CatalogRecord) -> Result<()> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        if records.contains_key(&record.filename) {
            return Err(FinderError::duplicate(record.filename));
        }
        let filename = record.filename.clone();
        records.insert(filename.clone(), record);
        if let Err(e) = self.persist(&records) {
            records.shift_remove(&filename);
            return Err(e);
        }
        Ok(())
    }
}
