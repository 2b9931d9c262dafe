//! Document store implementations.

use crate::error::{FinderError, Result};
use crate::model::SbomDocument;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Byte-level access to stored SBOM documents, keyed by filename.
pub trait DocumentStore: Send + Sync {
    /// Whether a document with this filename exists.
    fn exists(&self, filename: &str) -> bool;

    /// Read a document's bytes, or `None` when it does not exist.
    fn read(&self, filename: &str) -> Result<Option<Vec<u8>>>;

    /// Store a new document. Fails if the filename is already taken.
    fn write(&self, filename: &str, bytes: &[u8]) -> Result<()>;

    /// Read and parse a document.
    ///
    /// Returns [`FinderError::NotFound`] when the document is absent and
    /// [`FinderError::InvalidDocument`] when it is not valid JSON.
    fn load(&self, filename: &str) -> Result<SbomDocument> {
        match self.read(filename)? {
            Some(bytes) => SbomDocument::from_bytes(filename, &bytes),
            None => Err(FinderError::not_found(filename)),
        }
    }
}

/// Reject filenames that could escape the store directory.
pub fn validate_filename(filename: &str) -> Result<()> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\'])
        || filename.contains('\0');
    if invalid {
        return Err(FinderError::validation(format!(
            "invalid SBOM filename '{filename}'"
        )));
    }
    Ok(())
}

// ============================================================================
// Filesystem store
// ============================================================================

/// Documents stored as files in one or more directories.
///
/// Reads search the directories in order; writes always go to the first one.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    dirs: Vec<PathBuf>,
}

impl FsDocumentStore {
    /// Create a store over the given directories (searched in order).
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Directories searched by this store.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Resolve a filename to the first existing path.
    #[must_use]
    pub fn locate(&self, filename: &str) -> Option<PathBuf> {
        if validate_filename(filename).is_err() {
            return None;
        }
        self.dirs
            .iter()
            .map(|dir| dir.join(filename))
            .find(|path| path.is_file())
    }
}

impl DocumentStore for FsDocumentStore {
    fn exists(&self, filename: &str) -> bool {
        self.locate(filename).is_some()
    }

    fn read(&self, filename: &str) -> Result<Option<Vec<u8>>> {
        let Some(path) = self.locate(filename) else {
            tracing::debug!("{} not found in {:?}", filename, self.dirs);
            return Ok(None);
        };
        tracing::debug!("Reading {} from {}", filename, path.display());
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FinderError::io(path, e)),
        }
    }

    fn write(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        validate_filename(filename)?;
        if self.exists(filename) {
            return Err(FinderError::duplicate(filename));
        }
        let dir = self
            .dirs
            .first()
            .ok_or_else(|| FinderError::config("document store has no directories"))?;
        std::fs::create_dir_all(dir).map_err(|e| FinderError::io(dir, e))?;

        let path = dir.join(filename);
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => FinderError::duplicate(filename),
                _ => FinderError::io(&path, e),
            })?;
        file.write_all(bytes).map_err(|e| FinderError::io(&path, e))?;
        tracing::debug!("Stored {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

impl From<&Path> for FsDocumentStore {
    fn from(dir: &Path) -> Self {
        Self::new([dir])
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Documents held in memory; useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    docs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; an existing filename keeps its first content.
    #[must_use]
    pub fn with_document(self, filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.docs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(filename.into())
            .or_insert_with(|| bytes.into());
        self
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn exists(&self, filename: &str) -> bool {
        self.docs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(filename)
    }

    fn read(&self, filename: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .docs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(filename)
            .cloned())
    }

    fn write(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        validate_filename(filename)?;
        let mut docs = self.docs.write().unwrap_or_else(PoisonError::into_inner);
        if docs.contains_key(filename) {
            return Err(FinderError::duplicate(filename));
        }
        docs.insert(filename.to_string(), bytes.to_vec());
        Ok(())
    }
}
