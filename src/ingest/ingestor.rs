//! Upload and bulk import.

use super::{generated_filename, ImportFailure, ImportSummary, IngestMetadata, SbomGenerator};
use crate::error::{FinderError, Result};
use crate::model::{CatalogRecord, SbomDocument};
use crate::parsers::extract_metadata;
use crate::store::{validate_filename, Catalog, DocumentStore};
use std::path::{Path, PathBuf};

/// Writes documents and their catalog records as one unit.
pub struct Ingestor<'a> {
    catalog: &'a dyn Catalog,
    store: &'a dyn DocumentStore,
    infer_from_filename: bool,
    excluded: Vec<PathBuf>,
}

impl<'a> Ingestor<'a> {
    /// Create an ingestor over a catalog and a document store.
    pub fn new(catalog: &'a dyn Catalog, store: &'a dyn DocumentStore) -> Self {
        Self {
            catalog,
            store,
            infer_from_filename: true,
            excluded: Vec::new(),
        }
    }

    /// Enable or disable OS / binary-type inference from filename keywords.
    #[must_use]
    pub const fn with_filename_inference(mut self, enabled: bool) -> Self {
        self.infer_from_filename = enabled;
        self
    }

    /// Never import `path` during a bulk import, e.g. the catalog's own file
    /// when it lives inside an imported directory.
    #[must_use]
    pub fn excluding(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded.push(path.into());
        self
    }

    /// Ingest one document.
    ///
    /// Fails with [`FinderError::DuplicateFilename`] when the filename is
    /// already cataloged and with [`FinderError::InvalidDocument`] when the
    /// bytes are not JSON. Nothing is written in either case.
    pub fn upload(&self, filename: &str, bytes: &[u8], metadata: IngestMetadata) -> Result<CatalogRecord> {
        validate_filename(filename)?;
        if self.catalog.contains(filename) {
            return Err(FinderError::duplicate(filename));
        }

        let doc = SbomDocument::from_bytes(filename, bytes)?;
        let extracted = extract_metadata(filename, &doc.content, self.infer_from_filename);
        let mut record = metadata.into_record(filename, extracted);
        record.total_components = doc.component_count();
        record.unique_licenses = doc.unique_license_count();

        self.write_document(filename, bytes)?;
        self.catalog.insert(record.clone())?;

        tracing::info!(
            "Ingested {} ({}, {} components, {} licenses)",
            filename,
            doc.dialect(),
            record.total_components,
            record.unique_licenses
        );
        Ok(record)
    }

    /// Ingest a file from disk under its own file name.
    pub fn upload_file(&self, path: &Path, metadata: IngestMetadata) -> Result<CatalogRecord> {
        let filename = file_name(path)?;
        let bytes = std::fs::read(path).map_err(|e| FinderError::io(path, e))?;
        self.upload(&filename, &bytes, metadata)
    }

    /// Import every `*.json` file in `dir`, in filename order.
    ///
    /// Files already cataloged are skipped; per-file failures are collected
    /// in the summary. Only failing to list the directory is an error.
    pub fn import_dir(&self, dir: &Path) -> Result<ImportSummary> {
        let excluded: Vec<PathBuf> = self.excluded.iter().map(|p| canonical(p)).collect();
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| FinderError::io(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .filter(|p| !excluded.contains(&canonical(p)))
            .collect();
        paths.sort();
        tracing::debug!("Found {} JSON files in {}", paths.len(), dir.display());

        let mut summary = ImportSummary::default();
        for path in paths {
            let filename = match file_name(&path) {
                Ok(name) => name,
                Err(e) => {
                    summary.failed.push(ImportFailure {
                        filename: path.display().to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            if self.catalog.contains(&filename) {
                tracing::debug!("Skipping {}: already cataloged", filename);
                summary.skipped.push(filename);
                continue;
            }
            match self.upload_file(&path, IngestMetadata::default()) {
                Ok(_) => summary.imported.push(filename),
                Err(e) => summary.failed.push(ImportFailure {
                    filename,
                    reason: e.to_string(),
                }),
            }
        }

        summary.log_summary();
        Ok(summary)
    }

    /// Generate an SBOM for an artifact and ingest it as
    /// `<artifact file name>_sbom.json`.
    pub fn generate_and_upload(
        &self,
        generator: &dyn SbomGenerator,
        artifact: &Path,
        metadata: IngestMetadata,
    ) -> Result<CatalogRecord> {
        let filename = generated_filename(artifact);
        if self.catalog.contains(&filename) {
            return Err(FinderError::duplicate(filename));
        }
        tracing::debug!("Generating SBOM for {}", artifact.display());
        let bytes = generator.generate(artifact)?;
        self.upload(&filename, &bytes, metadata)
    }

    /// Write a document, adopting an identical uncataloged copy already in
    /// the store.
    fn write_document(&self, filename: &str, bytes: &[u8]) -> Result<()> {
        match self.store.read(filename)? {
            Some(existing) if existing == bytes => {
                tracing::debug!("{} already stored with identical content", filename);
                Ok(())
            }
            Some(_) => Err(FinderError::duplicate(filename)),
            None => self.store.write(filename, bytes),
        }
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| FinderError::validation(format!("no usable file name in {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FsDocumentStore, JsonFileCatalog, MemoryCatalog, MemoryDocumentStore};
    use tempfile::TempDir;

    const CDX: &str = r#"{
        "bomFormat": "CycloneDX",
        "metadata": {"component": {"name": "Firefox", "version": "125.0",
            "supplier": {"name": "Mozilla"},
            "properties": [{"name": "category", "value": "Browsers"}]}},
        "components": [
            {"name": "nss", "licenses": [{"license": {"id": "MPL-2.0"}}]},
            {"name": "zlib", "licenses": [{"license": {"id": "Zlib"}}]},
            {"name": "sqlite"}
        ]
    }"#;

    struct FixedGenerator(&'static str);

    impl SbomGenerator for FixedGenerator {
        fn generate(&self, _artifact: &Path) -> Result<Vec<u8>> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    struct FailingGenerator;

    impl SbomGenerator for FailingGenerator {
        fn generate(&self, artifact: &Path) -> Result<Vec<u8>> {
            Err(FinderError::Generator(format!("cannot scan {}", artifact.display())))
        }
    }

    #[test]
    fn test_upload_computes_counters() {
        let catalog = MemoryCatalog::new();
        let store = MemoryDocumentStore::new();
        let ingestor = Ingestor::new(&catalog, &store);

        let record = ingestor
            .upload("firefox_windows_sbom.json", CDX.as_bytes(), IngestMetadata::default())
            .unwrap();
        assert_eq!(record.total_components, 3);
        // MPL-2.0, Zlib, Unknown
        assert_eq!(record.unique_licenses, 3);
        assert_eq!(record.app_name, "Firefox");
        assert_eq!(record.supplier.as_deref(), Some("Mozilla"));
        assert_eq!(record.category.as_deref(), Some("Browsers"));
        assert_eq!(record.operating_system.as_deref(), Some("windows"));
        assert!(store.exists("firefox_windows_sbom.json"));
        assert_eq!(catalog.get_record("firefox_windows_sbom.json"), Some(record));
    }

    #[test]
    fn test_upload_duplicate_rejected() {
        let catalog = MemoryCatalog::new();
        let store = MemoryDocumentStore::new();
        let ingestor = Ingestor::new(&catalog, &store);
        ingestor.upload("a.json", CDX.as_bytes(), IngestMetadata::default()).unwrap();

        let err = ingestor
            .upload("a.json", b"{}", IngestMetadata::default())
            .unwrap_err();
        assert!(matches!(err, FinderError::DuplicateFilename { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_upload_invalid_writes_nothing() {
        let catalog = MemoryCatalog::new();
        let store = MemoryDocumentStore::new();
        let ingestor = Ingestor::new(&catalog, &store);
        let err = ingestor
            .upload("bad.json", b"not json", IngestMetadata::default())
            .unwrap_err();
        assert!(err.is_invalid_document());
        assert!(!store.exists("bad.json"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_upload_conflicting_stored_content() {
        let catalog = MemoryCatalog::new();
        let store = MemoryDocumentStore::new().with_document("a.json", "{}");
        let ingestor = Ingestor::new(&catalog, &store);
        let err = ingestor
            .upload("a.json", CDX.as_bytes(), IngestMetadata::default())
            .unwrap_err();
        assert!(matches!(err, FinderError::DuplicateFilename { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_import_dir() {
        let sbom_dir = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        std::fs::write(source.path().join("b_linux.json"), CDX).unwrap();
        std::fs::write(source.path().join("a_android.json"), CDX).unwrap();
        std::fs::write(source.path().join("broken.json"), "{").unwrap();
        std::fs::write(source.path().join("notes.txt"), "ignored").unwrap();

        let catalog = JsonFileCatalog::open(sbom_dir.path().join("catalog.json")).unwrap();
        let store = FsDocumentStore::from(sbom_dir.path());
        catalog.insert(CatalogRecord::new("b_linux.json", "b")).unwrap();

        let summary = Ingestor::new(&catalog, &store).import_dir(source.path()).unwrap();
        assert_eq!(summary.imported, vec!["a_android.json".to_string()]);
        assert_eq!(summary.skipped, vec!["b_linux.json".to_string()]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].filename, "broken.json");
        assert_eq!(summary.total(), 3);
        assert!(sbom_dir.path().join("a_android.json").is_file());

        // second run imports nothing new
        let again = Ingestor::new(&catalog, &store).import_dir(source.path()).unwrap();
        assert!(again.imported.is_empty());
        assert_eq!(again.skipped.len(), 2);
    }

    #[test]
    fn test_import_adopts_identical_stored_copy() {
        let sbom_dir = TempDir::new().unwrap();
        std::fs::write(sbom_dir.path().join("x_ios.json"), CDX).unwrap();
        let catalog = MemoryCatalog::new();
        let store = FsDocumentStore::from(sbom_dir.path());

        let summary = Ingestor::new(&catalog, &store).import_dir(sbom_dir.path()).unwrap();
        assert_eq!(summary.imported, vec!["x_ios.json".to_string()]);
        assert_eq!(
            catalog.get_record("x_ios.json").unwrap().operating_system.as_deref(),
            Some("ios")
        );
    }

    #[test]
    fn test_import_skips_excluded_catalog_file() {
        let sbom_dir = TempDir::new().unwrap();
        let catalog_path = sbom_dir.path().join("catalog.json");
        let catalog = JsonFileCatalog::open(&catalog_path).unwrap();
        let store = FsDocumentStore::from(sbom_dir.path());
        Ingestor::new(&catalog, &store)
            .upload("a_linux.json", CDX.as_bytes(), IngestMetadata::default())
            .unwrap();
        assert!(catalog_path.is_file());

        let summary = Ingestor::new(&catalog, &store)
            .excluding(&catalog_path)
            .import_dir(sbom_dir.path())
            .unwrap();
        assert!(summary.imported.is_empty());
        assert_eq!(summary.skipped, vec!["a_linux.json".to_string()]);
        assert!(!catalog.contains("catalog.json"));
    }

    #[test]
    fn test_import_missing_dir() {
        let catalog = MemoryCatalog::new();
        let store = MemoryDocumentStore::new();
        let result = Ingestor::new(&catalog, &store).import_dir(Path::new("/nonexistent/sboms"));
        assert!(matches!(result, Err(FinderError::Io { .. })));
    }

    #[test]
    fn test_generate_and_upload() {
        let catalog = MemoryCatalog::new();
        let store = MemoryDocumentStore::new();
        let ingestor = Ingestor::new(&catalog, &store);

        let record = ingestor
            .generate_and_upload(&FixedGenerator(CDX), Path::new("slack.exe"), IngestMetadata::default())
            .unwrap();
        assert_eq!(record.filename, "slack.exe_sbom.json");
        assert_eq!(record.total_components, 3);

        let err = ingestor
            .generate_and_upload(&FailingGenerator, Path::new("zoom.exe"), IngestMetadata::default())
            .unwrap_err();
        assert!(matches!(err, FinderError::Generator(_)));
        assert_eq!(catalog.len(), 1);
    }
}
