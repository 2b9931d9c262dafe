//! Ingest command handlers: upload and import.

use super::{emit, Workspace};
use crate::config::AppConfig;
use crate::ingest::{ImportSummary, IngestMetadata, Ingestor};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Ingest one SBOM file and report the created record.
pub fn run_upload(config: &AppConfig, path: &Path, metadata: IngestMetadata) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let record = Ingestor::new(&workspace.catalog, &workspace.store)
        .with_filename_inference(config.ingest.infer_from_filename)
        .upload_file(path, metadata)
        .with_context(|| format!("failed to upload {}", path.display()))?;
    emit(&config.output, |reporter| {
        reporter.records_report(std::slice::from_ref(&record))
    })
}

/// Bulk import every `*.json` file of the given directories.
pub fn run_import(config: &AppConfig, dirs: &[PathBuf]) -> Result<()> {
    let workspace = Workspace::from_config(config)?;
    let ingestor = Ingestor::new(&workspace.catalog, &workspace.store)
        .with_filename_inference(config.ingest.infer_from_filename)
        .excluding(workspace.catalog.path());

    let mut summary = ImportSummary::default();
    for dir in dirs {
        let part = ingestor
            .import_dir(dir)
            .with_context(|| format!("failed to import from {}", dir.display()))?;
        summary.merge(part);
    }
    emit(&config.output, |reporter| reporter.import_report(&summary))
}
