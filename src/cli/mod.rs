//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler opens the
//! corpus described by the configuration, runs one engine, and writes the
//! rendered report to the configured output target.

mod catalog;
mod compare;
mod ingest;
mod stats;

pub use catalog::{run_list, run_search, run_show};
pub use compare::{run_compare_terms, run_diff};
pub use ingest::{run_import, run_upload};
pub use stats::run_stats;

use crate::config::{AppConfig, OutputConfig, StorageConfig};
use crate::reports::{
    auto_detect_format, create_reporter, should_use_color, write_output, OutputTarget, ReportError,
    ReportGenerator,
};
use crate::store::{FsDocumentStore, JsonFileCatalog};
use anyhow::{Context, Result};

/// Process exit codes
pub mod exit_codes {
    /// Success (or no differences found)
    pub const SUCCESS: i32 = 0;
    /// A diff found differences and `--fail-on-change` was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// The catalog and document store a command operates on.
pub struct Workspace {
    pub catalog: JsonFileCatalog,
    pub store: FsDocumentStore,
}

impl Workspace {
    /// Open the catalog file and document directories from configuration.
    pub fn open(storage: &StorageConfig) -> Result<Self> {
        let catalog = JsonFileCatalog::open(&storage.catalog_path).with_context(|| {
            format!("failed to open catalog {}", storage.catalog_path.display())
        })?;
        let store = FsDocumentStore::new(storage.document_dirs.iter().cloned());
        tracing::debug!(
            "Workspace: catalog {}, document dirs {:?}",
            storage.catalog_path.display(),
            store.dirs()
        );
        Ok(Self { catalog, store })
    }

    /// Open the workspace of an application config.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::open(&config.storage)
    }
}

/// Render with the reporter the output config selects and write the result.
fn emit<F>(output: &OutputConfig, render: F) -> Result<()>
where
    F: FnOnce(&dyn ReportGenerator) -> std::result::Result<String, ReportError>,
{
    let target = OutputTarget::from_option(output.file.clone());
    let format = auto_detect_format(output.format, &target);
    let use_color = !output.no_color && should_use_color(&target);
    let reporter = create_reporter(format, use_color);
    let content = render(reporter.as_ref())?;
    write_output(&content, &target)
}
