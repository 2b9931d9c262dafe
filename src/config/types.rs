//! Configuration types for sbom-finder.

use super::defaults::{DEFAULT_CATALOG_PATH, DEFAULT_DOCUMENT_DIR};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files, with CLI arguments overriding file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where documents and the catalog live
    pub storage: StorageConfig,
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Ingest behavior
    pub ingest: IngestConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Replace the document search directories.
    pub fn document_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.config.storage.document_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the catalog file path.
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage.catalog_path = path.into();
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable or disable filename-based metadata inference.
    pub const fn infer_from_filename(mut self, enabled: bool) -> Self {
        self.config.ingest.infer_from_filename = enabled;
        self
    }

    /// Exit non-zero when a diff finds differences.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Document and catalog locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct StorageConfig {
    /// Directories searched in order for a document; uploads go to the first
    pub document_dirs: Vec<PathBuf>,
    /// JSON file holding the catalog records
    pub catalog_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_dirs: vec![PathBuf::from(DEFAULT_DOCUMENT_DIR)],
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
        }
    }
}

/// Ingest configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IngestConfig {
    /// Infer OS and binary type from filename keywords when the document
    /// does not declare them
    pub infer_from_filename: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            infer_from_filename: true,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when a diff finds differences
    pub fail_on_change: bool,
}
