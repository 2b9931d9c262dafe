//! Configuration for sbom-finder.
//!
//! - Type-safe configuration structures with defaults for every field
//! - Validation via [`Validatable`]
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.sbom-finder.yaml` file in your project root or
//! `~/.config/sbom-finder/`:
//!
//! ```yaml
//! storage:
//!   document_dirs: [./uploads, ./dataset]
//!   catalog_path: ./uploads/catalog.json
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_CATALOG_PATH, DEFAULT_DOCUMENT_DIR};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, IngestConfig, OutputConfig, StorageConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.sbom-finder.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("\"storage\""));
        assert!(schema.contains("\"document_dirs\""));
        assert!(schema.contains("\"infer_from_filename\""));
    }
}
