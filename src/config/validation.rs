//! Configuration validation for sbom-finder.

use super::types::{AppConfig, OutputConfig, StorageConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.storage.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for StorageConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.document_dirs.is_empty() {
            errors.push(ConfigError {
                field: "storage.document_dirs".to_string(),
                message: "At least one document directory is required".to_string(),
            });
        }
        for (i, dir) in self.document_dirs.iter().enumerate() {
            if dir.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: format!("storage.document_dirs[{i}]"),
                    message: "Directory path must not be empty".to_string(),
                });
            }
        }
        if self.catalog_path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "storage.catalog_path".to_string(),
                message: "Catalog path must not be empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }
        errors
    }
}
