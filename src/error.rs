//! Unified error types for sbom-finder.
//!
//! Pairwise operations (diff, term comparison) surface [`FinderError::NotFound`]
//! and [`FinderError::InvalidDocument`] as distinct variants so callers can
//! tell a missing file apart from one that is present but unparseable.
//! Corpus-wide aggregates never return these for individual documents; they
//! record the failure in the result instead (see [`crate::stats::SkippedDocument`]).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-finder operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FinderError {
    /// A referenced filename has no backing document
    #[error("SBOM not found: {filename}")]
    NotFound { filename: String },

    /// Content is present but not parseable into a structured document
    #[error("Invalid SBOM document {filename}: {reason}")]
    InvalidDocument { filename: String, reason: String },

    /// The catalog already holds a record for this filename
    #[error("File already exists: {filename}")]
    DuplicateFilename { filename: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An injected SBOM generator failed to produce a document
    #[error("SBOM generation failed: {0}")]
    Generator(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl FinderError {
    /// Create a not-found error for a filename
    pub fn not_found(filename: impl Into<String>) -> Self {
        Self::NotFound {
            filename: filename.into(),
        }
    }

    /// Create an invalid-document error
    pub fn invalid_document(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate-filename error
    pub fn duplicate(filename: impl Into<String>) -> Self {
        Self::DuplicateFilename {
            filename: filename.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error means the document does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error means the document exists but could not be parsed.
    #[must_use]
    pub const fn is_invalid_document(&self) -> bool {
        matches!(self, Self::InvalidDocument { .. })
    }
}

// ============================================================================
// Conversions from external error types
// ============================================================================

impl From<std::io::Error> for FinderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<crate::config::ConfigFileError> for FinderError {
    fn from(err: crate::config::ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}
