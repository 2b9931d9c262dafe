//! Injected SBOM generation capability.

use crate::error::Result;
use std::path::Path;

/// Turns a software artifact (an executable, an image, a directory) into
/// SBOM document bytes.
///
/// The crate ships no implementation; wrap an external scanner such as Syft
/// and hand it to [`crate::ingest::Ingestor::generate_and_upload`].
/// Implementations report their failures as [`crate::FinderError::Generator`].
pub trait SbomGenerator: Send + Sync {
    /// Produce an SBOM for the artifact at `artifact`.
    fn generate(&self, artifact: &Path) -> Result<Vec<u8>>;
}

/// Catalog filename for a generated SBOM: `<artifact file name>_sbom.json`.
#[must_use]
pub fn generated_filename(artifact: &Path) -> String {
    let name = artifact
        .file_name()
        .map_or_else(|| "artifact".into(), |n| n.to_string_lossy());
    format!("{name}_sbom.json")
}
