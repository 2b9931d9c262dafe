//! Default values for sbom-finder configuration.

/// Default document directory.
pub const DEFAULT_DOCUMENT_DIR: &str = "./sbom_files";

/// Default catalog file.
pub const DEFAULT_CATALOG_PATH: &str = "./sbom_files/catalog.json";

/// Application directory name under the user config dir.
pub const CONFIG_DIR_NAME: &str = "sbom-finder";

#[cfg(test)]
mod tests {
    use super::super::types::AppConfig;
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(
            config.storage.document_dirs,
            vec![PathBuf::from(DEFAULT_DOCUMENT_DIR)]
        );
        assert_eq!(config.storage.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert!(config.ingest.infer_from_filename);
        assert!(!config.behavior.fail_on_change);
    }
}
