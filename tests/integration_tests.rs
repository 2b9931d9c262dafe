//! Integration tests for sbom-finder
//!
//! These tests run the normalizer, diff and similarity engines, ingest and
//! corpus statistics end to end against the fixture documents.

use sbom_finder::{
    ingest::{IngestMetadata, Ingestor},
    model::{CatalogFilter, CatalogRecord, SbomDocument},
    parsers::{normalize, resolve_dialect, Dialect},
    search::{search_components, search_stored},
    stats::{Platform, SkipReason, StatisticsEngine},
    store::{Catalog, DocumentStore, FsDocumentStore, JsonFileCatalog},
    DiffEngine, TermSimilarityEngine,
};
use serde_json::json;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

const CDX_FIXTURE: &str = "cyclonedx/minimal.cdx.json";
const SPDX_FIXTURE: &str = "spdx/minimal.spdx.json";
const SYFT_FIXTURE: &str = "syft/minimal.syft.json";

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load_fixture(name: &str) -> SbomDocument {
    let bytes = std::fs::read(fixture_path(name)).expect("fixture should exist");
    SbomDocument::from_bytes(name, &bytes).expect("fixture should parse")
}

// ============================================================================
// Normalization Tests
// ============================================================================

mod normalization_tests {
    use super::*;

    #[test]
    fn test_cyclonedx_fixture() {
        let doc = load_fixture(CDX_FIXTURE);
        assert_eq!(doc.dialect(), Dialect::CycloneDx);

        let components = doc.normalized();
        let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["lodash", "express", "left-pad"]);
        assert_eq!(components[2].licenses, vec!["WTFPL OR MIT"]);
        assert_eq!(doc.unique_license_count(), 2);
    }

    #[test]
    fn test_spdx_fixture() {
        let doc = load_fixture(SPDX_FIXTURE);
        assert_eq!(doc.dialect(), Dialect::Spdx);

        let components = doc.normalized();
        assert_eq!(components.len(), 2);

        let lodash = &components[0];
        assert_eq!(lodash.version.as_deref(), Some("4.17.21"));
        assert_eq!(lodash.purl.as_deref(), Some("pkg:npm/lodash@4.17.21"));
        assert_eq!(lodash.supplier.as_deref(), Some("OpenJS Foundation"));

        // empty licenseConcluded falls through to licenseDeclared
        assert_eq!(components[1].licenses, vec!["MIT"]);
    }

    #[test]
    fn test_syft_fixture() {
        let doc = load_fixture(SYFT_FIXTURE);
        assert_eq!(doc.dialect(), Dialect::Syft);

        let components = doc.normalized();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].licenses, vec!["Apache-2.0"]);
        assert_eq!(components[1].licenses, vec!["Zlib"]);
    }

    #[test]
    fn test_unknown_document_has_no_components() {
        let doc = json!({"name": "not an sbom", "items": [1, 2, 3]});
        assert_eq!(resolve_dialect(&doc), Dialect::Unknown);
        assert!(normalize(&doc).is_empty());
    }

    #[test]
    fn test_cyclonedx_wins_when_keys_overlap() {
        let doc = json!({
            "components": [{"name": "a"}],
            "packages": [{"name": "b"}, {"name": "c"}]
        });
        assert_eq!(resolve_dialect(&doc), Dialect::CycloneDx);
        assert_eq!(normalize(&doc).len(), 1);
    }
}

// ============================================================================
// Diff Tests
// ============================================================================

mod diff_tests {
    use super::*;

    #[test]
    fn test_fixture_against_itself() {
        let doc = load_fixture(CDX_FIXTURE);
        let result = DiffEngine::new().diff(&doc, &doc);
        assert!(result.is_identical());
        assert_eq!(result.summary.common, 3);
    }

    #[test]
    fn test_single_artifact_added() {
        let first = SbomDocument::new(
            "a.json",
            json!({"artifacts": [{"name": "libx", "version": "1.0"}]}),
        );
        let second = SbomDocument::new(
            "b.json",
            json!({"artifacts": [
                {"name": "libx", "version": "1.0"},
                {"name": "liby", "version": "2.0"}
            ]}),
        );

        let result = DiffEngine::new().diff(&first, &second);
        assert!(result.only_in_first.is_empty());
        assert_eq!(result.only_in_second, vec![json!({"name": "liby", "version": "2.0"})]);
        assert_eq!(result.summary.common, 1);
    }

    #[test]
    fn test_key_order_is_irrelevant() {
        let first = json!({"components": [{"name": "lodash", "version": "4.17.21"}]});
        let second = json!({"components": [{"version": "4.17.21", "name": "lodash"}]});
        assert!(DiffEngine::new().diff_values(&first, &second).is_identical());
    }

    #[test]
    fn test_cross_dialect_entries_differ() {
        // Same packages, different field spellings: structural diff sees
        // everything as changed.
        let cdx = load_fixture(CDX_FIXTURE);
        let spdx = load_fixture(SPDX_FIXTURE);
        let result = DiffEngine::new().diff(&cdx, &spdx);
        assert_eq!(result.only_in_first.len(), 3);
        assert_eq!(result.only_in_second.len(), 2);
        assert_eq!(result.summary.common, 0);
    }
}

// ============================================================================
// Similarity Tests
// ============================================================================

mod similarity_tests {
    use super::*;

    #[test]
    fn test_identical_fixture_scores_one() {
        let doc = load_fixture(CDX_FIXTURE);
        let result = TermSimilarityEngine::new().compare(&doc, &doc);
        assert!((result.similarity_score - 1.0).abs() < f64::EPSILON);
        assert!(result.unique_to_first.is_empty());
        assert!(result.unique_to_second.is_empty());
    }

    #[test]
    fn test_cross_dialect_shares_terms() {
        let cdx = load_fixture(CDX_FIXTURE);
        let spdx = load_fixture(SPDX_FIXTURE);
        let result = TermSimilarityEngine::new().compare(&cdx, &spdx);

        assert!(result.similarity_score > 0.0);
        assert!(result.similarity_score < 1.0);
        assert!(result.common_terms.contains_key("lodash"));
        assert!(result.common_terms.contains_key("express"));
        assert!(!result.unique_to_second.is_empty());
    }

    #[test]
    fn test_score_is_symmetric() {
        let cdx = load_fixture(CDX_FIXTURE);
        let syft = load_fixture(SYFT_FIXTURE);
        let engine = TermSimilarityEngine::new();
        let forward = engine.compare(&cdx, &syft).similarity_score;
        let backward = engine.compare(&syft, &cdx).similarity_score;
        assert!((forward - backward).abs() < 1e-12);
    }
}

// ============================================================================
// Corpus Tests
// ============================================================================

mod corpus_tests {
    use super::*;
    use tempfile::TempDir;

    struct Corpus {
        dir: TempDir,
        catalog: JsonFileCatalog,
        store: FsDocumentStore,
    }

    /// Import the three fixtures into a fresh on-disk corpus.
    fn imported_corpus() -> Corpus {
        let dir = TempDir::new().unwrap();
        let incoming = dir.path().join("incoming");
        std::fs::create_dir(&incoming).unwrap();
        for fixture in [CDX_FIXTURE, SPDX_FIXTURE, SYFT_FIXTURE] {
            let path = fixture_path(fixture);
            std::fs::copy(&path, incoming.join(path.file_name().unwrap())).unwrap();
        }

        let catalog = JsonFileCatalog::open(dir.path().join("catalog.json")).unwrap();
        let store = FsDocumentStore::new([dir.path().join("sboms")]);
        let summary = Ingestor::new(&catalog, &store).import_dir(&incoming).unwrap();
        assert_eq!(summary.imported.len(), 3);
        assert!(!summary.has_failures());

        Corpus {
            dir,
            catalog,
            store,
        }
    }

    #[test]
    fn test_import_extracts_metadata() {
        let corpus = imported_corpus();
        let record = corpus.catalog.get_record("minimal.cdx.json").unwrap();
        assert_eq!(record.app_name, "test-app");
        assert_eq!(record.category.as_deref(), Some("Developer Tools"));
        assert_eq!(record.operating_system.as_deref(), Some("Linux"));
        assert_eq!(record.supplier.as_deref(), Some("Acme Corp"));
        assert_eq!(record.total_components, 3);
        assert_eq!(record.unique_licenses, 2);
        assert!(corpus.store.exists("minimal.cdx.json"));
    }

    #[test]
    fn test_reimport_skips_cataloged_files() {
        let corpus = imported_corpus();
        let incoming = corpus.dir.path().join("incoming");
        let again = Ingestor::new(&corpus.catalog, &corpus.store)
            .import_dir(&incoming)
            .unwrap();
        assert!(again.imported.is_empty());
        assert_eq!(again.skipped.len(), 3);
    }

    #[test]
    fn test_catalog_survives_reopen() {
        let corpus = imported_corpus();
        let reopened = JsonFileCatalog::open(corpus.catalog.path()).unwrap();
        let names: Vec<String> = reopened
            .list_records(None)
            .into_iter()
            .map(|r| r.filename)
            .collect();
        assert_eq!(
            names,
            vec!["minimal.cdx.json", "minimal.spdx.json", "minimal.syft.json"]
        );
    }

    #[test]
    fn test_stats_with_missing_document() {
        let corpus = imported_corpus();
        let mut ghost = CatalogRecord::new("ghost.json", "ghost");
        ghost.operating_system = Some("Windows 11".to_string());
        ghost.total_components = 99;
        corpus.catalog.insert(ghost).unwrap();

        let stats = StatisticsEngine::new().compute(&corpus.catalog, &corpus.store, None);
        assert_eq!(stats.total_sboms, 4);
        assert_eq!(stats.readable_sboms, 3);
        assert_eq!(stats.total_components, 7);
        assert!((stats.average_components_per_sbom - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.os_distribution["Windows 11"], 1);
        assert_eq!(stats.license_distribution.get_index(0).unwrap().0, "MIT");

        assert!(stats.has_partial_failure());
        assert_eq!(stats.skipped.len(), 1);
        assert_eq!(stats.skipped[0].filename, "ghost.json");
        assert_eq!(stats.skipped[0].reason, SkipReason::Missing);

        let windows = &stats.platforms[&Platform::Windows];
        assert_eq!(windows.count, 1);
        assert_eq!(windows.readable, 0);
        assert_eq!(windows.average_components, 0.0);

        let linux = &stats.platforms[&Platform::Linux];
        assert_eq!(linux.count, 1);
        assert_eq!(linux.total_components, 3);
    }

    #[test]
    fn test_filtered_stats() {
        let corpus = imported_corpus();
        let filter = CatalogFilter {
            operating_system: Some("linux".to_string()),
            ..CatalogFilter::default()
        };
        let stats = StatisticsEngine::new().compute(&corpus.catalog, &corpus.store, Some(&filter));
        assert_eq!(stats.total_sboms, 1);
        assert_eq!(stats.total_components, 3);
    }

    #[test]
    fn test_upload_with_explicit_metadata() {
        let corpus = imported_corpus();
        let bytes = std::fs::read(fixture_path(SYFT_FIXTURE)).unwrap();
        let meta = IngestMetadata {
            app_name: Some("ubuntu-base".to_string()),
            operating_system: Some("Linux".to_string()),
            ..IngestMetadata::default()
        };
        let record = Ingestor::new(&corpus.catalog, &corpus.store)
            .upload("ubuntu_base_sbom.json", &bytes, meta)
            .unwrap();
        assert_eq!(record.app_name, "ubuntu-base");
        assert_eq!(record.total_components, 2);

        let err = Ingestor::new(&corpus.catalog, &corpus.store)
            .upload("ubuntu_base_sbom.json", &bytes, IngestMetadata::default())
            .unwrap_err();
        assert!(err.to_string().contains("ubuntu_base_sbom.json"));
    }

    #[test]
    fn test_diff_stored_documents() {
        let corpus = imported_corpus();
        let result = DiffEngine::new()
            .diff_stored(&corpus.store, "minimal.cdx.json", "minimal.cdx.json")
            .unwrap();
        assert!(result.is_identical());

        let err = DiffEngine::new()
            .diff_stored(&corpus.store, "minimal.cdx.json", "ghost.json")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_search_stored_document() {
        let corpus = imported_corpus();
        let hits = search_stored(&corpus.store, "minimal.syft.json", "OPENSSL").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["name"], "openssl");
    }
}

// ============================================================================
// Search Tests
// ============================================================================

mod search_tests {
    use super::*;

    #[test]
    fn test_search_matches_any_field() {
        let doc = load_fixture(SYFT_FIXTURE);
        // "deb" appears in both artifacts' type field
        let hits = search_components(&doc.content, "deb").unwrap();
        assert_eq!(hits.len(), 2);

        let hits = search_components(&doc.content, "zlib").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["version"], "1.2.11");
    }

    #[test]
    fn test_search_without_match() {
        let doc = load_fixture(SPDX_FIXTURE);
        assert!(search_components(&doc.content, "react").unwrap().is_empty());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let doc = load_fixture(CDX_FIXTURE);
        assert!(search_components(&doc.content, "   ").is_err());
    }
}
