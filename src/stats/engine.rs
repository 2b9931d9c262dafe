//! Aggregate statistics engine implementation.

use super::distribution::Counter;
use super::platform::{Platform, PlatformStats};
use super::{CorpusStatistics, SkipReason, SkippedDocument};
use crate::error::FinderError;
use crate::model::{CatalogFilter, CatalogRecord, SbomDocument};
use crate::parsers::{component_licenses, extract_components};
use crate::store::{Catalog, DocumentStore};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Cap for supplier, manufacturer and license distributions.
pub const TOP_DISTRIBUTION_LIMIT: usize = 10;

/// Cap for per-platform license distributions.
pub const TOP_PLATFORM_LICENSE_LIMIT: usize = 5;

/// Content-derived figures of one readable document.
#[derive(Debug, Default)]
struct DocumentFigures {
    components: usize,
    unique_licenses: usize,
    licenses: Counter,
}

impl DocumentFigures {
    fn from_document(doc: &SbomDocument) -> Self {
        let mut licenses = Counter::new();
        let mut distinct = HashSet::new();
        let components = extract_components(&doc.content);
        for component in components {
            for license in component_licenses(component) {
                licenses.add(&license);
                distinct.insert(license);
            }
        }
        Self {
            components: components.len(),
            unique_licenses: distinct.len(),
            licenses,
        }
    }
}

/// Per-platform accumulator.
#[derive(Debug, Default)]
struct PlatformAccumulator {
    count: usize,
    readable: usize,
    total_components: usize,
    binary_types: Counter,
    licenses: Counter,
}

impl PlatformAccumulator {
    fn finish(self) -> PlatformStats {
        PlatformStats {
            count: self.count,
            readable: self.readable,
            total_components: self.total_components,
            average_components: average(self.total_components, self.readable),
            binary_type_distribution: self.binary_types.most_common(None),
            license_distribution: self.licenses.most_common(Some(TOP_PLATFORM_LICENSE_LIMIT)),
        }
    }
}

/// Computes corpus-wide statistics.
///
/// Stored `total_components` / `unique_licenses` counters on catalog records
/// are never trusted; every figure is recomputed from the documents that can
/// be read. Unreadable documents are listed in
/// [`CorpusStatistics::skipped`] and still count toward `total_sboms`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Create a new statistics engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute statistics over the catalog records matching `filter`.
    #[must_use]
    pub fn compute(
        &self,
        catalog: &dyn Catalog,
        store: &dyn DocumentStore,
        filter: Option<&CatalogFilter>,
    ) -> CorpusStatistics {
        let records = catalog.list_records(filter);
        tracing::debug!(
            "Computing statistics over {} records (filter: {})",
            records.len(),
            filter.map_or_else(|| "*".to_string(), CatalogFilter::description)
        );
        self.compute_records(&records, store)
    }

    /// Compute statistics over an explicit record set.
    #[must_use]
    pub fn compute_records(
        &self,
        records: &[CatalogRecord],
        store: &dyn DocumentStore,
    ) -> CorpusStatistics {
        let mut os = Counter::new();
        let mut categories = Counter::new();
        let mut binary_types = Counter::new();
        let mut suppliers = Counter::new();
        let mut manufacturers = Counter::new();
        let mut licenses = Counter::new();
        let mut platforms: IndexMap<Platform, PlatformAccumulator> = Platform::ALL
            .into_iter()
            .map(|p| (p, PlatformAccumulator::default()))
            .collect();

        let mut readable = 0usize;
        let mut total_components = 0usize;
        let mut unique_license_sum = 0usize;
        let mut skipped = Vec::new();

        for record in records {
            os.add(record.os_or_unknown());
            categories.add(record.category_or_unknown());
            binary_types.add(record.binary_type_or_unknown());
            suppliers.add(record.supplier_or_unknown());
            manufacturers.add(record.manufacturer_or_unknown());

            let platform = record
                .operating_system
                .as_deref()
                .and_then(Platform::classify)
                .and_then(|p| platforms.get_mut(&p));

            let figures = match load_figures(store, &record.filename) {
                Ok(figures) => Some(figures),
                Err(skip) => {
                    tracing::warn!(
                        "Skipping {} in statistics: {}",
                        skip.filename,
                        skip.message
                    );
                    skipped.push(skip);
                    None
                }
            };

            if let Some(ref figures) = figures {
                readable += 1;
                total_components += figures.components;
                unique_license_sum += figures.unique_licenses;
                licenses.merge(&figures.licenses);
            }

            if let Some(acc) = platform {
                acc.count += 1;
                acc.binary_types.add(record.binary_type_or_unknown());
                if let Some(ref figures) = figures {
                    acc.readable += 1;
                    acc.total_components += figures.components;
                    acc.licenses.merge(&figures.licenses);
                }
            }
        }

        let stats = CorpusStatistics {
            total_sboms: records.len(),
            readable_sboms: readable,
            total_components,
            average_components_per_sbom: average(total_components, readable),
            average_unique_licenses: average(unique_license_sum, readable),
            os_distribution: os.most_common(None),
            category_distribution: categories.most_common(None),
            binary_type_distribution: binary_types.most_common(None),
            supplier_distribution: suppliers.most_common(Some(TOP_DISTRIBUTION_LIMIT)),
            manufacturer_distribution: manufacturers.most_common(Some(TOP_DISTRIBUTION_LIMIT)),
            license_distribution: licenses.most_common(Some(TOP_DISTRIBUTION_LIMIT)),
            platforms: platforms
                .into_iter()
                .map(|(p, acc)| (p, acc.finish()))
                .collect(),
            skipped,
        };
        stats.log_summary();
        stats
    }
}

/// Load one document and reduce it to its figures.
fn load_figures(store: &dyn DocumentStore, filename: &str) -> Result<DocumentFigures, SkippedDocument> {
    match store.load(filename) {
        Ok(doc) => Ok(DocumentFigures::from_document(&doc)),
        Err(e) => {
            let reason = match &e {
                FinderError::NotFound { .. } => SkipReason::Missing,
                FinderError::InvalidDocument { .. } => SkipReason::Invalid,
                _ => SkipReason::Unreadable,
            };
            Err(SkippedDocument {
                filename: filename.to_string(),
                reason,
                message: e.to_string(),
            })
        }
    }
}

fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryCatalog, MemoryDocumentStore};

    fn record(filename: &str, os: &str, binary_type: &str) -> CatalogRecord {
        let mut r = CatalogRecord::new(filename, "app");
        r.operating_system = Some(os.to_string());
        r.binary_type = Some(binary_type.to_string());
        r
    }

    const TWO_MIT: &str = r#"{"components": [
        {"name": "a", "licenses": [{"license": {"id": "MIT"}}]},
        {"name": "b", "licenses": [{"license": {"id": "MIT"}}]}
    ]}"#;
    const SPDX_ONE: &str = r#"{"packages": [{"name": "c", "licenseConcluded": "GPL-2.0-only"}]}"#;

    #[test]
    fn test_missing_document_is_absorbed() {
        let catalog = MemoryCatalog::from_records([
            record("a.json", "Windows 10", "desktop"),
            record("b.json", "Ubuntu Linux", "service"),
            record("gone.json", "Windows 11", "desktop"),
        ]);
        let store = MemoryDocumentStore::new()
            .with_document("a.json", TWO_MIT)
            .with_document("b.json", SPDX_ONE);

        let stats = StatisticsEngine::new().compute(&catalog, &store, None);
        assert_eq!(stats.total_sboms, 3);
        assert_eq!(stats.readable_sboms, 2);
        assert_eq!(stats.total_components, 3);
        assert_eq!(stats.license_distribution["MIT"], 2);
        assert_eq!(stats.license_distribution["GPL-2.0-only"], 1);
        assert_eq!(stats.skipped.len(), 1);
        assert_eq!(stats.skipped[0].filename, "gone.json");
        assert_eq!(stats.skipped[0].reason, SkipReason::Missing);
        assert!(stats.has_partial_failure());

        // metadata still counted for the unreadable record
        assert_eq!(stats.os_distribution.len(), 3);
        assert_eq!(stats.binary_type_distribution["desktop"], 2);

        let windows = &stats.platforms[&Platform::Windows];
        assert_eq!(windows.count, 2);
        assert_eq!(windows.readable, 1);
        assert_eq!(windows.total_components, 2);
        assert!((windows.average_components - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_averages() {
        let catalog = MemoryCatalog::from_records([
            record("a.json", "linux", "desktop"),
            record("b.json", "linux", "desktop"),
        ]);
        let store = MemoryDocumentStore::new()
            .with_document("a.json", TWO_MIT)
            .with_document("b.json", SPDX_ONE);
        let stats = StatisticsEngine::new().compute(&catalog, &store, None);
        assert!((stats.average_components_per_sbom - 1.5).abs() < 1e-12);
        // a.json has {MIT}, b.json has {GPL-2.0-only}
        assert!((stats.average_unique_licenses - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_averages_divide_by_readable_documents() {
        let catalog = MemoryCatalog::from_records([
            record("a.json", "linux", "desktop"),
            record("b.json", "linux", "desktop"),
            record("gone.json", "linux", "desktop"),
            record("broken.json", "linux", "desktop"),
        ]);
        let store = MemoryDocumentStore::new()
            .with_document("a.json", TWO_MIT)
            .with_document("b.json", SPDX_ONE)
            .with_document("broken.json", "{\"components\": [");
        let stats = StatisticsEngine::new().compute(&catalog, &store, None);

        assert_eq!(stats.total_sboms, 4);
        assert_eq!(stats.readable_sboms, 2);
        assert_eq!(stats.skipped.len(), 2);
        // 3 components over 2 readable documents, not over 4 records
        assert!((stats.average_components_per_sbom - 1.5).abs() < 1e-12);
        assert!((stats.average_unique_licenses - 1.0).abs() < 1e-12);

        let linux = &stats.platforms[&Platform::Linux];
        assert_eq!(linux.count, 4);
        assert_eq!(linux.readable, 2);
        assert!((linux.average_components - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = StatisticsEngine::new().compute(
            &MemoryCatalog::new(),
            &MemoryDocumentStore::new(),
            None,
        );
        assert_eq!(stats.total_sboms, 0);
        assert_eq!(stats.average_components_per_sbom, 0.0);
        assert_eq!(stats.average_unique_licenses, 0.0);
        assert!(stats.license_distribution.is_empty());
        assert!(!stats.has_partial_failure());
    }

    #[test]
    fn test_invalid_document_reason() {
        let catalog = MemoryCatalog::from_records([record("bad.json", "android", "mobile")]);
        let store = MemoryDocumentStore::new().with_document("bad.json", "{oops");
        let stats = StatisticsEngine::new().compute(&catalog, &store, None);
        assert_eq!(stats.skipped[0].reason, SkipReason::Invalid);
        assert_eq!(stats.platforms[&Platform::Android].count, 1);
        assert_eq!(stats.platforms[&Platform::Android].readable, 0);
        assert_eq!(stats.platforms[&Platform::Android].average_components, 0.0);
    }

    #[test]
    fn test_filter_restricts_corpus() {
        let mut a = record("a.json", "Windows", "desktop");
        a.category = Some("Browsers".to_string());
        let mut b = record("b.json", "Linux", "service");
        b.category = Some("Databases".to_string());
        let catalog = MemoryCatalog::from_records([a, b]);
        let store = MemoryDocumentStore::new()
            .with_document("a.json", TWO_MIT)
            .with_document("b.json", SPDX_ONE);

        let filter = CatalogFilter {
            category: Some("browser".to_string()),
            ..Default::default()
        };
        let stats = StatisticsEngine::new().compute(&catalog, &store, Some(&filter));
        assert_eq!(stats.total_sboms, 1);
        assert_eq!(stats.total_components, 2);
        assert!(!stats.license_distribution.contains_key("GPL-2.0-only"));
        assert_eq!(stats.platforms[&Platform::Linux].count, 0);
    }

    #[test]
    fn test_unmatched_os_falls_into_no_platform() {
        let catalog = MemoryCatalog::from_records([record("a.json", "FreeBSD", "service")]);
        let store = MemoryDocumentStore::new().with_document("a.json", TWO_MIT);
        let stats = StatisticsEngine::new().compute(&catalog, &store, None);
        let partitioned: usize = stats.platforms.values().map(|p| p.count).sum();
        assert_eq!(partitioned, 0);
        assert_eq!(stats.total_components, 2);
    }

    #[test]
    fn test_license_cap() {
        let components: Vec<String> = (0..15)
            .map(|i| format!(r#"{{"name": "c{i}", "licenseDeclared": "LIC-{i:02}"}}"#))
            .collect();
        let doc = format!(r#"{{"artifacts": [{}]}}"#, components.join(","));
        let catalog = MemoryCatalog::from_records([record("a.json", "ios", "mobile")]);
        let store = MemoryDocumentStore::new().with_document("a.json", doc);
        let stats = StatisticsEngine::new().compute(&catalog, &store, None);
        assert_eq!(stats.license_distribution.len(), TOP_DISTRIBUTION_LIMIT);
        assert_eq!(
            stats.platforms[&Platform::Ios].license_distribution.len(),
            TOP_PLATFORM_LICENSE_LIMIT
        );
        assert!(stats.license_distribution.contains_key("LIC-00"));
    }
}
