#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz dialect resolution and normalization.
///
/// Any input that parses as JSON goes through the normalizer, metadata
/// extraction and a structural diff against itself.
fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = sbom_finder::model::SbomDocument::from_bytes("fuzz.json", data) {
        let _ = sbom_finder::parsers::extract_metadata("fuzz_linux_sbom.json", &doc.content, true);
        for component in doc.normalized() {
            assert!(!component.licenses.is_empty());
        }
        assert!(sbom_finder::DiffEngine::new().diff(&doc, &doc).is_identical());
    }
});
