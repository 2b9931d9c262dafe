//! Property-based tests for the diff and similarity engines.
//!
//! Checks the algebraic laws both comparisons must obey for arbitrary
//! component lists, and that the normalizer never panics on random input.

use proptest::prelude::*;
use sbom_finder::{
    diff::canonical_form,
    parsers::{normalize, resolve_dialect},
    similarity::TermFrequencies,
    DiffEngine, TermSimilarityEngine,
};
use serde_json::{json, Value};
use std::collections::HashSet;

fn component_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z]{1,6}",
        prop::option::of("[0-9]\\.[0-9]"),
        prop::option::of(prop::sample::select(vec!["MIT", "Apache-2.0", "BSD-3-Clause"])),
    )
        .prop_map(|(name, version, license)| {
            let mut component = json!({"name": name});
            if let Some(version) = version {
                component["version"] = json!(version);
            }
            if let Some(license) = license {
                component["licenses"] = json!([{"license": {"id": license}}]);
            }
            component
        })
}

fn document_strategy() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["components", "packages", "artifacts"]),
        prop::collection::vec(component_strategy(), 0..12),
    )
        .prop_map(|(key, components)| json!({ key: components }))
}

fn canonical_set(values: &[Value]) -> HashSet<String> {
    values.iter().map(canonical_form).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn diff_with_itself_is_empty(doc in document_strategy()) {
        let result = DiffEngine::new().diff_values(&doc, &doc);
        prop_assert!(result.is_identical());
        prop_assert_eq!(result.summary.common, result.summary.first_total);
    }

    #[test]
    fn diff_is_symmetric(a in document_strategy(), b in document_strategy()) {
        let engine = DiffEngine::new();
        let forward = engine.diff_values(&a, &b);
        let backward = engine.diff_values(&b, &a);
        prop_assert_eq!(&forward.only_in_first, &backward.only_in_second);
        prop_assert_eq!(&forward.only_in_second, &backward.only_in_first);
    }

    #[test]
    fn diff_sides_are_disjoint(a in document_strategy(), b in document_strategy()) {
        let result = DiffEngine::new().diff_values(&a, &b);
        let first = canonical_set(&result.only_in_first);
        let second = canonical_set(&result.only_in_second);
        prop_assert!(first.is_disjoint(&second));
        prop_assert_eq!(first.len(), result.only_in_first.len());
        prop_assert_eq!(second.len(), result.only_in_second.len());
    }

    #[test]
    fn diff_summary_adds_up(a in document_strategy(), b in document_strategy()) {
        let s = DiffEngine::new().diff_values(&a, &b).summary;
        prop_assert_eq!(s.first_total, s.common + s.only_in_first);
        prop_assert_eq!(s.second_total, s.common + s.only_in_second);
    }

    #[test]
    fn similarity_score_is_bounded(a in "\\PC{0,300}", b in "\\PC{0,300}") {
        let first = TermFrequencies::from_text(&a);
        let second = TermFrequencies::from_text(&b);
        let score = TermSimilarityEngine::new().compare_frequencies(&first, &second).similarity_score;
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn similarity_is_symmetric(a in "[a-z ]{0,200}", b in "[a-z ]{0,200}") {
        let first = TermFrequencies::from_text(&a);
        let second = TermFrequencies::from_text(&b);
        let engine = TermSimilarityEngine::new();
        let forward = engine.compare_frequencies(&first, &second);
        let backward = engine.compare_frequencies(&second, &first);
        prop_assert!((forward.similarity_score - backward.similarity_score).abs() < 1e-12);
        prop_assert_eq!(forward.term_types.common, backward.term_types.common);
    }

    #[test]
    fn normalize_preserves_order(doc in document_strategy()) {
        let names: Vec<String> = normalize(&doc).into_iter().map(|c| c.name).collect();
        let key = doc.as_object().and_then(|o| o.keys().next().cloned()).unwrap_or_default();
        let expected: Vec<String> = doc[key.as_str()]
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .map(|e| e["name"].as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn normalize_doesnt_panic(s in "\\PC{0,500}") {
        if let Ok(doc) = serde_json::from_str::<Value>(&s) {
            let _ = resolve_dialect(&doc);
            for component in normalize(&doc) {
                prop_assert!(!component.licenses.is_empty());
            }
        }
    }
}
