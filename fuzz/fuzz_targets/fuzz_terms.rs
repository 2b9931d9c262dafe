#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz term extraction and the similarity score.
///
/// The input is split in two halves that are compared with each other.
fuzz_target!(|data: &[u8]| {
    let (left, right) = data.split_at(data.len() / 2);
    let first = sbom_finder::similarity::TermFrequencies::from_text(&String::from_utf8_lossy(left));
    let second = sbom_finder::similarity::TermFrequencies::from_text(&String::from_utf8_lossy(right));
    let result = sbom_finder::TermSimilarityEngine::new().compare_frequencies(&first, &second);
    assert!((0.0..=1.0).contains(&result.similarity_score));
});
