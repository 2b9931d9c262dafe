//! Term extraction from serialized documents.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// JSON structural punctuation replaced by whitespace before tokenizing.
static JSON_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[{}\[\],:"]"#).expect("static regex"));

/// Tokens of this many characters or fewer are discarded.
pub const MIN_TERM_CHARS: usize = 3;

/// Frequency table of the qualifying terms of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    counts: HashMap<String, usize>,
}

impl TermFrequencies {
    /// Tokenize text and count qualifying terms.
    ///
    /// Punctuation is blanked out, the text is split on whitespace, tokens
    /// with at most [`MIN_TERM_CHARS`] characters are dropped and the rest
    /// are lower-cased.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let blanked = JSON_PUNCTUATION.replace_all(text, " ");
        let mut counts = HashMap::new();
        for token in blanked.split_whitespace() {
            if token.chars().count() <= MIN_TERM_CHARS {
                continue;
            }
            *counts.entry(token.to_lowercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a term (0 when absent).
    #[must_use]
    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Whether the term occurs at all.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether no term qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(term, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
