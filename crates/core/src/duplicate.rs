//! Near-duplicate detection over token sets.
//!
//! Texts are lowercased and split on runs of characters outside
//! `[A-Za-z0-9_]`; the resulting token sets are compared with Jaccard
//! similarity. Cost is linear in the corpus size, so callers should bound the
//! corpus they pass in.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid token regex"));

/// Message reported when the article duplicates a corpus entry.
pub const DUPLICATE_CONTENT: &str = "This content appears to be duplicated.";

/// Closest corpus entry to an article body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityMatch {
    /// Index into the corpus.
    pub index: usize,
    /// Jaccard similarity in `0.0..=1.0`.
    pub similarity: f64,
}

/// Lowercased token set of a text.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    NON_WORD.split(&lower).filter(|t| !t.is_empty()).map(str::to_string).collect()
}

/// `|A ∩ B| / |A ∪ B|`, or 0 when both sets are empty.
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Returns true when any corpus entry is more similar than `threshold`.
///
/// # Example
///
/// ```rust
/// use seoscope_core::detect_duplicate_content;
///
/// let corpus = vec!["The quick brown fox jumps over the lazy dog!".to_string()];
/// assert!(detect_duplicate_content("the quick brown fox jumps over the lazy dog", &corpus, 0.85));
/// assert!(!detect_duplicate_content("an entirely different article", &corpus, 0.85));
/// ```
pub fn detect_duplicate_content(content: &str, others: &[String], threshold: f64) -> bool {
    let content_set = tokenize(content);
    others.iter().any(|other| jaccard_similarity(&content_set, &tokenize(other)) > threshold)
}

/// Finds the corpus entry most similar to `content`.
///
/// Ties keep the earliest entry. Returns `None` for an empty corpus.
pub fn most_similar(content: &str, others: &[String]) -> Option<SimilarityMatch> {
    let content_set = tokenize(content);
    others
        .iter()
        .enumerate()
        .map(|(index, other)| SimilarityMatch { index, similarity: jaccard_similarity(&content_set, &tokenize(other)) })
        .fold(None, |best: Option<SimilarityMatch>, candidate| match best {
            Some(b) if b.similarity >= candidate.similarity => Some(b),
            _ => Some(candidate),
        })
}
