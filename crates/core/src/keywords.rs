//! Keyword density and keyword placement coverage.
//!
//! Matching is substring containment on lowercased text, so `"java"` matches
//! `"javascript"` and `"art"` matches `"start"`.

use std::sync::LazyLock;

use regex::Regex;

use crate::Article;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Percentage of body words that contain any keyword, rounded to 2 decimals.
///
/// Each keyword is counted independently, so a word containing two keywords
/// counts twice. Returns 0 when there are no keywords or the text is empty.
///
/// The denominator splits on whitespace runs without dropping empty pieces,
/// so leading or trailing whitespace (an empty first or last section) adds a
/// token that never matches. Word count ([`crate::count_words`]) does drop
/// them, so the two can differ by up to two.
///
/// # Example
///
/// ```rust
/// use seoscope_core::calculate_keyword_density;
///
/// let density = calculate_keyword_density("java is great. java rocks.", &["java".to_string()]);
/// assert_eq!(density, 40.0);
/// ```
pub fn calculate_keyword_density(text: &str, keywords: &[String]) -> f64 {
    if text.is_empty() || keywords.is_empty() {
        return 0.0;
    }

    let lower = text.to_lowercase();
    let all_words: Vec<&str> = WHITESPACE_RUN.split(&lower).collect();

    let matches: usize = keywords
        .iter()
        .map(|kw| {
            let kw = kw.to_lowercase();
            all_words.iter().filter(|word| word.contains(kw.as_str())).count()
        })
        .sum();

    round_to_hundredths(matches as f64 / all_words.len() as f64 * 100.0)
}

/// Counts keyword placements across title, meta description and headings.
///
/// Every keyword scores one point per location it appears in, so the result
/// ranges from 0 to `3 * keywords.len()`. Heading texts are checked, section
/// bodies are not.
pub fn check_keyword_coverage(article: &Article) -> usize {
    if article.keywords.is_empty() {
        return 0;
    }

    let title = article.title.to_lowercase();
    let description = article.meta_description.to_lowercase();
    let headings = article.heading_text().to_lowercase();

    article
        .keywords
        .iter()
        .map(|kw| {
            let kw = kw.to_lowercase();
            [&title, &description, &headings].iter().filter(|location| location.contains(kw.as_str())).count()
        })
        .sum()
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
