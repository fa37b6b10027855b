//! Structural and metadata checks.
//!
//! Each check is independent and appends to the missing-field list, the
//! suggestion list, or both. The order of [`run_checks`] is the order the
//! admin panel displays suggestions in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;
use crate::{Article, HeadingLevel};

/// A required field that is absent or out of shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissingField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "metaDescription")]
    MetaDescription,
    #[serde(rename = "keywords")]
    Keywords,
    #[serde(rename = "og:image")]
    OgImage,
    #[serde(rename = "canonicalUrl")]
    CanonicalUrl,
    #[serde(rename = "h2")]
    H2,
    #[serde(rename = "coverImageAlt")]
    CoverImageAlt,
    #[serde(rename = "structuredData")]
    StructuredData,
}

impl MissingField {
    /// Field identifier as shown in the admin panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::Title => "title",
            MissingField::MetaDescription => "metaDescription",
            MissingField::Keywords => "keywords",
            MissingField::OgImage => "og:image",
            MissingField::CanonicalUrl => "canonicalUrl",
            MissingField::H2 => "h2",
            MissingField::CoverImageAlt => "coverImageAlt",
            MissingField::StructuredData => "structuredData",
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics computed before the checks run.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSignals {
    pub word_count: usize,
    pub reading_time: usize,
    pub keyword_density: f64,
    pub readability: i32,
    pub keyword_coverage: usize,
    /// `min(keyword_coverage_target, keywords.len())`
    pub coverage_target: usize,
    pub structured_data_valid: bool,
}

impl ContentSignals {
    pub fn low_coverage(&self) -> bool {
        self.keyword_coverage < self.coverage_target
    }
}

/// Output of the structural checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Findings {
    pub missing_fields: Vec<MissingField>,
    pub suggestions: Vec<String>,
}

impl Findings {
    fn missing(&mut self, field: MissingField, suggestion: impl Into<String>) {
        self.missing_fields.push(field);
        self.suggestions.push(suggestion.into());
    }

    fn suggest(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }
}

/// True when the title is empty after trimming.
///
/// Stands in for the cover image alt-text check, which is keyed on the title
/// rather than on any image field.
pub fn title_is_blank(article: &Article) -> bool {
    article.title.trim().is_empty()
}

fn len_outside(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    value.is_empty() || len < min || len > max
}

/// Runs every metadata, structure and content-quality check.
pub fn run_checks(article: &Article, signals: &ContentSignals, t: &Thresholds) -> Findings {
    let mut findings = Findings::default();

    if len_outside(&article.title, t.title_min_len, t.title_max_len) {
        findings.missing(
            MissingField::Title,
            format!("Title should be {}–{} characters long and keyword-rich.", t.title_min_len, t.title_max_len),
        );
    }

    if len_outside(&article.meta_description, t.meta_description_min_len, t.meta_description_max_len) {
        findings.missing(
            MissingField::MetaDescription,
            format!(
                "Meta description should be {}–{} characters.",
                t.meta_description_min_len, t.meta_description_max_len
            ),
        );
    }

    if article.keywords.len() < t.min_keywords {
        findings.missing(MissingField::Keywords, format!("Add at least {} relevant keywords.", t.min_keywords));
    }

    if article.og_image().is_none() {
        findings.missing(MissingField::OgImage, "Add an Open Graph image for social sharing.");
    }

    if article.canonical().is_none() {
        findings.missing(MissingField::CanonicalUrl, "Specify a canonical URL to avoid duplicates.");
    }

    if !article.has_heading(HeadingLevel::H2) {
        findings.missing(MissingField::H2, "Add at least one H2 heading.");
    }

    if !article.has_heading(HeadingLevel::H3) {
        findings.suggest("Include H3 subheadings to structure content.");
    }

    if signals.word_count < t.suggested_word_count {
        findings.suggest(format!("Content length is below {} words.", t.suggested_word_count));
    }
    if signals.keyword_density < t.min_keyword_density {
        findings.suggest(format!("Keyword density is too low (<{}%).", t.min_keyword_density));
    }
    if signals.readability < t.min_readability {
        findings.suggest(format!("Improve readability score to above {}.", t.min_readability));
    }

    if title_is_blank(article) {
        findings.missing(MissingField::CoverImageAlt, "Add descriptive alt text to the cover image.");
    }

    if article.internal_links.is_empty() {
        findings.suggest("Add internal links to related content.");
    }
    if article.external_links.is_empty() {
        findings.suggest("Add authoritative external links.");
    }

    if !signals.structured_data_valid {
        findings.missing(MissingField::StructuredData, "Add valid JSON-LD structured data.");
    }

    if signals.low_coverage() {
        findings.suggest("Ensure keywords are present in title, meta description, and headings.");
    }

    findings
}
