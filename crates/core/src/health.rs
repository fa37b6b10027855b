//! SEO health analysis entry points.
//!
//! [`get_seo_health`] scores an article with the default configuration.
//! [`SeoAnalyzer`] does the same with a custom [`SeoConfig`].
//!
//! # Example
//!
//! ```rust
//! use seoscope_core::{Article, CoreWebVitals, get_seo_health};
//!
//! let article = Article::from_json(r#"{ "title": "Short title" }"#).unwrap();
//! let vitals = CoreWebVitals::new(1800.0, 40.0, 0.01);
//! let report = get_seo_health(&article, Some(&vitals), &[]);
//!
//! assert!(report.seo_score <= 100);
//! assert!(report.core_web_vitals_issues.is_empty());
//! ```

use tracing::{debug, trace};

use crate::checks::{ContentSignals, run_checks, title_is_blank};
use crate::config::SeoConfig;
use crate::duplicate::{DUPLICATE_CONTENT, detect_duplicate_content};
use crate::keywords::{calculate_keyword_density, check_keyword_coverage};
use crate::structured_data::validate_json_ld;
use crate::text::{calculate_readability, count_words, estimate_reading_time};
use crate::vitals::check_core_web_vitals;
use crate::{Article, CoreWebVitals, SeoHealthReport};

const MAX_SCORE: i64 = 100;

/// Scores articles against a fixed configuration.
///
/// The analyzer holds no per-article state and is `Send + Sync`; one
/// instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SeoAnalyzer {
    config: SeoConfig,
}

impl SeoAnalyzer {
    /// Creates an analyzer with the default scoring table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SeoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    /// Computes the text and keyword metrics the checks and penalties use.
    pub fn signals(&self, article: &Article, essence: &str) -> ContentSignals {
        let t = &self.config.thresholds;
        let word_count = count_words(essence);
        let keyword_coverage = check_keyword_coverage(article);

        ContentSignals {
            word_count,
            reading_time: estimate_reading_time(word_count, t.words_per_minute),
            keyword_density: calculate_keyword_density(essence, &article.keywords),
            readability: calculate_readability(essence),
            keyword_coverage,
            coverage_target: t.keyword_coverage_target.min(article.keywords.len()),
            structured_data_valid: validate_json_ld(article.structured_data.as_ref()),
        }
    }

    /// Scores an article.
    ///
    /// `vitals` is optional; when absent an "unavailable" issue is reported
    /// and penalised. `others` holds the body text of other articles to
    /// check for duplication and may be empty.
    pub fn analyze(&self, article: &Article, vitals: Option<&CoreWebVitals>, others: &[String]) -> SeoHealthReport {
        let t = &self.config.thresholds;
        let p = &self.config.penalties;

        let essence = article.full_essence();
        let signals = self.signals(article, &essence);
        trace!(?signals, "computed content signals");

        let findings = run_checks(article, &signals, t);
        let mut suggestions = findings.suggestions;

        let core_web_vitals_issues = check_core_web_vitals(vitals, t);
        suggestions.extend(core_web_vitals_issues.iter().cloned());

        let mut duplicate_content_issues = Vec::new();
        if detect_duplicate_content(&essence, others, t.duplicate_similarity) {
            duplicate_content_issues.push(DUPLICATE_CONTENT.to_string());
            suggestions.extend(duplicate_content_issues.iter().cloned());
        }

        // Summed as i64: any u32 penalty times the eight possible missing fields fits.
        let penalties: [(&str, i64, bool); 12] = [
            ("missing fields", i64::from(p.missing_field) * findings.missing_fields.len() as i64, true),
            ("short content", i64::from(p.short_content), signals.word_count < t.penalty_word_count),
            ("low keyword density", i64::from(p.low_keyword_density), signals.keyword_density < t.min_keyword_density),
            ("low readability", i64::from(p.low_readability), signals.readability < t.min_readability),
            ("keyword coverage", i64::from(p.keyword_coverage), signals.low_coverage()),
            ("no internal links", i64::from(p.missing_internal_links), article.internal_links.is_empty()),
            ("no external links", i64::from(p.missing_external_links), article.external_links.is_empty()),
            ("missing alt text", i64::from(p.missing_alt_text), title_is_blank(article)),
            ("invalid structured data", i64::from(p.invalid_structured_data), !signals.structured_data_valid),
            ("canonical missing", i64::from(p.canonical_missing), article.canonical().is_none()),
            ("core web vitals", i64::from(p.core_web_vitals), !core_web_vitals_issues.is_empty()),
            ("duplicate content", i64::from(p.duplicate_content), !duplicate_content_issues.is_empty()),
        ];

        let mut score = MAX_SCORE;
        for (name, points, applies) in penalties {
            if applies && points > 0 {
                trace!(penalty = name, points, "applying penalty");
                score -= points;
            }
        }
        let seo_score = score.clamp(0, MAX_SCORE) as u32;

        debug!(
            article = article.label(),
            raw_score = score,
            seo_score,
            words = signals.word_count,
            missing = findings.missing_fields.len(),
            "scored article"
        );

        SeoHealthReport {
            seo_score,
            word_count: signals.word_count,
            reading_time: signals.reading_time,
            keyword_density: signals.keyword_density,
            readability_score: signals.readability,
            missing_fields: findings.missing_fields,
            suggestions,
            core_web_vitals_issues,
            duplicate_content_issues,
        }
    }
}

/// Scores an article with the default configuration.
pub fn get_seo_health(article: &Article, vitals: Option<&CoreWebVitals>, others: &[String]) -> SeoHealthReport {
    SeoAnalyzer::new().analyze(article, vitals, others)
}
