//! Rule-based SEO health scoring for blog articles.
//!
//! The engine takes an already-fetched [`Article`], an optional
//! [`CoreWebVitals`] reading and an optional corpus of other article bodies,
//! and produces a [`SeoHealthReport`]: a 0-100 score, the required fields that
//! are missing or out of shape, and remediation suggestions.
//!
//! Scoring is a pure function of its inputs. Nothing is fetched, cached or
//! stored, so analyzers can be shared freely across threads.
//!
//! ```rust
//! use seoscope_core::{Article, MissingField, get_seo_health};
//!
//! let article = Article::from_json(r#"{
//!     "title": "Too short",
//!     "keywords": [],
//!     "headings": [{ "type": "h2", "text": "Intro", "essence": "java is great. java rocks." }]
//! }"#).unwrap();
//!
//! let report = get_seo_health(&article, None, &[]);
//! assert!(report.is_missing(MissingField::Title));
//! assert!(report.is_missing(MissingField::CanonicalUrl));
//! assert_eq!(report.word_count, 5);
//! ```

pub mod article;
pub mod batch;
pub mod checks;
pub mod config;
pub mod duplicate;
pub mod error;
pub mod formatters;
pub mod health;
pub mod keywords;
pub mod report;
pub mod structured_data;
pub mod text;
pub mod vitals;

pub use article::{Article, CodeBlock, HeadingLevel, ImageRef, OgMeta, Section, TwitterMeta};
pub use batch::{BatchEntry, BatchSummary, ClosestMatch};
pub use checks::{ContentSignals, Findings, MissingField, run_checks};
pub use config::{ConfigLoader, Penalties, SeoConfig, SeoConfigBuilder, Thresholds};
pub use duplicate::{SimilarityMatch, detect_duplicate_content, jaccard_similarity, most_similar, tokenize};
pub use error::{Result, SeoError};
pub use formatters::{JsonConfig, JsonFormatter, TextConfig, TextFormatter};
pub use formatters::{batch_to_json, batch_to_text, report_to_json, report_to_text};
pub use health::{SeoAnalyzer, get_seo_health};
pub use keywords::{calculate_keyword_density, check_keyword_coverage};
pub use report::{ScoreBand, SeoHealthReport};
pub use structured_data::validate_json_ld;
pub use text::{calculate_readability, count_syllables, count_words, estimate_reading_time};
pub use vitals::{CoreWebVitals, check_core_web_vitals};
