//! Scoring configuration.
//!
//! Every threshold and penalty used by the engine lives in [`SeoConfig`], so
//! each constant can be checked against the scoring table in one place. The
//! defaults reproduce the CMS admin panel's scoring exactly.
//!
//! Configurations can be built in code with [`SeoConfig::builder`] or loaded
//! from JSON. Missing keys fall back to their defaults:
//!
//! ```json
//! { "thresholds": { "penaltyWordCount": 800 }, "penalties": { "duplicateContent": 20 } }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, SeoError};

/// Thresholds that decide whether a check passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    /// Minimum title length in characters (default: 50).
    pub title_min_len: usize,
    /// Maximum title length in characters (default: 70).
    pub title_max_len: usize,
    /// Minimum meta description length (default: 120).
    pub meta_description_min_len: usize,
    /// Maximum meta description length (default: 160).
    pub meta_description_max_len: usize,
    /// Minimum number of keywords (default: 3).
    pub min_keywords: usize,
    /// Word count below which a length suggestion is emitted (default: 1300).
    pub suggested_word_count: usize,
    /// Word count below which the short-content penalty applies (default: 1000).
    ///
    /// Deliberately lower than `suggested_word_count`; the two checks run
    /// independently.
    pub penalty_word_count: usize,
    /// Minimum keyword density in percent (default: 0.5).
    pub min_keyword_density: f64,
    /// Minimum readability score (default: 60).
    pub min_readability: i32,
    /// Upper bound on the keyword coverage target (default: 3).
    pub keyword_coverage_target: usize,
    /// Reading speed used for reading time (default: 200).
    pub words_per_minute: usize,
    /// Jaccard similarity above which content counts as duplicated (default: 0.85).
    pub duplicate_similarity: f64,
    /// Largest Contentful Paint limit in ms (default: 2500).
    pub max_lcp_ms: f64,
    /// First Input Delay limit in ms (default: 100).
    pub max_fid_ms: f64,
    /// Cumulative Layout Shift limit (default: 0.1).
    pub max_cls: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            title_min_len: 50,
            title_max_len: 70,
            meta_description_min_len: 120,
            meta_description_max_len: 160,
            min_keywords: 3,
            suggested_word_count: 1300,
            penalty_word_count: 1000,
            min_keyword_density: 0.5,
            min_readability: 60,
            keyword_coverage_target: 3,
            words_per_minute: 200,
            duplicate_similarity: 0.85,
            max_lcp_ms: 2500.0,
            max_fid_ms: 100.0,
            max_cls: 0.1,
        }
    }
}

/// Points deducted from the starting score of 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Penalties {
    /// Per entry in `missingFields` (default: 5).
    pub missing_field: u32,
    pub short_content: u32,
    pub low_keyword_density: u32,
    pub low_readability: u32,
    pub keyword_coverage: u32,
    pub missing_internal_links: u32,
    pub missing_external_links: u32,
    /// Applied when the title is blank (default: 3).
    pub missing_alt_text: u32,
    pub invalid_structured_data: u32,
    pub canonical_missing: u32,
    /// Flat, regardless of how many vitals fail (default: 7).
    pub core_web_vitals: u32,
    pub duplicate_content: u32,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            missing_field: 5,
            short_content: 10,
            low_keyword_density: 5,
            low_readability: 10,
            keyword_coverage: 5,
            missing_internal_links: 3,
            missing_external_links: 2,
            missing_alt_text: 3,
            invalid_structured_data: 7,
            canonical_missing: 5,
            core_web_vitals: 7,
            duplicate_content: 15,
        }
    }
}

/// Complete scoring configuration.
///
/// # Example
///
/// ```rust
/// use seoscope_core::SeoConfig;
///
/// let config = SeoConfig::builder()
///     .penalty_word_count(800)
///     .duplicate_similarity(0.9)
///     .build();
/// assert_eq!(config.thresholds.penalty_word_count, 800);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub thresholds: Thresholds,
    pub penalties: Penalties,
}

impl SeoConfig {
    /// Creates a new builder for SeoConfig.
    pub fn builder() -> SeoConfigBuilder {
        SeoConfigBuilder::new()
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| SeoError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SeoError::FileNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| match e {
            SeoError::ConfigError(reason) => SeoError::ConfigError(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    /// Rejects threshold combinations that can never pass.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if t.title_min_len > t.title_max_len {
            return Err(SeoError::ConfigError(format!(
                "titleMinLen ({}) exceeds titleMaxLen ({})",
                t.title_min_len, t.title_max_len
            )));
        }
        if t.meta_description_min_len > t.meta_description_max_len {
            return Err(SeoError::ConfigError(format!(
                "metaDescriptionMinLen ({}) exceeds metaDescriptionMaxLen ({})",
                t.meta_description_min_len, t.meta_description_max_len
            )));
        }
        if t.words_per_minute == 0 {
            return Err(SeoError::ConfigError("wordsPerMinute must be greater than zero".to_string()));
        }
        if !(0.0..=1.0).contains(&t.duplicate_similarity) {
            return Err(SeoError::ConfigError(format!(
                "duplicateSimilarity must be within 0..=1, got {}",
                t.duplicate_similarity
            )));
        }
        Ok(())
    }
}

/// Builder for SeoConfig.
pub struct SeoConfigBuilder {
    config: SeoConfig,
}

impl SeoConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SeoConfig::default() }
    }

    /// Sets the accepted title length range.
    pub fn title_len(mut self, min: usize, max: usize) -> Self {
        self.config.thresholds.title_min_len = min;
        self.config.thresholds.title_max_len = max;
        self
    }

    /// Sets the accepted meta description length range.
    pub fn meta_description_len(mut self, min: usize, max: usize) -> Self {
        self.config.thresholds.meta_description_min_len = min;
        self.config.thresholds.meta_description_max_len = max;
        self
    }

    pub fn min_keywords(mut self, value: usize) -> Self {
        self.config.thresholds.min_keywords = value;
        self
    }

    pub fn suggested_word_count(mut self, value: usize) -> Self {
        self.config.thresholds.suggested_word_count = value;
        self
    }

    pub fn penalty_word_count(mut self, value: usize) -> Self {
        self.config.thresholds.penalty_word_count = value;
        self
    }

    pub fn min_keyword_density(mut self, value: f64) -> Self {
        self.config.thresholds.min_keyword_density = value;
        self
    }

    pub fn min_readability(mut self, value: i32) -> Self {
        self.config.thresholds.min_readability = value;
        self
    }

    pub fn words_per_minute(mut self, value: usize) -> Self {
        self.config.thresholds.words_per_minute = value;
        self
    }

    pub fn duplicate_similarity(mut self, value: f64) -> Self {
        self.config.thresholds.duplicate_similarity = value;
        self
    }

    /// Replaces the whole penalty table.
    pub fn penalties(mut self, penalties: Penalties) -> Self {
        self.config.penalties = penalties;
        self
    }

    /// Builds the config.
    pub fn build(self) -> SeoConfig {
        self.config
    }
}

impl Default for SeoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves which scoring configuration to use.
///
/// Lookup order: an explicit path, then `seoscope/config.json` under the
/// user's config directory, then the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Explicit config file
    explicit: Option<PathBuf>,
    /// Standard config directory
    standard_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { explicit: None, standard_dir: dirs::config_dir().map(|d| d.join("seoscope")) }
    }

    /// Uses the given file instead of searching.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Overrides the standard config directory.
    pub fn with_standard_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.standard_dir = dir;
        self
    }

    /// Loads the configuration.
    ///
    /// An explicit file must exist and parse; the standard file is optional.
    pub fn load(&self) -> Result<SeoConfig> {
        if let Some(path) = &self.explicit {
            debug!(path = %path.display(), "loading scoring config");
            return SeoConfig::from_file(path);
        }

        if let Some(dir) = &self.standard_dir {
            let path = dir.join("config.json");
            if path.exists() {
                debug!(path = %path.display(), "loading scoring config from standard location");
                return SeoConfig::from_file(&path);
            }
        }

        debug!("no scoring config found, using defaults");
        Ok(SeoConfig::default())
    }
}
