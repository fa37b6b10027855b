//! The SEO health report returned by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MissingField;
use crate::{Result, SeoError};

/// Colour band used by the admin panel's score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above (green).
    Good,
    /// 60 to 79 (yellow).
    Fair,
    /// Below 60 (red).
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    /// Badge colour name.
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Good => "green",
            ScoreBand::Fair => "yellow",
            ScoreBand::Poor => "red",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        };
        f.write_str(label)
    }
}

/// Result of scoring one article.
///
/// Built fresh on every call; identical inputs always produce an identical
/// report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoHealthReport {
    /// Composite score clamped to `0..=100`.
    pub seo_score: u32,
    pub word_count: usize,
    /// Minutes, rounded up.
    pub reading_time: usize,
    /// Percent, 2 decimals.
    pub keyword_density: f64,
    /// Flesch-style score; not clamped.
    pub readability_score: i32,
    pub missing_fields: Vec<MissingField>,
    /// Remediation hints in check order. Not deduplicated.
    pub suggestions: Vec<String>,
    pub core_web_vitals_issues: Vec<String>,
    pub duplicate_content_issues: Vec<String>,
}

impl SeoHealthReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.seo_score)
    }

    pub fn is_missing(&self, field: MissingField) -> bool {
        self.missing_fields.contains(&field)
    }

    pub fn has_duplicate_content(&self) -> bool {
        !self.duplicate_content_issues.is_empty()
    }

    /// Gets the report as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(SeoError::from)
    }
}
