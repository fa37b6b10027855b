//! Core Web Vitals evaluation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Thresholds;
use crate::{Result, SeoError};

/// Message reported when no vitals reading is supplied.
pub const VITALS_UNAVAILABLE: &str = "Core Web Vitals data unavailable.";

/// A Core Web Vitals reading for the article's page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    /// Largest Contentful Paint in milliseconds.
    #[serde(rename = "LCP", alias = "lcp")]
    pub lcp: f64,
    /// First Input Delay in milliseconds.
    #[serde(rename = "FID", alias = "fid")]
    pub fid: f64,
    /// Cumulative Layout Shift (unitless).
    #[serde(rename = "CLS", alias = "cls")]
    pub cls: f64,
}

impl CoreWebVitals {
    pub fn new(lcp: f64, fid: f64, cls: f64) -> Self {
        Self { lcp, fid, cls }
    }

    /// Parses a `{ "LCP": .., "FID": .., "CLS": .. }` reading.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SeoError::InvalidVitals(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SeoError::FileNotFound(path.to_path_buf()));
        }
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Lists every vitals threshold the reading exceeds.
///
/// A missing reading yields a single [`VITALS_UNAVAILABLE`] entry rather than
/// an exemption.
///
/// # Example
///
/// ```rust
/// use seoscope_core::{CoreWebVitals, check_core_web_vitals, config::Thresholds};
///
/// let issues = check_core_web_vitals(Some(&CoreWebVitals::new(3000.0, 50.0, 0.05)), &Thresholds::default());
/// assert_eq!(issues, vec!["LCP is too high: 3000ms (>2500ms).".to_string()]);
/// ```
pub fn check_core_web_vitals(vitals: Option<&CoreWebVitals>, thresholds: &Thresholds) -> Vec<String> {
    let Some(vitals) = vitals else {
        return vec![VITALS_UNAVAILABLE.to_string()];
    };

    let mut issues = Vec::new();
    if vitals.lcp > thresholds.max_lcp_ms {
        issues.push(format!("LCP is too high: {}ms (>{}ms).", vitals.lcp, thresholds.max_lcp_ms));
    }
    if vitals.fid > thresholds.max_fid_ms {
        issues.push(format!("FID is too high: {}ms (>{}ms).", vitals.fid, thresholds.max_fid_ms));
    }
    if vitals.cls > thresholds.max_cls {
        issues.push(format!("CLS is too high: {} (>{}).", vitals.cls, thresholds.max_cls));
    }
    issues
}
