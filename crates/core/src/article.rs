//! Article input model.
//!
//! This module defines the read-only projection of a CMS article that the
//! scoring engine consumes. Field names follow the CMS JSON shape
//! (`metaDescription`, `ogMeta`, `internalLinks`, ...) and every field is
//! optional on the wire, defaulting to empty.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Result, SeoError};

/// Heading level of an article section.
///
/// The editor stores lowercase levels and the API model stores uppercase
/// ones, so both spellings are accepted. Any other value deserializes to no
/// level on [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    #[serde(rename = "h2", alias = "H2")]
    H2,
    #[serde(rename = "h3", alias = "H3")]
    H3,
}

/// A code block attached to a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// An image attached to a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub alt: String,
    pub url: String,
}

/// One heading of the article together with the body text beneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// `None` when the level is missing or not h2/h3; such sections still
    /// count toward body text but satisfy no heading check.
    #[serde(rename = "type", default, deserialize_with = "lenient_level", skip_serializing_if = "Option::is_none")]
    pub level: Option<HeadingLevel>,
    #[serde(default)]
    pub text: String,
    /// Body text of the section.
    #[serde(default)]
    pub essence: String,
    #[serde(default)]
    pub code_blocks: Vec<CodeBlock>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl Section {
    pub fn new(level: HeadingLevel, text: impl Into<String>, essence: impl Into<String>) -> Self {
        Self { level: Some(level), text: text.into(), essence: essence.into(), code_blocks: Vec::new(), images: Vec::new() }
    }
}

fn lenient_level<'de, D>(deserializer: D) -> std::result::Result<Option<HeadingLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| HeadingLevel::deserialize(value).ok()))
}

/// Open Graph metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Twitter card metadata. Carried through but not scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwitterMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
}

/// The article projection scored by the engine.
///
/// Unknown fields in the JSON (author, publish flags, timestamps, ...) are
/// ignored, so full CMS records can be passed straight in.
///
/// # Example
///
/// ```rust
/// use seoscope_core::Article;
///
/// let article = Article::from_json(r#"{
///     "title": "Understanding ownership",
///     "keywords": ["rust", "ownership"],
///     "headings": [{ "type": "h2", "text": "Moves", "essence": "Values move by default." }]
/// }"#).unwrap();
///
/// assert_eq!(article.headings.len(), 1);
/// assert_eq!(article.full_essence(), "Values move by default.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
    pub headings: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// JSON-LD payload, either an object or a JSON-encoded string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_meta: Option<OgMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_meta: Option<TwitterMeta>,
    pub internal_links: Vec<String>,
    pub external_links: Vec<String>,
}

impl Article {
    /// Parses an article from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SeoError::InvalidArticle(e.to_string()))
    }

    /// Reads and parses an article JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SeoError::FileNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| match e {
            SeoError::InvalidArticle(reason) => SeoError::InvalidArticle(format!("{}: {}", path.display(), reason)),
            other => other,
        })
    }

    /// Body text of every section joined by blank lines.
    ///
    /// Empty sections still contribute a (blank) segment so words of
    /// neighbouring sections never merge.
    pub fn full_essence(&self) -> String {
        self.headings.iter().map(|h| h.essence.as_str()).collect::<Vec<_>>().join("\n\n")
    }

    /// Heading texts joined by single spaces.
    pub fn heading_text(&self) -> String {
        self.headings.iter().map(|h| h.text.as_str()).collect::<Vec<_>>().join(" ")
    }

    pub fn has_heading(&self, level: HeadingLevel) -> bool {
        self.headings.iter().any(|h| h.level == Some(level))
    }

    /// Open Graph image, if set to a non-empty value.
    pub fn og_image(&self) -> Option<&str> {
        self.og_meta.as_ref().and_then(|m| m.image.as_deref()).filter(|s| !s.is_empty())
    }

    /// Canonical URL, if set to a non-empty value.
    pub fn canonical(&self) -> Option<&str> {
        self.canonical_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Slug if present, otherwise the title.
    pub fn label(&self) -> &str {
        self.slug.as_deref().filter(|s| !s.is_empty()).unwrap_or(&self.title)
    }
}
