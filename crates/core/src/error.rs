//! Error types for seoscope operations.
//!
//! Scoring itself never fails: degenerate articles produce neutral metrics.
//! [`SeoError`] covers the boundary around the engine, where articles, vitals
//! readings, corpus files and scoring configuration are loaded from disk or
//! parsed from JSON.
//!
//! # Example
//!
//! ```rust
//! use seoscope_core::{Article, SeoError};
//!
//! match Article::from_json("{ not json") {
//!     Ok(article) => println!("Loaded {}", article.title),
//!     Err(SeoError::InvalidArticle(reason)) => println!("Bad article: {}", reason),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading and serializing SEO inputs and reports.
#[derive(Error, Debug)]
pub enum SeoError {
    /// File not found.
    ///
    /// Returned when an article, corpus, vitals or config path doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The article payload is not a valid article record.
    #[error("Invalid article: {0}")]
    InvalidArticle(String),

    /// The Core Web Vitals payload is not a valid `{ LCP, FID, CLS }` record.
    #[error("Invalid Core Web Vitals reading: {0}")]
    InvalidVitals(String),

    /// Scoring configuration errors.
    ///
    /// Returned when a config file is malformed or carries impossible
    /// thresholds (for example a minimum above its maximum).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Report serialization errors.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for SeoError.
pub type Result<T> = std::result::Result<T, SeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeoError::InvalidArticle("missing title".to_string());
        assert!(err.to_string().contains("Invalid article"));
        assert!(err.to_string().contains("missing title"));
    }

    #[test]
    fn test_file_not_found_error() {
        let err = SeoError::FileNotFound(PathBuf::from("articles/missing.json"));
        assert!(err.to_string().contains("articles/missing.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SeoError = io.into();
        assert!(matches!(err, SeoError::Io(_)));
    }
}
