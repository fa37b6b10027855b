//! Scoring many articles at once.
//!
//! Mirrors the admin article list, which shows a score badge for every
//! article. With cross-checking enabled each article's body is compared
//! against every other article in the batch, and the closest one is named.

use serde::Serialize;
use tracing::debug;

use crate::duplicate::most_similar;
use crate::report::ScoreBand;
use crate::{Article, CoreWebVitals, SeoAnalyzer, SeoHealthReport};

/// The batch article most similar to a scored article.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestMatch {
    pub label: String,
    pub similarity: f64,
}

/// Report for one article of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    /// Slug, or title when there is no slug.
    pub label: String,
    pub report: SeoHealthReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closest_match: Option<ClosestMatch>,
}

/// Aggregate view over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub count: usize,
    /// Mean score rounded to one decimal; 0 for an empty batch.
    pub average_score: f64,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl BatchSummary {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut summary = BatchSummary { count: entries.len(), ..Default::default() };
        if entries.is_empty() {
            return summary;
        }

        let total: u32 = entries.iter().map(|e| e.report.seo_score).sum();
        summary.average_score = (f64::from(total) / entries.len() as f64 * 10.0).round() / 10.0;

        for entry in entries {
            match entry.report.band() {
                ScoreBand::Good => summary.good += 1,
                ScoreBand::Fair => summary.fair += 1,
                ScoreBand::Poor => summary.poor += 1,
            }
        }
        summary
    }
}

impl SeoAnalyzer {
    /// Scores every article in `articles`.
    ///
    /// `corpus` is compared against every article. When `cross_check` is set,
    /// the bodies of the other batch articles are added to each article's
    /// corpus as well.
    pub fn analyze_batch(
        &self, articles: &[Article], vitals: Option<&CoreWebVitals>, corpus: &[String], cross_check: bool,
    ) -> Vec<BatchEntry> {
        let bodies: Vec<String> = if cross_check { articles.iter().map(Article::full_essence).collect() } else { Vec::new() };

        articles
            .iter()
            .enumerate()
            .map(|(i, article)| {
                let mut others = corpus.to_vec();
                let mut closest_match = None;

                if cross_check {
                    let peers: Vec<usize> = (0..articles.len()).filter(|&j| j != i).collect();
                    let peer_bodies: Vec<String> = peers.iter().map(|&j| bodies[j].clone()).collect();

                    closest_match = most_similar(&bodies[i], &peer_bodies).map(|m| ClosestMatch {
                        label: articles[peers[m.index]].label().to_string(),
                        similarity: (m.similarity * 1000.0).round() / 1000.0,
                    });
                    others.extend(peer_bodies);
                }

                let report = self.analyze(article, vitals, &others);
                debug!(article = article.label(), score = report.seo_score, "batch entry scored");

                BatchEntry { label: article.label().to_string(), report, closest_match }
            })
            .collect()
    }
}
