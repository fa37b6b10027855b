use crate::batch::{BatchEntry, BatchSummary};
use crate::report::SeoHealthReport;

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Include the title/underline header
    pub include_header: bool,

    /// Include the suggestion list
    pub include_suggestions: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_header: true, include_suggestions: true }
    }
}

/// Plain text formatter for SEO reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn report(&self, label: &str, report: &SeoHealthReport) -> String {
        report_to_text(label, report, &self.config)
    }

    pub fn batch(&self, entries: &[BatchEntry]) -> String {
        batch_to_text(entries, &self.config)
    }
}

/// Render one report as an audit listing.
pub fn report_to_text(label: &str, report: &SeoHealthReport, config: &TextConfig) -> String {
    let mut output = String::new();

    if config.include_header {
        let heading = format!("SEO Audit Report: {}", label);
        output.push_str(&heading);
        output.push('\n');
        output.push_str(&"=".repeat(heading.chars().count()));
        output.push_str("\n\n");
    }

    output.push_str(&format!("Score:         {}/100 ({})\n", report.seo_score, report.band()));
    output.push_str(&format!("Words:         {} ({} min read)\n", report.word_count, report.reading_time));
    output.push_str(&format!("Keyword density: {:.2}%\n", report.keyword_density));
    output.push_str(&format!("Readability:   {}\n", report.readability_score));

    output.push_str("\nIssues Detected\n");
    if report.missing_fields.is_empty() {
        output.push_str("  No major SEO issues found.\n");
    } else {
        for field in &report.missing_fields {
            output.push_str(&format!("  - {}\n", field));
        }
    }

    if config.include_suggestions && !report.suggestions.is_empty() {
        output.push_str("\nSuggestions\n");
        for tip in &report.suggestions {
            output.push_str(&format!("  - {}\n", tip));
        }
    }

    output.trim_end().to_string()
}

/// Render a batch: one report per article followed by a summary block.
pub fn batch_to_text(entries: &[BatchEntry], config: &TextConfig) -> String {
    let mut sections: Vec<String> = entries
        .iter()
        .map(|entry| {
            let mut text = report_to_text(&entry.label, &entry.report, config);
            if let Some(closest) = &entry.closest_match {
                text.push_str(&format!(
                    "\n\nClosest article: {} ({:.1}% similar)",
                    closest.label,
                    closest.similarity * 100.0
                ));
            }
            text
        })
        .collect();

    let summary = BatchSummary::from_entries(entries);
    sections.push(format!(
        "Summary\n=======\n\nArticles:      {}\nAverage score: {:.1}\nGood/Fair/Poor: {}/{}/{}",
        summary.count, summary.average_score, summary.good, summary.fair, summary.poor
    ));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MissingField;
    use crate::batch::ClosestMatch;

    fn report(score: u32) -> SeoHealthReport {
        SeoHealthReport {
            seo_score: score,
            word_count: 1450,
            reading_time: 8,
            keyword_density: 1.5,
            readability_score: 64,
            missing_fields: vec![],
            suggestions: vec![],
            core_web_vitals_issues: vec![],
            duplicate_content_issues: vec![],
        }
    }

    #[test]
    fn test_clean_report() {
        let text = report_to_text("rust-guide", &report(100), &TextConfig::default());
        assert!(text.starts_with("SEO Audit Report: rust-guide\n====="));
        assert!(text.contains("Score:         100/100 (good)"));
        assert!(text.contains("Keyword density: 1.50%"));
        assert!(text.contains("No major SEO issues found."));
        assert!(!text.contains("Suggestions"));
    }

    #[test]
    fn test_report_with_issues() {
        let mut r = report(55);
        r.missing_fields = vec![MissingField::OgImage];
        r.suggestions = vec!["Add an Open Graph image for social sharing.".to_string()];

        let text = report_to_text("draft", &r, &TextConfig::default());
        assert!(text.contains("(poor)"));
        assert!(text.contains("  - og:image"));
        assert!(text.contains("Suggestions\n  - Add an Open Graph image for social sharing."));
    }

    #[test]
    fn test_without_header_or_suggestions() {
        let mut r = report(70);
        r.suggestions = vec!["Add authoritative external links.".to_string()];
        let config = TextConfig { include_header: false, include_suggestions: false };

        let text = report_to_text("x", &r, &config);
        assert!(text.starts_with("Score:"));
        assert!(!text.contains("external links"));
    }

    #[test]
    fn test_batch_summary_block() {
        let entries = vec![
            BatchEntry {
                label: "a".into(),
                report: report(90),
                closest_match: Some(ClosestMatch { label: "b".into(), similarity: 0.25 }),
            },
            BatchEntry { label: "b".into(), report: report(50), closest_match: None },
        ];
        let text = batch_to_text(&entries, &TextConfig::default());
        assert!(text.contains("Closest article: b (25.0% similar)"));
        assert!(text.contains("Average score: 70.0"));
        assert!(text.contains("Good/Fair/Poor: 1/0/1"));
    }
}
