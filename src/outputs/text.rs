//! Line-oriented summaries for stdout.
//!
//! ```text
//! Summary: {topic} | {url} | {density:.2} | {keyword}, {keyword}, ...
//! Skipped: {topic} | {url} | {words} words
//! ```

use crate::models::UrlOutcome;

/// Render one outcome as a single line. Density always has two decimals.
pub fn summary_line(outcome: &UrlOutcome) -> String {
    match outcome {
        UrlOutcome::Analyzed { summary, .. } => format!(
            "Summary: {} | {} | {:.2} | {}",
            summary.topic,
            summary.url,
            summary.bias_density,
            summary.keywords.join(", ")
        ),
        UrlOutcome::Skipped {
            topic,
            url,
            word_count,
            ..
        } => format!("Skipped: {topic} | {url} | {word_count} words"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BiasReport, ExtractionStrategy, SummaryRecord};

    #[test]
    fn test_analyzed_line_has_two_decimals() {
        let outcome = UrlOutcome::Analyzed {
            summary: SummaryRecord {
                topic: "Maldives".to_string(),
                url: "https://example.com/a".to_string(),
                bias_density: 3.5,
                keywords: vec!["prime minister".to_string(), "maritime security".to_string()],
            },
            keywords: vec![],
            bias: BiasReport::empty(),
            strategy: ExtractionStrategy::Primary,
        };

        assert_eq!(
            summary_line(&outcome),
            "Summary: Maldives | https://example.com/a | 3.50 | prime minister, maritime security"
        );
    }

    #[test]
    fn test_skipped_line() {
        let outcome = UrlOutcome::Skipped {
            topic: "Maldives".to_string(),
            url: "https://example.com/b".to_string(),
            word_count: 42,
            strategy: ExtractionStrategy::Fallback,
        };
        assert_eq!(
            summary_line(&outcome),
            "Skipped: Maldives | https://example.com/b | 42 words"
        );
    }
}
