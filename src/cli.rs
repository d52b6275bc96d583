//! Command-line interface definitions for Bias Aware News.
//!
//! All options can be given as flags or environment variables.

use crate::extract::fetch::DEFAULT_TIMEOUT;
use crate::pipeline::{DEFAULT_CONCURRENCY, DEFAULT_MIN_WORDS, PipelineOptions};
use crate::topics::{DEFAULT_MAX_TOPICS, DEFAULT_TRENDING_URL};
use clap::Parser;
use std::time::Duration;

/// Command-line arguments for the Bias Aware News pipeline.
///
/// # Examples
///
/// ```sh
/// # Discover trending topics and analyze the built-in URL list
/// bias_aware_news
///
/// # Analyze specific articles under a fixed topic, writing a JSON report
/// bias_aware_news --topic "Maldives" --url https://example.com/story -j ./reports
///
/// # Use a custom lexicon
/// bias_aware_news --lexicon ./lexicon.yaml --top-n 5
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Number of key phrases reported per article
    #[arg(short = 'n', long, env = "BIAS_TOP_N", default_value_t = crate::keywords::DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Per-request fetch timeout in seconds
    #[arg(short, long, env = "BIAS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Minimum extracted words required before an article is analyzed
    #[arg(long, env = "BIAS_MIN_WORDS", default_value_t = DEFAULT_MIN_WORDS)]
    pub min_words: usize,

    /// Number of URLs processed concurrently
    #[arg(short, long, env = "BIAS_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// YAML or JSON file mapping lexicon phrases to integer weights
    #[arg(short, long, env = "BIAS_LEXICON")]
    pub lexicon: Option<String>,

    /// Topic to analyze; skips trending topic discovery (repeatable)
    #[arg(long = "topic")]
    pub topics: Vec<String>,

    /// Article URL analyzed for every topic (repeatable)
    #[arg(short, long = "url")]
    pub urls: Vec<String>,

    /// Maximum number of trending topics to discover
    #[arg(long, env = "BIAS_MAX_TOPICS", default_value_t = DEFAULT_MAX_TOPICS)]
    pub max_topics: usize,

    /// Listing page scraped for trending topics
    #[arg(long, env = "BIAS_TRENDING_URL", default_value = DEFAULT_TRENDING_URL)]
    pub trending_url: String,

    /// Output directory for the JSON report
    #[arg(short, long, env = "BIAS_JSON_OUTPUT_DIR")]
    pub json_output_dir: Option<String>,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            top_n: self.top_n,
            min_words: self.min_words,
            concurrency: self.concurrency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["bias_aware_news"]);

        assert_eq!(cli.top_n, 3);
        assert_eq!(cli.timeout(), Duration::from_secs(10));
        assert_eq!(cli.min_words, 100);
        assert_eq!(cli.max_topics, 10);
        assert_eq!(cli.trending_url, "https://news.google.com");
        assert!(cli.topics.is_empty());
        assert!(cli.urls.is_empty());
        assert!(cli.lexicon.is_none());
        assert!(cli.json_output_dir.is_none());
    }

    #[test]
    fn test_cli_repeated_topics_and_urls() {
        let cli = Cli::parse_from([
            "bias_aware_news",
            "--topic",
            "Maldives",
            "--topic",
            "Elections",
            "-u",
            "https://example.com/a",
            "--url",
            "https://example.com/b",
        ]);

        assert_eq!(cli.topics, vec!["Maldives", "Elections"]);
        assert_eq!(cli.urls, vec!["https://example.com/a", "https://example.com/b"]);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "bias_aware_news",
            "-n",
            "5",
            "-t",
            "3",
            "-c",
            "1",
            "-l",
            "/tmp/lexicon.yaml",
            "-j",
            "/tmp/json",
        ]);

        assert_eq!(
            cli.pipeline_options(),
            PipelineOptions {
                top_n: 5,
                min_words: 100,
                concurrency: 1
            }
        );
        assert_eq!(cli.timeout(), Duration::from_secs(3));
        assert_eq!(cli.lexicon.as_deref(), Some("/tmp/lexicon.yaml"));
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
    }
}
