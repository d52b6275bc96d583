//! Data models for extracted articles and the signals derived from them.
//!
//! This module defines the values that flow through the pipeline:
//! - [`ExtractionResult`]: Article body text plus which strategy produced it
//! - [`KeywordEntry`]: A ranked multi-word phrase
//! - [`BiasMatch`] / [`BiasReport`]: Lexicon matches and the resulting density
//! - [`SummaryRecord`] / [`UrlOutcome`]: Per-URL pipeline results
//! - [`BiasEdition`]: All outcomes of one run, serialized to JSON
//!
//! Every value here is created fresh per processed URL and never cached.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extraction strategy produced the text of an [`ExtractionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// The readability article parser succeeded.
    Primary,
    /// The primary parser failed and paragraph scraping succeeded.
    Fallback,
    /// Both strategies failed.
    Failed,
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExtractionStrategy::Primary => "primary",
            ExtractionStrategy::Fallback => "fallback",
            ExtractionStrategy::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Cleaned article body text.
///
/// `success == false` always comes with empty `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub success: bool,
    pub strategy: ExtractionStrategy,
}

impl ExtractionResult {
    pub fn extracted(text: String, strategy: ExtractionStrategy) -> Self {
        Self {
            text,
            success: true,
            strategy,
        }
    }

    pub fn failed() -> Self {
        Self {
            text: String::new(),
            success: false,
            strategy: ExtractionStrategy::Failed,
        }
    }

    /// Number of whitespace-separated words in the extracted text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A ranked candidate phrase with at least two words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub phrase: String,
    pub score: f64,
    pub word_count: usize,
}

/// A lexicon phrase found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasMatch {
    pub phrase: String,
    pub count: usize,
    pub weight: i32,
}

/// Lexicon-weighted score of one text.
///
/// `density` is `raw_score / total_words * 100` rounded to two decimals, or
/// `0.0` when the text has no words. It is not bounded in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub density: f64,
    pub matches: Vec<BiasMatch>,
    pub raw_score: i64,
    pub total_words: usize,
}

impl BiasReport {
    pub fn empty() -> Self {
        Self {
            density: 0.0,
            matches: Vec::new(),
            raw_score: 0,
            total_words: 0,
        }
    }
}

/// The stable per-URL output consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub topic: String,
    pub url: String,
    /// Always rounded to two decimal places.
    pub bias_density: f64,
    pub keywords: Vec<String>,
}

/// Result of running the pipeline on a single URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum UrlOutcome {
    Analyzed {
        summary: SummaryRecord,
        keywords: Vec<KeywordEntry>,
        bias: BiasReport,
        strategy: ExtractionStrategy,
    },
    /// Too little text was extracted; ranking and scoring were not run.
    Skipped {
        topic: String,
        url: String,
        word_count: usize,
        strategy: ExtractionStrategy,
    },
}

impl UrlOutcome {
    pub fn url(&self) -> &str {
        match self {
            UrlOutcome::Analyzed { summary, .. } => &summary.url,
            UrlOutcome::Skipped { url, .. } => url,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        matches!(self, UrlOutcome::Analyzed { .. })
    }
}

/// Every URL outcome produced by one run.
#[derive(Debug, Serialize, Deserialize)]
pub struct BiasEdition {
    /// The run date in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The run start time in `HH:MM:SS` format.
    pub local_time: String,
    pub outcomes: Vec<UrlOutcome>,
}
