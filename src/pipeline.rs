//! Per-URL pipeline: extract → gate → rank phrases → score bias.
//!
//! Each URL runs its three stages in sequence. Different URLs are
//! independent and run concurrently up to [`PipelineOptions::concurrency`],
//! sharing only the read-only [`Lexicon`]. A failing URL never affects the
//! others, and outcomes come back in completion order.

use crate::bias::score_bias;
use crate::extract::{ContentExtractor, ContentStrategy};
use crate::keywords::{DEFAULT_TOP_N, rank_phrases};
use crate::lexicon::Lexicon;
use crate::models::{ExtractionResult, SummaryRecord, UrlOutcome};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

/// Articles with fewer extracted words than this are not analyzed.
pub const DEFAULT_MIN_WORDS: usize = 100;

/// Default number of URLs processed at the same time.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Tunables for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub top_n: usize,
    pub min_words: usize,
    pub concurrency: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_words: DEFAULT_MIN_WORDS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// A topic and one of its article URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub topic: String,
    pub url: String,
}

/// Apply the length gate to an extraction and, if it passes, rank and score it.
pub fn analyze_extraction(
    topic: &str,
    url: &str,
    extraction: ExtractionResult,
    lexicon: &Lexicon,
    options: &PipelineOptions,
) -> UrlOutcome {
    let word_count = extraction.word_count();
    if word_count < options.min_words {
        warn!(
            %url,
            words = word_count,
            min_words = options.min_words,
            extracted = extraction.success,
            strategy = %extraction.strategy,
            "Not enough content extracted; skipping bias analysis"
        );
        return UrlOutcome::Skipped {
            topic: topic.to_string(),
            url: url.to_string(),
            word_count,
            strategy: extraction.strategy,
        };
    }

    let keywords = rank_phrases(&extraction.text, options.top_n);
    let bias = score_bias(&extraction.text, lexicon);
    info!(
        %url,
        matches = ?bias.matches,
        raw_score = bias.raw_score,
        total_words = bias.total_words,
        density = bias.density,
        "Scored article"
    );
    debug!(?keywords, "Top keywords");

    let summary = SummaryRecord {
        topic: topic.to_string(),
        url: url.to_string(),
        bias_density: bias.density,
        keywords: keywords.iter().map(|k| k.phrase.clone()).collect(),
    };
    UrlOutcome::Analyzed {
        summary,
        keywords,
        bias,
        strategy: extraction.strategy,
    }
}

/// Run the full pipeline for one URL.
#[instrument(level = "info", skip(extractor, lexicon, options))]
pub async fn analyze_url<P, F>(
    extractor: &ContentExtractor<P, F>,
    lexicon: &Lexicon,
    topic: &str,
    url: &str,
    options: &PipelineOptions,
) -> UrlOutcome
where
    P: ContentStrategy,
    F: ContentStrategy,
{
    let extraction = extractor.extract(url).await;
    analyze_extraction(topic, url, extraction, lexicon, options)
}

/// Run every job, `options.concurrency` at a time.
pub async fn run<P, F>(
    extractor: &ContentExtractor<P, F>,
    lexicon: &Lexicon,
    jobs: Vec<Job>,
    options: &PipelineOptions,
) -> Vec<UrlOutcome>
where
    P: ContentStrategy,
    F: ContentStrategy,
{
    let total = jobs.len();
    let concurrency = options.concurrency.max(1);
    info!(total, concurrency, "Starting article analysis");

    let outcomes: Vec<UrlOutcome> = stream::iter(jobs)
        .map(|job| async move {
            analyze_url(extractor, lexicon, &job.topic, &job.url, options).await
        })
        .buffer_unordered(concurrency)
        .collect()
        .await;

    for outcome in &outcomes {
        debug!(url = outcome.url(), analyzed = outcome.is_analyzed(), "URL finished");
    }
    let analyzed = outcomes.iter().filter(|o| o.is_analyzed()).count();
    info!(
        total,
        analyzed,
        skipped = total - analyzed,
        "Completed article analysis"
    );
    outcomes
}
