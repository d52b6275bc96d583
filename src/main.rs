//! # Bias Aware News
//!
//! Discovers trending news topics, extracts article text, surfaces each
//! article's key phrases, and scores it against a bias lexicon.
//!
//! ## Usage
//!
//! ```sh
//! bias_aware_news --topic "Maldives" -u https://example.com/story -j ./reports
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Lexicon**: Load the bias lexicon once (built-in or `--lexicon` file)
//! 2. **Topics**: Use `--topic` values or scrape trending topics
//! 3. **Extraction**: Readability first, paragraph scraping as fallback
//! 4. **Analysis**: Skip short articles, otherwise rank phrases (RAKE) and score bias
//! 5. **Output**: Summary lines on stdout and an optional JSON report

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod bias;
mod cli;
mod error;
mod extract;
mod keywords;
mod lexicon;
mod models;
mod outputs;
mod pipeline;
mod topics;
mod utils;

use cli::Cli;
use extract::HttpContentExtractor;
use extract::fetch::{BROWSER_USER_AGENT, HttpFetcher};
use lexicon::Lexicon;
use models::BiasEdition;
use outputs::{json, text};
use pipeline::Job;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("bias_aware_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Lexicon: a bad lexicon is fatal ----
    let lexicon = match &args.lexicon {
        Some(path) => Lexicon::load(path).await.inspect_err(|e| {
            error!(path = %path, error = %e, "Failed to load lexicon");
        })?,
        None => Lexicon::builtin(),
    };
    info!(entries = lexicon.len(), "Lexicon ready");

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "JSON output directory is not writable");
            return Err(e);
        }
    }

    // ---- Topics ----
    let topic_names = if args.topics.is_empty() {
        info!(source = %args.trending_url, "Getting trending topics");
        let fetcher = HttpFetcher::new(BROWSER_USER_AGENT, args.timeout())?;
        topics::trending_topics(fetcher.client(), &args.trending_url, args.max_topics)
            .await
            .inspect_err(|e| error!(error = %e, "Trending topic discovery failed"))?
    } else {
        args.topics.clone()
    };

    let jobs: Vec<Job> = topic_names
        .iter()
        .flat_map(|topic| {
            topics::urls_for_topic(topic, &args.urls)
                .into_iter()
                .map(move |url| Job {
                    topic: topic.clone(),
                    url,
                })
        })
        .collect();
    info!(topics = topic_names.len(), urls = jobs.len(), "Resolved article URLs");

    // ---- Analysis ----
    let local_now = Local::now();
    let extractor = HttpContentExtractor::with_timeout(args.timeout())?;
    let options = args.pipeline_options();
    let outcomes = pipeline::run(&extractor, &lexicon, jobs, &options).await;

    for outcome in &outcomes {
        println!("{}", text::summary_line(outcome));
    }

    // ---- JSON output ----
    let edition = BiasEdition {
        local_date: local_now.date_naive().to_string(),
        local_time: local_now.time().format("%H:%M:%S").to_string(),
        outcomes,
    };
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_edition(&edition, dir).await {
            error!(error = %e, "Failed to write JSON report");
        }
    }

    let analyzed = edition.outcomes.iter().filter(|o| o.is_analyzed()).count();
    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        analyzed,
        skipped = edition.outcomes.len() - analyzed,
        "Bias analysis completed"
    );

    Ok(())
}
