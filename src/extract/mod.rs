//! Article body extraction with a primary-then-fallback strategy chain.
//!
//! # Strategies
//!
//! | Order | Strategy | Module | Notes |
//! |-------|----------|--------|-------|
//! | 1 | Readability | [`article`] | Picks the main article node of the page |
//! | 2 | Paragraphs | [`paragraphs`] | Browser User-Agent, keeps `<p>` text of more than 5 words |
//!
//! The fallback runs once, only when the primary strategy errors or returns
//! no text. There are no retries beyond that single escalation. Failures never
//! escape [`ContentExtractor::extract`]: they are logged and reported as an
//! [`ExtractionResult`] with `success == false`.

pub mod article;
pub mod fetch;
pub mod paragraphs;

use crate::error::ExtractError;
use crate::models::{ExtractionResult, ExtractionStrategy};
use crate::utils::truncate_for_log;
use article::ArticleStrategy;
use fetch::{BROWSER_USER_AGENT, CRATE_USER_AGENT, HttpFetcher};
use paragraphs::ParagraphStrategy;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Whether `text` holds anything readable. Whitespace, BOMs and zero-width
/// characters alone do not count.
fn has_content(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

/// One way of turning a URL into article body text.
pub trait ContentStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Extract the article body of `url`.
    async fn extract(&self, url: &str) -> Result<String, ExtractError>;
}

/// Two-stage extractor: `primary`, then `fallback` if the primary fails.
#[derive(Debug, Clone)]
pub struct ContentExtractor<P, F> {
    primary: P,
    fallback: F,
}

/// The extractor used by the binary: readability over HTTP, then paragraph
/// scraping with a browser User-Agent.
pub type HttpContentExtractor =
    ContentExtractor<ArticleStrategy<HttpFetcher>, ParagraphStrategy<HttpFetcher>>;

impl HttpContentExtractor {
    /// Build the HTTP extractor with `timeout` applied to every fetch.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let primary = HttpFetcher::new(CRATE_USER_AGENT, timeout)?;
        let fallback = HttpFetcher::new(BROWSER_USER_AGENT, timeout)?;
        Ok(ContentExtractor::new(
            ArticleStrategy::new(primary),
            ParagraphStrategy::new(fallback),
        ))
    }
}

impl<P, F> ContentExtractor<P, F>
where
    P: ContentStrategy,
    F: ContentStrategy,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Extract the article body of `url`.
    ///
    /// Never fails: total failure is an empty, unsuccessful result.
    #[instrument(level = "info", skip(self))]
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        match self.primary.extract(url).await {
            Ok(text) if has_content(&text) => {
                let text = text.trim().to_string();
                info!(
                    strategy = self.primary.name(),
                    words = text.split_whitespace().count(),
                    "Primary extraction succeeded"
                );
                return ExtractionResult::extracted(text, ExtractionStrategy::Primary);
            }
            Ok(_) => warn!(
                strategy = self.primary.name(),
                "Primary extraction produced no text; falling back"
            ),
            Err(e) => warn!(
                strategy = self.primary.name(),
                error = %e,
                "Primary extraction failed; falling back"
            ),
        }

        match self.fallback.extract(url).await {
            Ok(text) if has_content(&text) => {
                let text = text.trim().to_string();
                info!(
                    strategy = self.fallback.name(),
                    words = text.split_whitespace().count(),
                    preview = %truncate_for_log(&text, 300),
                    "Fallback extraction succeeded"
                );
                ExtractionResult::extracted(text, ExtractionStrategy::Fallback)
            }
            Ok(_) => {
                warn!(strategy = self.fallback.name(), "Fallback extraction produced no text");
                ExtractionResult::failed()
            }
            Err(e) => {
                error!(strategy = self.fallback.name(), error = %e, "Fallback extraction failed");
                ExtractionResult::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fetch::PageFetcher;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves the same HTML for every URL.
    struct StaticPage(&'static str);

    impl PageFetcher for StaticPage {
        async fn fetch(&self, _url: &str) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    /// Simulates a network failure.
    struct Unreachable;

    impl PageFetcher for Unreachable {
        async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
            Err(ExtractError::Status {
                url: url.to_string(),
                status: 503,
            })
        }
    }

    /// Returns canned text and counts how often it was asked.
    struct Canned {
        text: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(text: Option<&'static str>) -> Self {
            Self {
                text,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ContentStrategy for Canned {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn extract(&self, url: &str) -> Result<String, ExtractError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.text.map(str::to_string).ok_or_else(|| ExtractError::Parse {
                url: url.to_string(),
                reason: "canned failure".to_string(),
            })
        }
    }

    const ARTICLE_PAGE: &str = r#"<html><body>
        <nav><p>Home World Politics Business Sport Culture Travel Opinion</p></nav>
        <article>
          <h1>Leaders reaffirm ties</h1>
          <p>The two governments agreed to expand cooperation on maritime security.</p>
          <p>Photo: Reuters</p>
          <p>Officials said new trade routes would open before the end of the year.</p>
        </article>
        <footer><p>All rights reserved by the publisher of this fine newspaper.</p></footer>
    </body></html>"#;

    #[tokio::test]
    async fn test_fallback_used_when_primary_fetch_fails() {
        let extractor = ContentExtractor::new(
            ArticleStrategy::new(Unreachable),
            ParagraphStrategy::new(StaticPage(ARTICLE_PAGE)),
        );

        let result = extractor.extract("https://news.example.com/ties").await;
        assert!(result.success);
        assert_eq!(result.strategy, ExtractionStrategy::Fallback);
        assert_eq!(
            result.text,
            "The two governments agreed to expand cooperation on maritime security.\n\
             Officials said new trade routes would open before the end of the year."
        );
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let extractor = ContentExtractor::new(
            Canned::new(Some("  body text from the primary parser \n")),
            Canned::new(Some("fallback text")),
        );

        let result = extractor.extract("https://news.example.com/a").await;
        assert_eq!(result.text, "body text from the primary parser");
        assert_eq!(result.strategy, ExtractionStrategy::Primary);
        assert_eq!(extractor.fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_primary_text_triggers_fallback() {
        let extractor = ContentExtractor::new(
            Canned::new(Some("   \n ")),
            Canned::new(Some("fallback text")),
        );

        let result = extractor.extract("https://news.example.com/a").await;
        assert_eq!(result.text, "fallback text");
        assert_eq!(result.strategy, ExtractionStrategy::Fallback);
        assert_eq!(extractor.primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(extractor.fallback.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invisible_primary_text_triggers_fallback() {
        let extractor = ContentExtractor::new(
            Canned::new(Some("\u{feff}\u{200b} \u{200b}")),
            Canned::new(Some("fallback text")),
        );

        let result = extractor.extract("https://news.example.com/a").await;
        assert_eq!(result.text, "fallback text");
        assert_eq!(result.strategy, ExtractionStrategy::Fallback);
    }

    #[test]
    fn test_has_content() {
        assert!(has_content("Élection 2024"));
        assert!(!has_content(" \n\t"));
        assert!(!has_content("\u{feff}\u{200b}"));
        assert!(!has_content("... --"));
    }

    #[tokio::test]
    async fn test_total_failure_is_empty_result() {
        let extractor = ContentExtractor::new(Canned::new(None), Canned::new(None));
        let result = extractor.extract("https://news.example.com/a").await;
        assert_eq!(result, ExtractionResult::failed());
    }

    #[tokio::test]
    async fn test_fallback_with_no_paragraphs_fails() {
        let extractor = ContentExtractor::new(
            ArticleStrategy::new(Unreachable),
            ParagraphStrategy::new(StaticPage("<html><body><p>Too short.</p></body></html>")),
        );

        let result = extractor.extract("https://news.example.com/a").await;
        assert!(!result.success);
        assert!(result.text.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_url_never_panics() {
        let extractor = HttpContentExtractor::with_timeout(Duration::from_secs(1)).unwrap();
        let result = extractor.extract("not a url at all").await;
        assert_eq!(result, ExtractionResult::failed());
    }

    #[tokio::test]
    async fn test_unresponsive_server_times_out_as_failure() {
        // Accepts connections and never writes a byte.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let extractor = HttpContentExtractor::with_timeout(Duration::from_millis(500)).unwrap();
        let started = std::time::Instant::now();
        let result = extractor.extract(&format!("http://{addr}/story")).await;
        let elapsed = started.elapsed();
        server.abort();

        assert_eq!(result, ExtractionResult::failed());
        assert!(elapsed >= Duration::from_millis(900), "returned after {elapsed:?}");
        assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    }
}
