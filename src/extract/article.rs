//! Primary strategy: readability-style article parsing.

use super::ContentStrategy;
use super::fetch::PageFetcher;
use crate::error::ExtractError;
use crate::utils::parse_http_url;
use std::io::Cursor;
use tracing::{debug, instrument};

/// Fetches a page and keeps the main article body chosen by `readability`.
#[derive(Debug, Clone)]
pub struct ArticleStrategy<F> {
    fetcher: F,
}

impl<F> ArticleStrategy<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

impl<F: PageFetcher> ContentStrategy for ArticleStrategy<F> {
    fn name(&self) -> &'static str {
        "readability"
    }

    #[instrument(level = "debug", skip(self))]
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        let html = self.fetcher.fetch(url).await?;
        article_text(&html, url)
    }
}

/// Run the readability parser over `html` and return the article body text.
///
/// # Errors
///
/// [`ExtractError::Parse`] when `url` is not an http(s) URL, the parser
/// fails, or the chosen body has no text.
pub fn article_text(html: &str, url: &str) -> Result<String, ExtractError> {
    let base = parse_http_url(url)?;
    let mut reader = Cursor::new(html.as_bytes());

    let product = ::readability::extractor::extract(&mut reader, &base).map_err(|e| {
        ExtractError::Parse {
            url: url.to_string(),
            reason: format!("readability: {e:?}"),
        }
    })?;

    let text = product.text.trim();
    if text.is_empty() {
        return Err(ExtractError::Parse {
            url: url.to_string(),
            reason: "readability found no article text".to_string(),
        });
    }
    debug!(chars = text.len(), title = %product.title, "Readability extracted article");
    Ok(text.to_string())
}
