//! Trending topic and article URL discovery.
//!
//! Topics are the link texts of a news listing page (Google News by default).
//! URL discovery is static: every topic maps to the same configured URL list,
//! which defaults to [`DEFAULT_ARTICLE_URLS`].

use crate::error::TopicError;
use itertools::Itertools;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};

/// Listing page scraped for trending topics.
pub const DEFAULT_TRENDING_URL: &str = "https://news.google.com";

/// Number of topics kept from the listing page.
pub const DEFAULT_MAX_TOPICS: usize = 10;

/// Article URLs analyzed for every topic when none are configured.
pub const DEFAULT_ARTICLE_URLS: &[&str] = &[
    "https://www.hindustantimes.com/india-news/maldives-and-india-reaffirm-relations-during-pm-modis-visit-101690348761123.html",
    "https://indianexpress.com/article/india/pm-modi-visit-maldives-diplomatic-ties-8865512/",
];

/// Fetch `listing_url` and return up to `limit` distinct link texts.
#[instrument(level = "info", skip(client))]
pub async fn trending_topics(
    client: &Client,
    listing_url: &str,
    limit: usize,
) -> Result<Vec<String>, TopicError> {
    let fetch_err = |e| TopicError::Fetch {
        url: listing_url.to_string(),
        source: e,
    };
    let html = client
        .get(listing_url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(fetch_err)?
        .text()
        .await
        .map_err(fetch_err)?;

    let topics = topics_from_html(&html, limit)?;
    info!(count = topics.len(), source = listing_url, "Discovered trending topics");
    debug!(?topics, "Trending topics");
    Ok(topics)
}

/// Distinct, trimmed, non-empty `<a>` texts in document order.
pub fn topics_from_html(html: &str, limit: usize) -> Result<Vec<String>, TopicError> {
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse("a").map_err(|e| TopicError::Selector(format!("{e:?}")))?;

    let topics = document
        .select(&link_selector)
        .map(|a| a.text().collect::<Vec<_>>().join(" "))
        .map(|t| t.split_whitespace().join(" "))
        .filter(|t| !t.is_empty())
        .unique()
        .take(limit)
        .collect();
    Ok(topics)
}

/// Article URLs to analyze for `topic`.
///
/// Returns `configured` when it is non-empty, otherwise the built-in list.
pub fn urls_for_topic(topic: &str, configured: &[String]) -> Vec<String> {
    let urls: Vec<String> = if configured.is_empty() {
        DEFAULT_ARTICLE_URLS.iter().map(|u| u.to_string()).collect()
    } else {
        configured.to_vec()
    };
    debug!(%topic, count = urls.len(), "Resolved topic URLs");
    urls
}
