//! Error types for the extraction, lexicon, and topic discovery stages.
//!
//! Only [`LexiconError`] is allowed to stop the process. [`ExtractError`] never
//! leaves the content extractor (it is folded into an
//! [`ExtractionResult`](crate::models::ExtractionResult)), and [`TopicError`]
//! is only fatal when no topics were supplied on the command line.

use thiserror::Error;

/// A failure inside a single extraction strategy.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Network failure or timeout while fetching the page.
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// The URL or document could not be parsed, or yielded no usable text.
    #[error("parse failed for {url}: {reason}")]
    Parse { url: String, reason: String },
}

/// The bias lexicon could not be loaded.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("lexicon entry {phrase:?}: {reason}")]
    InvalidEntry { phrase: String, reason: String },

    #[error("lexicon is empty")]
    Empty,
}

/// Trending topic discovery failed.
#[derive(Debug, Error)]
pub enum TopicError {
    #[error("failed to fetch trending page {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid selector: {0}")]
    Selector(String),
}
