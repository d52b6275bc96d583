//! Fallback strategy: paragraph scraping from raw HTML.
//!
//! Non-content subtrees (`script`, `style`, `nav`, `header`, `footer`,
//! `aside`) are ignored. Paragraphs are taken from the first `<article>` when
//! the page has one, otherwise from the whole document, and only paragraphs
//! of more than [`MIN_PARAGRAPH_WORDS`] words are kept.

use super::ContentStrategy;
use super::fetch::PageFetcher;
use crate::error::ExtractError;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

/// Paragraphs with this many words or fewer are treated as captions, bylines, or ads.
pub const MIN_PARAGRAPH_WORDS: usize = 5;

const NOISE_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article").expect("article selector parses"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("paragraph selector parses"));

/// Fetches raw HTML and keeps its substantial paragraphs.
#[derive(Debug, Clone)]
pub struct ParagraphStrategy<F> {
    fetcher: F,
}

impl<F> ParagraphStrategy<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

impl<F: PageFetcher> ContentStrategy for ParagraphStrategy<F> {
    fn name(&self) -> &'static str {
        "paragraphs"
    }

    #[instrument(level = "debug", skip(self))]
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        let html = self.fetcher.fetch(url).await?;
        Ok(paragraph_text(&html))
    }
}

fn is_noise(element: ElementRef<'_>) -> bool {
    NOISE_TAGS.contains(&element.value().name())
}

fn inside_noise(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(is_noise)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            if !is_noise(child) {
                collect_text(child, out);
            }
        }
    }
}

/// Visible text of an element with whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract newline-joined paragraph text from an HTML document.
///
/// Returns an empty string when nothing survives the filters.
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let article = document
        .select(&ARTICLE_SELECTOR)
        .find(|el| !inside_noise(*el));

    let paragraphs: Vec<ElementRef<'_>> = match article {
        Some(article) => article.select(&PARAGRAPH_SELECTOR).collect(),
        None => document.select(&PARAGRAPH_SELECTOR).collect(),
    };

    let kept: Vec<String> = paragraphs
        .into_iter()
        .filter(|p| !inside_noise(*p))
        .map(element_text)
        .filter(|text| text.split_whitespace().count() > MIN_PARAGRAPH_WORDS)
        .collect();

    debug!(
        from_article = article.is_some(),
        paragraphs = kept.len(),
        "Scraped paragraphs"
    );
    kept.join("\n").trim().to_string()
}
