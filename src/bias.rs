//! Lexicon-based bias scoring.
//!
//! Text is normalized (lowercased, ASCII punctuation removed, whitespace
//! collapsed) and every lexicon phrase is counted as a literal, non-overlapping
//! substring of the normalized text. Matching is not word-bounded:
//! `fact` also matches inside `factual`.
//!
//! ```text
//! raw_score = Σ count(phrase) * weight(phrase)
//! density   = round(raw_score / total_words * 100, 2)
//! ```

use crate::lexicon::Lexicon;
use crate::models::{BiasMatch, BiasReport};
use tracing::debug;

/// Lowercase, drop ASCII punctuation, and collapse whitespace to single spaces.
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Round to two decimal places, ties to even on the exact binary value.
///
/// Goes through the `{:.2}` formatter, which rounds the exact value of the
/// float, so `0.125` becomes `0.12` rather than `0.13`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse::<f64>().unwrap_or(value) + 0.0
}

/// Score `text` against `lexicon`.
///
/// Pure and deterministic: identical inputs always give an identical report.
/// Matches are listed in lexicon order.
pub fn score_bias(text: &str, lexicon: &Lexicon) -> BiasReport {
    let normalized = normalize_text(text);
    let total_words = normalized.split_whitespace().count();
    if total_words == 0 {
        return BiasReport::empty();
    }

    let mut raw_score: i64 = 0;
    let mut matches = Vec::new();
    for entry in lexicon.entries() {
        let count = normalized.matches(entry.phrase.as_str()).count();
        if count == 0 {
            continue;
        }
        raw_score += count as i64 * i64::from(entry.weight);
        matches.push(BiasMatch {
            phrase: entry.phrase.clone(),
            count,
            weight: entry.weight,
        });
    }

    let density = round2(raw_score as f64 / total_words as f64 * 100.0);
    debug!(?matches, raw_score, total_words, density, "Scored bias");

    BiasReport {
        density,
        matches,
        raw_score,
        total_words,
    }
}
