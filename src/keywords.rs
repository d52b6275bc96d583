//! Key phrase ranking (RAKE).
//!
//! Text is lowercased and split into word and punctuation tokens. Stopwords
//! and punctuation break the token stream into candidate phrases. Every
//! phrase occurrence adds co-occurrence edges between all of its words
//! (self-loops included), and each distinct phrase is scored as the sum of
//! `degree(word) / frequency(word)` over its words.
//!
//! Only phrases of two or more words are returned.

use crate::models::KeywordEntry;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Number of phrases returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_N: usize = 3;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+|[^\w\s]+").expect("token pattern compiles"));

/// English stopwords (NLTK list, contractions split at the apostrophe).
fn stopwords() -> &'static HashSet<&'static str> {
    static SET: Lazy<HashSet<&'static str>> = Lazy::new(|| {
        [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
            "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
            "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
            "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
            "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
            "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
            "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
            "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here",
            "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
            "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
            "than", "too", "very", "s", "t", "can", "will", "just", "don", "should", "now", "d",
            "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn",
            "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn",
            "weren", "won", "wouldn",
        ]
        .into_iter()
        .collect()
    });
    &SET
}

fn is_delimiter(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric) || stopwords().contains(token)
}

/// Split text into candidate phrases, in order of appearance (repeats kept).
fn candidate_phrases(text: &str) -> Vec<Vec<String>> {
    let lowered = text.to_lowercase();
    let mut phrases = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for token in TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()) {
        if is_delimiter(token) {
            if !current.is_empty() {
                phrases.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token.to_string());
        }
    }
    if !current.is_empty() {
        phrases.push(current);
    }
    phrases
}

/// Word co-occurrence counts over all phrase occurrences.
#[derive(Debug, Default)]
struct CooccurrenceGraph<'a> {
    edges: HashMap<&'a str, HashMap<&'a str, usize>>,
    frequency: HashMap<&'a str, usize>,
}

impl<'a> CooccurrenceGraph<'a> {
    fn build(phrases: &'a [Vec<String>]) -> Self {
        let mut graph = Self::default();
        for phrase in phrases {
            for word in phrase {
                *graph.frequency.entry(word).or_default() += 1;
                let row = graph.edges.entry(word).or_default();
                for coword in phrase {
                    *row.entry(coword).or_default() += 1;
                }
            }
        }
        graph
    }

    fn degree(&self, word: &str) -> usize {
        self.edges
            .get(word)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }

    fn word_score(&self, word: &str) -> f64 {
        match self.frequency.get(word) {
            Some(&freq) if freq > 0 => self.degree(word) as f64 / freq as f64,
            _ => 0.0,
        }
    }
}

/// Rank the multi-word phrases of `text` and return the best `top_n`.
///
/// Sorted by descending score. Equal scores keep the order in which the
/// phrases first appeared. Empty text, or text without any multi-word
/// phrase, gives an empty result.
pub fn rank_phrases(text: &str, top_n: usize) -> Vec<KeywordEntry> {
    let phrases = candidate_phrases(text);
    if phrases.is_empty() || top_n == 0 {
        return Vec::new();
    }
    let graph = CooccurrenceGraph::build(&phrases);

    let mut ranked: Vec<KeywordEntry> = phrases
        .iter()
        .unique()
        .filter(|phrase| phrase.len() >= 2)
        .map(|phrase| KeywordEntry {
            phrase: phrase.join(" "),
            score: phrase.iter().map(|w| graph.word_score(w)).sum(),
            word_count: phrase.len(),
        })
        .collect();

    // `sort_by` is stable, so ties stay in first-seen order.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(top_n);
    ranked
}
