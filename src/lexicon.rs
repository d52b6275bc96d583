//! The bias lexicon: phrase to signed weight.
//!
//! The lexicon is loaded once at startup, either from the built-in
//! [`DEFAULT_LEXICON`] table or from a YAML file mapping phrases to integer
//! weights (JSON files work too). After loading it is never mutated and is
//! passed by reference to [`score_bias`](crate::bias::score_bias).
//!
//! Phrases are normalized with the same rule the scorer applies to article
//! text, so an entry like `so-called` is stored as `socalled`.

use crate::bias::normalize_text;
use crate::error::LexiconError;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument};

/// Built-in table of bias-indicative phrases and their weights.
pub const DEFAULT_LEXICON: &[(&str, i32)] = &[
    ("allegedly", 1),
    ("apparently", 1),
    ("claims", 1),
    ("supposedly", 1),
    ("reportedly", 1),
    ("so-called", 1),
    ("admittedly", 1),
    ("arguably", 1),
    ("undeniable", 1),
    ("clearly", 1),
    ("just", 1),
    ("only", 1),
    ("even", 1),
    ("naturally", 1),
    ("of course", 1),
    ("fortunately", 1),
    ("unfortunately", 1),
    ("notably", 1),
    ("remarkably", 1),
    ("significantly", 1),
    ("shocking", 1),
    ("important", 1),
    ("controversial", 1),
    ("disputed", 1),
    ("debated", 1),
    ("biased", 1),
    ("unbiased", -1),
    ("neutral", -1),
    ("terrorist", 2),
    ("freedom", -1),
    ("regime", 2),
    ("heroic", -1),
    ("tyrant", 2),
    ("corrupt", 2),
    ("elite", 1),
    ("grassroots", -1),
    ("authoritarian", 2),
    ("patriot", -1),
    ("enemy", 1),
    ("scandal", 2),
    ("agenda", 1),
    ("radical", 2),
    ("extremist", 2),
    ("fascist", 2),
    ("communist", 2),
    ("capitalist", 2),
    ("manipulate", 2),
    ("mislead", 2),
    ("spin", 1),
    ("objective", -1),
    ("fair", -1),
    ("balanced", -1),
    ("fact", -1),
    ("truth", -1),
    ("admits", 1),
    ("refuses to comment", 1),
    ("shocking revelation", 2),
    ("critics say", 1),
    ("supporters claim", 1),
    ("according to unnamed sources", 2),
    ("is widely regarded as", 1),
    ("has been accused of", 2),
    ("is known for", 1),
    ("self-described", 1),
    ("repeatedly stated", 1),
    ("makes the case that", 1),
    ("alleged", 1),
    ("purported", 1),
    ("reputed", 1),
    ("presumably", 1),
    ("some believe", 1),
    ("others argue", 1),
    ("acknowledged", 1),
];

/// A single normalized lexicon phrase and its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub phrase: String,
    pub weight: i32,
}

/// An immutable, ordered set of [`LexiconEntry`] values.
///
/// Entry order is the order of the source table and determines the order of
/// matches in a [`BiasReport`](crate::models::BiasReport).
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Build a lexicon from `(phrase, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Fails if the list is empty, a phrase normalizes to nothing, or two
    /// phrases normalize to the same string.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut seen = HashSet::new();

        for (raw, weight) in pairs {
            let raw = raw.as_ref();
            let phrase = normalize_text(raw);
            if phrase.is_empty() {
                return Err(LexiconError::InvalidEntry {
                    phrase: raw.to_string(),
                    reason: "phrase is empty after normalization".to_string(),
                });
            }
            if !seen.insert(phrase.clone()) {
                return Err(LexiconError::InvalidEntry {
                    phrase: raw.to_string(),
                    reason: format!("duplicates another entry once normalized ({phrase:?})"),
                });
            }
            entries.push(LexiconEntry { phrase, weight });
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { entries })
    }

    /// The built-in lexicon.
    pub fn builtin() -> Self {
        Self::from_pairs(DEFAULT_LEXICON.iter().copied())
            .expect("built-in lexicon is valid")
    }

    /// Parse a lexicon from YAML (or JSON) text holding a phrase→weight mapping.
    pub fn from_yaml_str(source: &str, origin: &str) -> Result<Self, LexiconError> {
        let mapping: Mapping =
            serde_yaml::from_str(source).map_err(|e| LexiconError::Malformed {
                path: origin.to_string(),
                source: e,
            })?;

        let mut pairs = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let phrase = match key {
                Value::String(s) => s,
                other => {
                    return Err(LexiconError::InvalidEntry {
                        phrase: format!("{other:?}"),
                        reason: "phrase must be a string".to_string(),
                    });
                }
            };
            let weight = value
                .as_i64()
                .and_then(|w| i32::try_from(w).ok())
                .ok_or_else(|| LexiconError::InvalidEntry {
                    phrase: phrase.clone(),
                    reason: format!("weight must be an integer, got {value:?}"),
                })?;
            pairs.push((phrase, weight));
        }

        Self::from_pairs(pairs)
    }

    /// Load a lexicon file from disk.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LexiconError::Io {
                path: origin.clone(),
                source: e,
            })?;
        let lexicon = Self::from_yaml_str(&source, &origin)?;
        info!(entries = lexicon.len(), "Loaded lexicon file");
        Ok(lexicon)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_keeps_table_order() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.len(), DEFAULT_LEXICON.len());
        assert_eq!(lexicon.entries()[0].phrase, "allegedly");
        assert_eq!(lexicon.entries().last().unwrap().phrase, "acknowledged");
    }

    #[test]
    fn test_phrases_are_normalized() {
        let lexicon = Lexicon::builtin();
        let phrases: Vec<&str> = lexicon.entries().iter().map(|e| e.phrase.as_str()).collect();
        assert!(phrases.contains(&"socalled"));
        assert!(phrases.contains(&"selfdescribed"));
        assert!(phrases.contains(&"according to unnamed sources"));
    }

    #[test]
    fn test_from_yaml_mapping() {
        let yaml = "alleged: 1\nFreedom: -1\n\"Critics  Say\": 2\n";
        let lexicon = Lexicon::from_yaml_str(yaml, "inline").unwrap();
        assert_eq!(
            lexicon.entries(),
            &[
                LexiconEntry { phrase: "alleged".into(), weight: 1 },
                LexiconEntry { phrase: "freedom".into(), weight: -1 },
                LexiconEntry { phrase: "critics say".into(), weight: 2 },
            ]
        );
    }

    #[test]
    fn test_from_json_mapping() {
        let json = r#"{"regime": 2, "neutral": -1}"#;
        let lexicon = Lexicon::from_yaml_str(json, "inline.json").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.entries()[1].weight, -1);
    }

    #[test]
    fn test_rejects_non_integer_weight() {
        let err = Lexicon::from_yaml_str("alleged: 1.5\n", "inline").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry { .. }));
    }

    #[test]
    fn test_rejects_punctuation_only_phrase() {
        let err = Lexicon::from_pairs([("--", 1)]).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry { .. }));
    }

    #[test]
    fn test_rejects_duplicates_after_normalization() {
        let err = Lexicon::from_pairs([("so-called", 1), ("socalled", 2)]).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry { .. }));
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(matches!(
            Lexicon::from_pairs(Vec::<(&str, i32)>::new()),
            Err(LexiconError::Empty)
        ));
        assert!(matches!(
            Lexicon::from_yaml_str("- just\n- a list\n", "inline"),
            Err(LexiconError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Lexicon::load("/definitely/not/here.yaml").await.unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.yaml");
        std::fs::write(&path, "scandal: 2\nfair: -1\n").unwrap();

        let lexicon = Lexicon::load(&path).await.unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.entries()[0].phrase, "scandal");
    }
}
