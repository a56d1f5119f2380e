use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Language, tables};

/// Raw per-language word lists.
///
/// Every field defaults to empty so a partial table (for example one loaded
/// from JSON) deserializes cleanly. Empty month, season and keyword lists are
/// later filled with generic English fragments; empty century lists disable
/// the century grammar for that language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub name: String,
    /// Twelve lists of month tokens, January first.
    pub months: Vec<Vec<String>>,
    pub spring: Vec<String>,
    pub summer: Vec<String>,
    pub autumn: Vec<String>,
    pub winter: Vec<String>,
    pub before: Vec<String>,
    pub after: Vec<String>,
    pub approximate: Vec<String>,
    pub uncertain: Vec<String>,
    pub century: Vec<String>,
    pub half: Vec<String>,
    pub third: Vec<String>,
    pub quarter: Vec<String>,
    pub last: Vec<String>,
    pub early: Vec<String>,
    pub mid: Vec<String>,
    pub late: Vec<String>,
    pub ordinals: BTreeMap<String, u32>,
    pub bc: Vec<String>,
    pub connectors: Vec<String>,
    /// Suffixes after a decade's first year ("1840s").
    pub decade_suffixes: Vec<String>,
    /// Suffixes after any four-digit year, which then starts a ten-year span
    /// ("1885er Jahre" is 1885-1894).
    pub decade_year_suffixes: Vec<String>,
    pub decade_prefixes: Vec<String>,
}

impl Vocabulary {
    /// The built-in table for `language`.
    pub fn builtin(language: Language) -> Self {
        tables::builtin(language)
    }

    /// Generic English months, seasons and before/after keywords only.
    pub fn fallback() -> Self {
        tables::fallback()
    }
}

/// Where a [`Languages`](super::Languages) registry gets its word lists.
///
/// Returning `None` makes the registry use [`Vocabulary::fallback`].
pub trait VocabularySource: Send + Sync {
    fn vocabulary(&self, language: Language) -> Option<Vocabulary>;
}

/// The tables compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinVocabulary;

impl VocabularySource for BuiltinVocabulary {
    fn vocabulary(&self, language: Language) -> Option<Vocabulary> {
        Some(Vocabulary::builtin(language))
    }
}

impl<F> VocabularySource for F
where
    F: Fn(Language) -> Option<Vocabulary> + Send + Sync,
{
    fn vocabulary(&self, language: Language) -> Option<Vocabulary> {
        self(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let vocab: Vocabulary = serde_json::from_str(r#"{"name": "test", "before": ["prior"]}"#).unwrap();
        assert_eq!(vocab.name, "test");
        assert_eq!(vocab.before, vec!["prior".to_string()]);
        assert!(vocab.months.is_empty());
        assert!(vocab.century.is_empty());
    }

    #[test]
    fn closures_are_sources() {
        let source = |language: Language| (language == Language::De).then(Vocabulary::fallback);
        assert!(source.vocabulary(Language::De).is_some());
        assert!(source.vocabulary(Language::Fr).is_none());
    }
}
