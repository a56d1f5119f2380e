use std::collections::HashSet;

use log::trace;

use super::{Language, Vocabulary};
use crate::error::DetectError;

/// Guesses the language of a batch of texts.
///
/// Implementations return candidates ordered best first; the engine uses the
/// first one and falls back to English on error or an empty list.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, texts: &[&str]) -> Result<Vec<Language>, DetectError>;
}

/// Vocabulary-overlap detector.
///
/// Counts words of four or more characters that appear in each language's
/// built-in tables. When nothing matches, a handful of short telltale words
/// decides ("jh", "av", "bc").
#[derive(Debug, Clone)]
pub struct KeywordDetector {
    words: Vec<(Language, HashSet<String>)>,
}

const HINTS: [(Language, &[&str]); 3] = [
    (Language::En, &["january", "century", "bc", "after", "and"]),
    (Language::De, &["januar", "jahrhundert", "jh", "vor", "und"]),
    (Language::Fr, &["janvier", "siècle", "av", "jc", "et"]),
];

impl KeywordDetector {
    pub fn new() -> Self {
        let words = Language::ALL.into_iter().map(|language| (language, words_of(&Vocabulary::builtin(language)))).collect();
        Self { words }
    }
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for KeywordDetector {
    fn detect(&self, texts: &[&str]) -> Result<Vec<Language>, DetectError> {
        let tokens: Vec<String> = texts
            .iter()
            .flat_map(|text| regex!(r"[\w\-\.']+").find_iter(text).map(|m| m.as_str().to_lowercase()))
            .collect();

        let long: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| t.chars().count() >= 4 && !t.chars().all(|c| c.is_ascii_digit()))
            .collect();
        let scores: Vec<(Language, usize)> = self
            .words
            .iter()
            .map(|(language, words)| (*language, long.iter().filter(|t| words.contains(**t)).count()))
            .collect();
        trace!("keyword scores: {scores:?}");
        if let Some(ranked) = ranked(scores) {
            return Ok(ranked);
        }

        let scores: Vec<(Language, usize)> = HINTS
            .iter()
            .map(|(language, hints)| {
                let hits = tokens.iter().filter(|t| hints.contains(&t.trim_end_matches('.'))).count();
                (*language, hits)
            })
            .collect();
        trace!("hint scores: {scores:?}");
        ranked(scores).ok_or(DetectError::Undetermined)
    }
}

/// Languages with a positive score, best first. Ties keep `Language::ALL`
/// order.
fn ranked(mut scores: Vec<(Language, usize)>) -> Option<Vec<Language>> {
    scores.retain(|(_, score)| *score > 0);
    if scores.is_empty() {
        return None;
    }
    scores.sort_by(|a, b| b.1.cmp(&a.1));
    Some(scores.into_iter().map(|(language, _)| language).collect())
}

fn words_of(vocab: &Vocabulary) -> HashSet<String> {
    let lists = [
        &vocab.spring,
        &vocab.summer,
        &vocab.autumn,
        &vocab.winter,
        &vocab.before,
        &vocab.after,
        &vocab.approximate,
        &vocab.uncertain,
        &vocab.century,
        &vocab.half,
        &vocab.third,
        &vocab.quarter,
        &vocab.last,
        &vocab.early,
        &vocab.mid,
        &vocab.late,
        &vocab.connectors,
    ];
    vocab
        .months
        .iter()
        .chain(lists)
        .flatten()
        .chain(vocab.ordinals.keys())
        .flat_map(|phrase| phrase.split_whitespace())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(texts: &[&str]) -> Result<Vec<Language>, DetectError> {
        KeywordDetector::new().detect(texts)
    }

    #[test]
    fn picks_language_from_vocabulary() {
        assert_eq!(detect(&["13. Juli 1882"]).unwrap()[0], Language::De);
        assert_eq!(detect(&["Autumn 1945"]).unwrap()[0], Language::En);
        assert_eq!(detect(&["vers 1850", "printemps 1901"]).unwrap()[0], Language::Fr);
    }

    #[test]
    fn short_hints_break_silence() {
        assert_eq!(detect(&["19. Jh."]).unwrap()[0], Language::De);
        assert_eq!(detect(&["5 av. JC"]).unwrap()[0], Language::Fr);
    }

    #[test]
    fn bare_numbers_are_undetermined() {
        assert_eq!(detect(&["1460"]), Err(DetectError::Undetermined));
        assert_eq!(detect(&[]), Err(DetectError::Undetermined));
    }
}
