//! Fuzziness markers: classification and removal.
//!
//! Marker matching is word-boundary aware at alphanumeric edges, so "um"
//! does not fire inside "Datum" while "~" and "?" match anywhere.

use crate::language::LanguageSpec;
use crate::period::Fuzzy;

const GENERIC_APPROXIMATE: [&str; 3] = ["circa", "ca.", "ca"];
const GENERIC_UNCERTAIN: [&str; 3] = ["uncertain", "perhaps", "probably"];

/// Approximate markers are checked first; an uncertain marker wins over them.
pub(crate) fn classify(text: &str, spec: &LanguageSpec) -> Fuzzy {
    let mut fuzzy = Fuzzy::Exact;
    if is_approximate(text, spec) {
        fuzzy = Fuzzy::Approximate;
    }
    if is_uncertain(text, spec) {
        fuzzy = Fuzzy::Uncertain;
    }
    fuzzy
}

pub(crate) fn is_approximate(text: &str, spec: &LanguageSpec) -> bool {
    any_token(text, spec.approximate().iter().map(String::as_str).chain(GENERIC_APPROXIMATE))
}

pub(crate) fn is_uncertain(text: &str, spec: &LanguageSpec) -> bool {
    any_token(text, spec.uncertain().iter().map(String::as_str).chain(GENERIC_UNCERTAIN))
}

fn any_token<'a>(text: &str, mut tokens: impl Iterator<Item = &'a str>) -> bool {
    tokens.any(|token| contains_token(text, token))
}

/// `text` with every fuzziness marker removed, whitespace collapsed and
/// stray leading/trailing punctuation trimmed.
pub(crate) fn strip_markers(text: &str, spec: &LanguageSpec) -> String {
    let mut tokens: Vec<&str> = spec
        .approximate()
        .iter()
        .chain(spec.uncertain())
        .map(String::as_str)
        .chain(GENERIC_APPROXIMATE)
        .chain(GENERIC_UNCERTAIN)
        .collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let mut out = text.to_string();
    for token in tokens {
        out = remove_token(&out, token);
    }
    out.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| matches!(c, ',' | ';' | ':') || c.is_whitespace())
        .to_string()
}

fn remove_token(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in text.match_indices(token) {
        if start < last {
            continue;
        }
        let end = start + token.len();
        if bounded(text, start, end, token) {
            out.push_str(&text[last..start]);
            out.push(' ');
            last = end;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Is `token` present in `text` as a whole word?
pub(crate) fn contains_token(text: &str, token: &str) -> bool {
    !token.is_empty() && text.match_indices(token).any(|(start, _)| bounded(text, start, start + token.len(), token))
}

/// Does `text` begin with `token` as a whole word?
pub(crate) fn starts_with_token(text: &str, token: &str) -> bool {
    !token.is_empty() && text.starts_with(token) && bounded(text, 0, token.len(), token)
}

fn bounded(text: &str, start: usize, end: usize, token: &str) -> bool {
    let opens_word = token.chars().next().is_some_and(char::is_alphanumeric);
    let closes_word = token.chars().next_back().is_some_and(char::is_alphanumeric);
    let before_ok = !opens_word || text[..start].chars().next_back().is_none_or(|c| !c.is_alphanumeric());
    let after_ok = !closes_word || text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());
    before_ok && after_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{Language, Languages};

    #[test]
    fn classification_prefers_uncertain() {
        let languages = Languages::default();
        let de = languages.get(Language::De).unwrap();
        assert_eq!(classify("ca. 1920", de), Fuzzy::Approximate);
        assert_eq!(classify("etwa 1550er jahre", de), Fuzzy::Uncertain);
        assert_eq!(classify("ca. 1920 ?", de), Fuzzy::Uncertain);
        assert_eq!(classify("1920", de), Fuzzy::Exact);
        assert_eq!(classify("datum 1920", de), Fuzzy::Exact);
    }

    #[test]
    fn generic_markers_apply_to_every_language() {
        let languages = Languages::default();
        let fr = languages.get(Language::Fr).unwrap();
        assert_eq!(classify("perhaps 1920", fr), Fuzzy::Uncertain);
        assert_eq!(classify("circa 1920", fr), Fuzzy::Approximate);
    }

    #[test]
    fn stripping_leaves_the_date() {
        let languages = Languages::default();
        let en = languages.get(Language::En).unwrap();
        assert_eq!(strip_markers("circa 18th century", en), "18th century");
        assert_eq!(strip_markers("ca. 1920", en), "1920");
        assert_eq!(strip_markers("1842?", en), "1842");
        assert_eq!(strip_markers("about, 1900", en), "1900");
        assert_eq!(strip_markers("5th century b.c.", en), "5th century b.c.");

        let de = languages.get(Language::De).unwrap();
        assert_eq!(strip_markers("um 1900", de), "1900");
        assert_eq!(strip_markers("datum 1900", de), "datum 1900");
    }

    #[test]
    fn token_boundaries() {
        assert!(contains_token("ca. 1920", "ca"));
        assert!(!contains_token("cabinet 1920", "ca"));
        assert!(contains_token("1842?", "?"));
        assert!(starts_with_token("vor 1850", "vor"));
        assert!(!starts_with_token("vorwerk", "vor"));
    }
}
