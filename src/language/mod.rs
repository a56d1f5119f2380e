//! Language tables, their compiled grammars and the registry that caches
//! them.

mod detect;
mod patterns;
mod tables;
mod vocabulary;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::Month;
use log::debug;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

pub use detect::{KeywordDetector, LanguageDetector};
pub use vocabulary::{BuiltinVocabulary, Vocabulary, VocabularySource};

use crate::calendar::{Season, month_from_number};
use crate::error::Error;
use crate::fuzzy;
use crate::period::Express;
use crate::rules::portion::{Fraction, Portion};
use patterns::{Fragments, Patterns, alternation, loose_alternation};

/// Supported input languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Fr];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::De => 1,
            Language::Fr => 2,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "fr" => Ok(Language::Fr),
            _ => Err(Error::InvalidLanguage(s.to_string())),
        }
    }
}

/// A language's normalized token tables plus its compiled grammars.
///
/// Immutable once built. Shared read-only across threads through
/// [`Languages`].
pub struct LanguageSpec {
    name: String,
    months: HashMap<String, Month>,
    seasons: HashMap<String, Season>,
    before: Vec<String>,
    after: Vec<String>,
    approximate: Vec<String>,
    uncertain: Vec<String>,
    last: Vec<String>,
    portions: HashMap<String, Portion>,
    fractions: HashMap<String, Fraction>,
    ordinals: HashMap<String, u32>,
    patterns: Patterns,
}

impl fmt::Debug for LanguageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSpec")
            .field("name", &self.name)
            .field("months", &self.months.len())
            .field("ordinals", &self.ordinals.len())
            .field("century", &self.patterns.century.is_some())
            .finish()
    }
}

impl LanguageSpec {
    /// Normalize `vocab` and compile its grammars.
    ///
    /// Missing months, seasons and before/after keywords are filled from the
    /// generic English fragments.
    pub fn from_vocabulary(vocab: &Vocabulary) -> Result<Self, Error> {
        let generic = Vocabulary::fallback();

        let mut months = HashMap::new();
        let mut month_tokens = Vec::new();
        for index in 0..12 {
            let tokens = non_empty(vocab.months.get(index), generic.months.get(index));
            let Some(month) = month_from_number(index as u32 + 1) else { continue };
            for token in normalize(tokens) {
                months.entry(token.clone()).or_insert(month);
                month_tokens.push(token);
            }
        }

        let mut seasons = HashMap::new();
        let mut season_tokens = Vec::new();
        for (season, own, fallback) in [
            (Season::Spring, &vocab.spring, &generic.spring),
            (Season::Summer, &vocab.summer, &generic.summer),
            (Season::Autumn, &vocab.autumn, &generic.autumn),
            (Season::Winter, &vocab.winter, &generic.winter),
        ] {
            for token in normalize(non_empty(Some(own), Some(fallback))) {
                seasons.entry(token.clone()).or_insert(season);
                season_tokens.push(token);
            }
        }

        let before = normalize(non_empty(Some(&vocab.before), Some(&generic.before)));
        let after = normalize(non_empty(Some(&vocab.after), Some(&generic.after)));

        let mut portions = HashMap::new();
        for (portion, tokens) in [(Portion::Early, &vocab.early), (Portion::Mid, &vocab.mid), (Portion::Late, &vocab.late)] {
            for token in normalize(tokens) {
                portions.entry(token).or_insert(portion);
            }
        }

        let mut fractions = HashMap::new();
        for (fraction, tokens) in
            [(Fraction::Half, &vocab.half), (Fraction::Third, &vocab.third), (Fraction::Quarter, &vocab.quarter)]
        {
            for token in normalize(tokens) {
                fractions.entry(token).or_insert(fraction);
            }
        }

        let ordinals: HashMap<String, u32> = vocab
            .ordinals
            .iter()
            .map(|(token, n)| (token.trim().to_lowercase(), *n))
            .filter(|(token, _)| !token.is_empty())
            .collect();

        let fragments = Fragments {
            month: alternation(&by_length(month_tokens)).unwrap_or_default(),
            season: alternation(&by_length(season_tokens)).unwrap_or_default(),
            before: alternation(&before).unwrap_or_default(),
            after: alternation(&after).unwrap_or_default(),
            connector: alternation(&normalize(&vocab.connectors)),
            ordinal: alternation(&by_length(ordinals.keys().cloned().collect()))
                .map(|alt| format!(r"(?:{alt}|{NUMERIC_ORDINAL})")),
            century: alternation(&normalize(&vocab.century)),
            fraction: alternation(&by_length(fractions.keys().cloned().collect())),
            modifier: alternation(&by_length(portions.keys().cloned().collect())),
            bc: loose_alternation(&normalize(&vocab.bc)),
            decade_suffix: alternation(&normalize(&vocab.decade_suffixes)),
            decade_year_suffix: alternation(&normalize(&vocab.decade_year_suffixes)),
            decade_prefix: alternation(&normalize(&vocab.decade_prefixes)),
        };

        let name = if vocab.name.is_empty() { "unnamed".to_string() } else { vocab.name.clone() };
        let patterns =
            Patterns::compile(&fragments).map_err(|source| Error::Pattern { language: name.clone(), source })?;
        debug!(
            "compiled {} patterns: {} month tokens, {} ordinals, century grammar: {}",
            name,
            months.len(),
            ordinals.len(),
            patterns.century.is_some()
        );

        Ok(Self {
            name,
            months,
            seasons,
            before,
            after,
            approximate: normalize(&vocab.approximate),
            uncertain: normalize(&vocab.uncertain),
            last: normalize(&vocab.last),
            portions,
            fractions,
            ordinals,
            patterns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Month named by `token` (lowercase, without trailing period).
    pub fn month(&self, token: &str) -> Option<Month> {
        self.months.get(token.trim_end_matches('.')).copied()
    }

    pub fn season(&self, token: &str) -> Option<Season> {
        self.seasons.get(token).copied()
    }

    /// Resolve an ordinal token: first the table, then its leading digits.
    pub fn parse_ordinal(&self, token: &str) -> Option<u32> {
        let token = token.trim();
        if let Some(n) = self.ordinals.get(token) {
            return Some(*n);
        }
        let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().ok()
    }

    pub fn approximate(&self) -> &[String] {
        &self.approximate
    }

    pub fn uncertain(&self) -> &[String] {
        &self.uncertain
    }

    pub fn before(&self) -> &[String] {
        &self.before
    }

    pub fn after(&self) -> &[String] {
        &self.after
    }

    /// Does `text` contain a "last" token ("last third", "letztes Viertel")?
    pub fn mentions_last(&self, text: &str) -> bool {
        self.last.iter().any(|token| fuzzy::contains_token(text, token))
    }

    /// Openness announced by a leading before/after keyword.
    pub fn leading_keyword(&self, text: &str) -> Option<Express> {
        if self.before.iter().any(|token| fuzzy::starts_with_token(text, token)) {
            return Some(Express::Before);
        }
        if self.after.iter().any(|token| fuzzy::starts_with_token(text, token)) {
            return Some(Express::After);
        }
        None
    }

    pub(crate) fn portion(&self, token: &str) -> Option<Portion> {
        self.portions.get(token).copied()
    }

    pub(crate) fn fraction(&self, token: &str) -> Option<Fraction> {
        self.fractions.get(token).copied()
    }

    pub(crate) fn patterns(&self) -> &Patterns {
        &self.patterns
    }
}

/// Digits with any common ordinal suffix ("21th", "4e"), for ordinals the
/// tables do not list.
const NUMERIC_ORDINAL: &str = r"\d{1,2}(?:st|nd|rd|th|ème|eme|er|re|e|\.)?";

fn non_empty<'a>(own: Option<&'a Vec<String>>, fallback: Option<&'a Vec<String>>) -> &'a [String] {
    match own {
        Some(tokens) if tokens.iter().any(|t| !t.trim().is_empty()) => tokens.as_slice(),
        _ => fallback.map(Vec::as_slice).unwrap_or_default(),
    }
}

/// Lowercase, collapse whitespace, drop blanks and duplicates, longest first.
fn normalize(tokens: &[String]) -> Vec<String> {
    by_length(tokens.iter().map(|t| collapse_whitespace(&t.to_lowercase())).filter(|t| !t.is_empty()).collect())
}

fn by_length(mut tokens: Vec<String>) -> Vec<String> {
    tokens.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
    tokens.dedup();
    tokens
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lazily built [`LanguageSpec`]s, one per language.
///
/// Each spec is built at most once, on first use, and then shared. A source
/// that has no vocabulary for a language gets the generic fallback table.
pub struct Languages {
    source: Box<dyn VocabularySource>,
    specs: [OnceCell<LanguageSpec>; 3],
}

impl Languages {
    pub fn new(source: impl VocabularySource + 'static) -> Self {
        Self { source: Box::new(source), specs: Default::default() }
    }

    pub fn get(&self, language: Language) -> Result<&LanguageSpec, Error> {
        self.specs[language.index()].get_or_try_init(|| self.build(language))
    }

    /// Build every language up front instead of on first use.
    pub fn warm(&self) -> Result<(), Error> {
        for language in Language::ALL {
            self.get(language)?;
        }
        Ok(())
    }

    fn build(&self, language: Language) -> Result<LanguageSpec, Error> {
        match self.source.vocabulary(language) {
            Some(vocab) => LanguageSpec::from_vocabulary(&vocab),
            None => {
                debug!("no vocabulary for {language}, using generic fallback");
                LanguageSpec::from_vocabulary(&Vocabulary::fallback())
            }
        }
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(BuiltinVocabulary)
    }
}

impl fmt::Debug for Languages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built: Vec<Language> = Language::ALL.into_iter().filter(|l| self.specs[l.index()].get().is_some()).collect();
        f.debug_struct("Languages").field("built", &built).finish()
    }
}
