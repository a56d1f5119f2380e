//! Historical date expressions in, normalized intervals out.
//!
//! ```
//! use histospan::{Output, Scheme, Value, parse};
//!
//! let out = parse("5th century b.c.", Some("en"), Scheme::IsoFormat).unwrap();
//! assert_eq!(out, Output::One(Value::Iso(Some("-0500-12-31/-0401-01-01".into()))));
//! ```

#[macro_use]
mod macros;
mod api;
mod calendar;
mod engine;
mod error;
mod fuzzy;
mod language;
mod period;
mod rules;

pub use api::{
    Context, Entity, Input, Options, Output, ParseDetails, ParseResultVerbose, Parsed, Scheme, Value, parse,
    parse_verbose_with, parse_with,
};
pub use calendar::{HistoricalDate, Season, period_for_day, period_for_month, period_for_season, period_for_year};
pub use error::{DetectError, Error};
pub use language::{
    BuiltinVocabulary, KeywordDetector, Language, LanguageDetector, LanguageSpec, Languages, Vocabulary,
    VocabularySource,
};
pub use period::{Express, Fuzzy, Period, Span, TimeSpan};

// --- Internal types ---------------------------------------------------------

/// What a matcher sees: the normalized text, the same text with fuzziness
/// markers removed, the language and the ambient fuzziness.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'a> {
    /// Trimmed, lowercased input.
    pub text: &'a str,
    /// `text` without fuzziness markers.
    pub core: &'a str,
    pub spec: &'a LanguageSpec,
    pub fuzzy: Fuzzy,
}

pub(crate) type Production = fn(&Subject<'_>) -> Option<Period>;

/// A single-expression grammar: a name (reported in verbose output) and a
/// production that either claims the whole subject or declines.
pub(crate) struct Rule {
    pub name: &'static str,
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).field("production", &"<function>").finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// A period found in the input, with where it was found and by what.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Match {
    pub period: Period,
    pub range: Range,
    pub rule: &'static str,
}
