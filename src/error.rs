use thiserror::Error;

/// Errors surfaced by the public parsing entry points.
///
/// A text that does not parse is never an error: it yields an empty result.
/// Only caller mistakes and broken vocabularies end up here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid language code '{0}', expected one of: en, de, fr")]
    InvalidLanguage(String),

    #[error("the object scheme requires an explicit language")]
    LanguageRequired,

    #[error("invalid scheme '{0}', expected one of: time-span, iso-format, object")]
    InvalidScheme(String),

    #[error("failed to compile {language} patterns: {source}")]
    Pattern {
        language: String,
        #[source]
        source: regex::Error,
    },
}

/// Raised by a [`LanguageDetector`](crate::LanguageDetector) when it cannot
/// settle on any language. The engine falls back to English.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("language could not be determined")]
    Undetermined,
}
