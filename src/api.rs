use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::engine::{self, Resolution, Resolved};
use crate::error::Error;
use crate::language::{KeywordDetector, Language, LanguageDetector, Languages, VocabularySource};
use crate::period::{Fuzzy, Period, TimeSpan};
use crate::Match;

static DEFAULT_CONTEXT: Lazy<Context> = Lazy::new(Context::default);

/// Parsing context.
///
/// Holds the language registry and the detector used when no language is
/// given. Build one and share it; every language's tables are compiled once
/// per context, on first use.
pub struct Context {
    languages: Languages,
    detector: Box<dyn LanguageDetector>,
}

impl Context {
    pub fn new(languages: Languages, detector: impl LanguageDetector + 'static) -> Self {
        Self { languages, detector: Box::new(detector) }
    }

    /// Built-in detector, custom vocabularies.
    pub fn with_vocabulary(source: impl VocabularySource + 'static) -> Self {
        Self::new(Languages::new(source), KeywordDetector::new())
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn detector(&self) -> &dyn LanguageDetector {
        self.detector.as_ref()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Languages::default(), KeywordDetector::new())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").field("languages", &self.languages).field("detector", &"<detector>").finish()
    }
}

/// Output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// `(start year, end year)`, infinite for open ends, NaN when unknown.
    #[default]
    TimeSpan,
    /// `start/end`, `..end`, `start..`, or `None` when unknown.
    IsoFormat,
    /// A [`Parsed`] record. Requires an explicit language.
    Object,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::TimeSpan => "time-span",
            Scheme::IsoFormat => "iso-format",
            Scheme::Object => "object",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time-span" => Ok(Scheme::TimeSpan),
            "iso-format" => Ok(Scheme::IsoFormat),
            "object" => Ok(Scheme::Object),
            _ => Err(Error::InvalidScheme(s.to_string())),
        }
    }
}

/// Options that affect parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// `None` lets the context's detector pick, per item.
    pub language: Option<Language>,
    pub scheme: Scheme,
}

impl Options {
    pub fn new(scheme: Scheme) -> Self {
        Self { language: None, scheme }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// A single (possibly missing) text or a batch of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    One(Option<&'a str>),
    Many(Vec<Option<&'a str>>),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::One(Some(text))
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(text: Option<&'a str>) -> Self {
        Input::One(text)
    }
}

impl<'a> From<&'a [&'a str]> for Input<'a> {
    fn from(texts: &'a [&'a str]) -> Self {
        Input::Many(texts.iter().copied().map(Some).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Input<'a> {
    fn from(texts: Vec<&'a str>) -> Self {
        Input::Many(texts.into_iter().map(Some).collect())
    }
}

impl<'a> From<Vec<Option<&'a str>>> for Input<'a> {
    fn from(texts: Vec<Option<&'a str>>) -> Self {
        Input::Many(texts)
    }
}

/// The structured result of the object scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parsed {
    /// The input exactly as given. `None` for a missing input.
    pub text: Option<String>,
    pub time_span: TimeSpan,
    pub iso_format: Option<String>,
    /// `-1` approximate, `0` exact, `1` uncertain.
    pub fuzzy: Fuzzy,
}

/// One result in the requested scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    TimeSpan(TimeSpan),
    Iso(Option<String>),
    Object(Parsed),
}

impl Value {
    fn render(scheme: Scheme, text: Option<&str>, period: &Period) -> Self {
        match scheme {
            Scheme::TimeSpan => Value::TimeSpan(period.time_span()),
            Scheme::IsoFormat => Value::Iso(period.iso_format()),
            Scheme::Object => Value::Object(Parsed {
                text: text.map(str::to_string),
                time_span: period.time_span(),
                iso_format: period.iso_format(),
                fuzzy: period.fuzzy(),
            }),
        }
    }

    pub fn time_span(&self) -> Option<TimeSpan> {
        match self {
            Value::TimeSpan(span) => Some(*span),
            Value::Object(parsed) => Some(parsed.time_span),
            Value::Iso(_) => None,
        }
    }

    pub fn iso_format(&self) -> Option<&str> {
        match self {
            Value::Iso(iso) => iso.as_deref(),
            Value::Object(parsed) => parsed.iso_format.as_deref(),
            Value::TimeSpan(_) => None,
        }
    }

    pub fn parsed(&self) -> Option<&Parsed> {
        match self {
            Value::Object(parsed) => Some(parsed),
            _ => None,
        }
    }
}

/// Result of [`parse`] and [`parse_with`].
///
/// A single input yields [`Output::One`] unless it holds several dates. A
/// batch always yields [`Output::Many`], flattened: an item with several
/// dates contributes several values at its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    One(Value),
    Many(Vec<Value>),
}

impl Output {
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::One(value) => vec![value],
            Output::Many(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Output::One(_) => 1,
            Output::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A date found in the input, for verbose output.
///
/// `start`/`end` are byte offsets into the normalized (trimmed, lowercased)
/// text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    /// Slice of the normalized text that matched.
    pub body: String,
    pub value: Value,
    pub start: usize,
    pub end: usize,
    /// Name of the rule or sweep that produced this entity.
    pub rule: String,
}

/// How an input was resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseDetails {
    pub total: Duration,
    /// `None` when the input was missing or an unknown-date marker.
    pub language: Option<Language>,
    /// Whether the language came from the detector.
    pub detected: bool,
    pub fuzzy: Fuzzy,
    /// Whether the compound-input sweeps ran.
    pub multi: bool,
    /// Single-expression rules tried, in order.
    pub attempted: Vec<String>,
    pub matched: Option<String>,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResultVerbose {
    pub text: String,
    pub normalized: String,
    pub results: Vec<Entity>,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Parse with the default [`Context`].
///
/// `language` must be `"en"`, `"de"` or `"fr"` when given; without it each
/// item's language is detected. The object scheme requires a language. Both
/// checks fail before anything is parsed.
///
/// # Example
/// ```
/// use histospan::{Scheme, parse};
///
/// let out = parse("before 1856", Some("en"), Scheme::TimeSpan).unwrap().into_vec();
/// let span = out[0].time_span().unwrap();
/// assert_eq!((span.start, span.end), (f64::NEG_INFINITY, 1855.0));
/// ```
pub fn parse<'a>(input: impl Into<Input<'a>>, language: Option<&str>, scheme: Scheme) -> Result<Output, Error> {
    let language = language.map(str::parse::<Language>).transpose()?;
    parse_with(input, &DEFAULT_CONTEXT, &Options { language, scheme })
}

/// Parse with an explicit context and options.
pub fn parse_with<'a>(input: impl Into<Input<'a>>, context: &Context, options: &Options) -> Result<Output, Error> {
    if options.scheme == Scheme::Object && options.language.is_none() {
        return Err(Error::LanguageRequired);
    }

    match input.into() {
        Input::One(text) => {
            let mut values = parse_item(context, options, text)?;
            if values.len() == 1 {
                Ok(Output::One(values.remove(0)))
            } else {
                Ok(Output::Many(values))
            }
        }
        Input::Many(texts) => {
            let mut values = Vec::with_capacity(texts.len());
            for text in texts {
                values.extend(parse_item(context, options, text)?);
            }
            Ok(Output::Many(values))
        }
    }
}

/// Parse one text and report where each date was found and which rules ran.
///
/// Unlike [`parse_with`], the object scheme does not require a language
/// here.
pub fn parse_verbose_with(text: &str, context: &Context, options: &Options) -> Result<ParseResultVerbose, Error> {
    let resolved = engine::resolve_item(context, Some(text), options.language)?;
    let results = match &resolved.resolution {
        Resolution::Dates(found) => found.iter().map(|m| to_entity(&resolved.normalized, options, text, m)).collect(),
        Resolution::Unknown | Resolution::NoMatch => Vec::new(),
    };
    let metrics = resolved.metrics;
    let details = ParseDetails {
        total: metrics.total,
        language: metrics.language,
        detected: metrics.detected,
        fuzzy: metrics.fuzzy,
        multi: metrics.multi,
        attempted: metrics.attempted.iter().map(|name| name.to_string()).collect(),
        matched: metrics.matched.map(str::to_string),
    };
    Ok(ParseResultVerbose {
        text: text.to_string(),
        normalized: resolved.normalized,
        results,
        elapsed: metrics.total,
        details,
    })
}

fn parse_item(context: &Context, options: &Options, text: Option<&str>) -> Result<Vec<Value>, Error> {
    let Resolved { resolution, fuzzy, .. } = engine::resolve_item(context, text, options.language)?;
    Ok(match resolution {
        Resolution::Dates(found) => found.iter().map(|m| Value::render(options.scheme, text, &m.period)).collect(),
        Resolution::NoMatch => vec![Value::render(options.scheme, text, &Period::empty().with_fuzzy(fuzzy))],
        Resolution::Unknown => vec![Value::render(options.scheme, text, &Period::empty())],
    })
}

fn to_entity(normalized: &str, options: &Options, text: &str, m: &Match) -> Entity {
    Entity {
        body: normalized.get(m.range.start..m.range.end).unwrap_or_default().to_string(),
        value: Value::render(options.scheme, Some(text), &m.period),
        start: m.range.start,
        end: m.range.end,
        rule: m.rule.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(text: &str, language: &str) -> Vec<Option<String>> {
        parse(text, Some(language), Scheme::IsoFormat)
            .unwrap()
            .into_vec()
            .into_iter()
            .map(|v| v.iso_format().map(str::to_string))
            .collect()
    }

    #[test]
    fn invalid_language_fails_fast() {
        let err = parse("1460", Some("xx"), Scheme::TimeSpan).unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(code) if code == "xx"));
    }

    #[test]
    fn object_scheme_requires_language() {
        let err = parse("1460", None, Scheme::Object).unwrap_err();
        assert!(matches!(err, Error::LanguageRequired));
        let err = parse(vec![Some("1460"), None], None, Scheme::Object).unwrap_err();
        assert!(matches!(err, Error::LanguageRequired));
    }

    #[test]
    fn scheme_names() {
        assert_eq!("iso-format".parse::<Scheme>().unwrap(), Scheme::IsoFormat);
        assert_eq!(Scheme::TimeSpan.to_string(), "time-span");
        assert!(matches!("iso".parse::<Scheme>(), Err(Error::InvalidScheme(_))));
    }

    #[test]
    fn undetected_language_defaults_to_english() {
        let out = parse("1460", None, Scheme::TimeSpan).unwrap();
        assert_eq!(out, Output::One(Value::TimeSpan(TimeSpan::new(1460.0, 1460.0))));
    }

    #[test]
    fn unknown_inputs_render_empty() {
        let out = parse("undatiert", Some("de"), Scheme::IsoFormat).unwrap();
        assert_eq!(out, Output::One(Value::Iso(None)));

        let out = parse(Option::<&str>::None, Some("de"), Scheme::TimeSpan).unwrap().into_vec();
        assert!(out[0].time_span().unwrap().is_unknown());

        let out = parse(Option::<&str>::None, Some("en"), Scheme::Object).unwrap();
        let parsed = out.into_vec().remove(0);
        let parsed = parsed.parsed().unwrap();
        assert_eq!(parsed.text, None);
        assert_eq!(parsed.iso_format, None);
        assert_eq!(parsed.fuzzy, Fuzzy::Exact);
    }

    #[test]
    fn compound_scalar_returns_many() {
        assert_eq!(
            iso("(Guss vor 1906) 1897", "de"),
            vec![Some("..1905-12-31".to_string()), Some("1897-01-01/1897-12-31".to_string())]
        );
        let out = parse("13. Juli 1882 - 15. Juli 1882", Some("de"), Scheme::IsoFormat).unwrap();
        assert_eq!(
            out,
            Output::Many(vec![
                Value::Iso(Some("1882-07-13/1882-07-13".to_string())),
                Value::Iso(Some("1882-07-15/1882-07-15".to_string())),
            ])
        );
    }

    #[test]
    fn batches_flatten_compound_items() {
        let out = parse(vec!["1897", "(Guss vor 1906) 1897", "undatiert"], Some("de"), Scheme::IsoFormat).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out.into_vec()[3], Value::Iso(None));
    }

    #[test]
    fn object_fields_agree_with_other_schemes() {
        for text in ["ca. 1920", "before 1856", "5th century b.c.", "Autumn 1945", "nothing here"] {
            let object = parse(text, Some("en"), Scheme::Object).unwrap().into_vec().remove(0);
            let parsed = object.parsed().unwrap().clone();
            assert_eq!(parsed.text.as_deref(), Some(text));

            let iso = parse(text, Some("en"), Scheme::IsoFormat).unwrap().into_vec().remove(0);
            assert_eq!(iso.iso_format(), parsed.iso_format.as_deref());

            let span = parse(text, Some("en"), Scheme::TimeSpan).unwrap().into_vec().remove(0);
            let span = span.time_span().unwrap();
            if parsed.time_span.is_unknown() {
                assert!(span.is_unknown());
            } else {
                assert_eq!(span, parsed.time_span);
            }
        }
    }

    #[test]
    fn object_carries_fuzzy_code() {
        let out = parse("ca. 2. Jh. v. Chr", Some("de"), Scheme::Object).unwrap().into_vec();
        let parsed = out[0].parsed().unwrap();
        assert_eq!(parsed.iso_format.as_deref(), Some("-0200-12-31~/-0101-01-01~"));
        assert_eq!(parsed.fuzzy.code(), -1);
        assert_eq!(parsed.time_span, TimeSpan::new(-200.0, -101.0));

        let json = serde_json::to_value(parsed).unwrap();
        assert_eq!(json["fuzzy"], -1);
        assert_eq!(json["text"], "ca. 2. Jh. v. Chr");
    }

    #[test]
    fn verbose_reports_rule_and_offsets() {
        let context = Context::default();
        let options = Options::new(Scheme::IsoFormat).with_language(Language::De);
        let res = parse_verbose_with("(Guss vor 1906) 1897", &context, &options).unwrap();

        assert_eq!(res.normalized, "(guss vor 1906) 1897");
        assert_eq!(res.results.len(), 2);
        assert_eq!(res.results[0].body, "vor 1906");
        assert_eq!(res.results[0].rule, "before <year>");
        assert_eq!(res.results[1].body, "1897");
        assert_eq!((res.results[1].start, res.results[1].end), (16, 20));
        assert!(res.details.multi);
        assert!(!res.details.detected);
        assert_eq!(res.details.matched.as_deref(), Some("before <year>"));
        assert_eq!(res.elapsed, res.details.total);
    }

    #[test]
    fn verbose_lists_attempted_rules() {
        let context = Context::default();
        let res = parse_verbose_with("19. Jh.", &context, &Options::default()).unwrap();
        assert_eq!(res.details.language, Some(Language::De));
        assert!(res.details.detected);
        assert_eq!(res.details.matched.as_deref(), Some("century"));
        assert_eq!(res.details.attempted.last().map(String::as_str), Some("century"));
        assert_eq!(res.results[0].value, Value::TimeSpan(TimeSpan::new(1801.0, 1900.0)));
    }

    #[test]
    fn custom_vocabulary_source() {
        let context = Context::with_vocabulary(|language: Language| -> Option<crate::Vocabulary> {
            (language == Language::En).then(|| crate::Vocabulary::builtin(Language::En))
        });
        let options = Options::new(Scheme::IsoFormat).with_language(Language::Fr);
        let out = parse_with("June 1963", &context, &options).unwrap();
        assert_eq!(out, Output::One(Value::Iso(Some("1963-06-01/1963-06-30".to_string()))));
        let out = parse_with("juin 1963", &context, &options).unwrap();
        assert_eq!(out, Output::One(Value::Iso(None)));
    }
}
