//! Regex construction from a language's token lists.
//!
//! Token lists arrive lowercased and sorted longest first, so every
//! alternation prefers the longest spelling ("sept" before "sep"). Spaces
//! inside tokens match any run of whitespace.

use regex::Regex;

/// Alternation fragments for one language. `None` means the language has no
/// tokens for that role and the grammars depending on it are skipped.
#[derive(Debug, Clone, Default)]
pub(crate) struct Fragments {
    pub month: String,
    pub season: String,
    pub before: String,
    pub after: String,
    pub connector: Option<String>,
    pub ordinal: Option<String>,
    pub century: Option<String>,
    pub fraction: Option<String>,
    pub modifier: Option<String>,
    pub bc: Option<String>,
    pub decade_suffix: Option<String>,
    pub decade_year_suffix: Option<String>,
    pub decade_prefix: Option<String>,
}

/// `(?:a|b|c)` with each token escaped. Returns `None` for an empty list.
pub(crate) fn alternation(tokens: &[String]) -> Option<String> {
    alternation_with(tokens, r"\s+")
}

/// Like [`alternation`] but lets spaces inside tokens disappear entirely, so
/// "v. chr." also matches "v.chr.".
pub(crate) fn loose_alternation(tokens: &[String]) -> Option<String> {
    alternation_with(tokens, r"\s*")
}

fn alternation_with(tokens: &[String], space: &str) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    let alts: Vec<String> = tokens
        .iter()
        .map(|t| t.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(space))
        .collect();
    Some(format!("(?:{})", alts.join("|")))
}

/// Compiled grammars for one language.
#[derive(Debug)]
pub(crate) struct Patterns {
    pub month_year: Regex,
    pub season_year: Regex,
    pub month_day_year: Regex,
    /// A month token anywhere in the text.
    pub month: Regex,
    /// A season token anywhere in the text.
    pub season: Regex,
    pub day_month_year: Regex,
    pub before_season: Regex,
    pub after_season: Regex,
    pub before_month: Regex,
    pub after_month: Regex,
    pub before_year: Regex,
    pub after_year: Regex,
    /// A 3-4 digit year, optionally preceded by a before/after keyword.
    pub keyword_year: Regex,
    pub decades: Vec<Regex>,
    pub century: Option<CenturyPatterns>,
}

#[derive(Debug)]
pub(crate) struct CenturyPatterns {
    /// `[part] frac [connector] ordinal century [bc]`
    pub fraction: Option<Regex>,
    /// `early|mid|late [connector] ordinal century [bc]`
    pub modifier: Option<Regex>,
    /// `ordinal century [bc]`
    pub plain: Regex,
}

impl Patterns {
    pub(crate) fn compile(f: &Fragments) -> Result<Self, regex::Error> {
        let month = &f.month;
        let season = &f.season;
        let before = &f.before;
        let after = &f.after;
        let connector = f.connector.as_ref().map(|c| format!(r"(?:{c}\s+)?")).unwrap_or_default();

        let keyword_season =
            |kw: &str| Regex::new(&format!(r"\b{kw}\s+{connector}\b(?P<season>{season})\s+(?P<year>-?\d{{3,4}})\b"));
        let keyword_month =
            |kw: &str| Regex::new(&format!(r"\b{kw}\s+{connector}\b(?P<month>{month})\b\.?\s+(?P<year>-?\d{{3,4}})\b"));
        let keyword_year = |kw: &str| Regex::new(&format!(r"\b{kw}\s+(?P<year>-?\d{{3,4}})\b"));

        Ok(Self {
            month_year: Regex::new(&format!(r"^(?P<month>{month})\.?\s+(?P<year>\d{{3,4}})$"))?,
            season_year: Regex::new(&format!(r"^(?P<season>{season})\s+(?P<year>\d{{3,4}})$"))?,
            month_day_year: Regex::new(&format!(
                r"^(?P<month>{month})\.?\s+(?P<day>\d{{1,2}}),\s*(?P<year>\d{{3,4}})$"
            ))?,
            month: Regex::new(&format!(r"\b(?P<month>{month})\b"))?,
            season: Regex::new(&format!(r"\b(?P<season>{season})\b"))?,
            day_month_year: Regex::new(&format!(
                r"\b(?P<day>\d{{1,2}})(?:\.|st|nd|rd|th|er|re|ère)?\s*\b(?P<month>{month})\b\.?\s+(?P<year>\d{{3,4}})\b"
            ))?,
            before_season: keyword_season(before)?,
            after_season: keyword_season(after)?,
            before_month: keyword_month(before)?,
            after_month: keyword_month(after)?,
            before_year: keyword_year(before)?,
            after_year: keyword_year(after)?,
            keyword_year: Regex::new(&format!(r"(?:\b(?P<keyword>{before}|{after})\s+)?(?P<year>-?\d{{3,4}})"))?,
            decades: decade_patterns(f)?,
            century: century_patterns(f)?,
        })
    }
}

fn decade_patterns(f: &Fragments) -> Result<Vec<Regex>, regex::Error> {
    let lead = match (&f.modifier, &f.connector) {
        (Some(modifier), Some(connector)) => {
            format!(r"(?:(?P<portion>{modifier})(?:\s+{connector})?[\s\-]+)?")
        }
        (Some(modifier), None) => format!(r"(?:(?P<portion>{modifier})[\s\-]+)?"),
        (None, _) => String::new(),
    };

    // Leading words are skipped lazily so an early/mid/late token still
    // lands in the `portion` group.
    let skip = r"(?:.*?[\s(])??";

    let mut patterns = Vec::new();
    if let Some(suffix) = &f.decade_year_suffix {
        patterns.push(Regex::new(&format!(r"^{skip}{lead}(?P<decade>\d{{4}}){suffix}$"))?);
    }
    if let Some(suffix) = &f.decade_suffix {
        patterns.push(Regex::new(&format!(r"^{skip}{lead}(?P<decade>\d{{3}}0){suffix}$"))?);
    }
    if let Some(prefix) = &f.decade_prefix {
        patterns.push(Regex::new(&format!(r"^{skip}{lead}{prefix}\s+(?P<decade>\d{{3}}0)$"))?);
    }
    Ok(patterns)
}

fn century_patterns(f: &Fragments) -> Result<Option<CenturyPatterns>, regex::Error> {
    let (Some(ordinal), Some(century)) = (&f.ordinal, &f.century) else {
        return Ok(None);
    };
    let connector = f.connector.as_ref().map(|c| format!(r"(?:\s+{c})?")).unwrap_or_default();
    let bc = f.bc.as_ref().map(|bc| format!(r"(?:\s*(?P<bc>{bc}))?")).unwrap_or_default();
    let tail = format!(r"(?P<century>\b{ordinal})\s*\.?\s*(?P<unit>{century})\b\.?{bc}");

    let fraction = f
        .fraction
        .as_ref()
        .map(|frac| Regex::new(&format!(r"(?:(?P<part>\b{ordinal})\s*)?\b(?P<frac>{frac})\b{connector}\s+{tail}")))
        .transpose()?;
    let modifier = f
        .modifier
        .as_ref()
        .map(|m| Regex::new(&format!(r"\b(?P<portion>{m})\b{connector}[\s\-]*{tail}")))
        .transpose()?;

    Ok(Some(CenturyPatterns { fraction, modifier, plain: Regex::new(&tail)? }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn alternation_escapes_and_widens_spaces() {
        let alt = alternation(&tokens(&["prior to", "ca."])).unwrap();
        assert_eq!(alt, r"(?:prior\s+to|ca\.)");
        assert!(alternation(&[]).is_none());
    }

    #[test]
    fn loose_alternation_allows_glued_tokens() {
        let re = Regex::new(&loose_alternation(&tokens(&["v. chr."])).unwrap()).unwrap();
        assert!(re.is_match("v.chr."));
        assert!(re.is_match("v.  chr."));
    }
}
