//! Compound inputs: "(Guss vor 1906) 1897", "13. Juli 1882 - 15. Juli 1882".
//!
//! The extractor runs a fixed sequence of sweeps over the whole text. Each
//! sweep emits its matches left to right and records the consumed ranges;
//! later sweeps skip anything overlapping an earlier match. Output order is
//! sweep order, not text order.

use regex::{Captures, Regex};

use crate::calendar::{HistoricalDate, period_for_day, period_for_year};
use crate::language::LanguageSpec;
use crate::period::{Express, Period};
use crate::rules::intervals::{open_month, open_season, open_year};
use crate::rules::years::year_at;
use crate::{Match, Range, Subject};

type Sweep = fn(&LanguageSpec, &Captures<'_>) -> Option<Period>;

/// All dates found in `subject.text`, or `None` when no sweep finds any.
pub(crate) fn extract(subject: &Subject<'_>) -> Option<Vec<Match>> {
    let spec = subject.spec;
    let patterns = spec.patterns();
    let sweeps: [(&'static str, &Regex, Sweep); 7] = [
        ("day month year", &patterns.day_month_year, day_month_year),
        ("before <season>", &patterns.before_season, before_season),
        ("after <season>", &patterns.after_season, after_season),
        ("before <month>", &patterns.before_month, before_month),
        ("after <month>", &patterns.after_month, after_month),
        ("before <year>", &patterns.before_year, before_year),
        ("after <year>", &patterns.after_year, after_year),
    ];

    let text = subject.text;
    let mut found: Vec<Match> = Vec::new();
    for (rule, re, sweep) in sweeps {
        for caps in re.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let range = Range { start: whole.start(), end: whole.end() };
            if overlaps(&found, range) {
                continue;
            }
            if let Some(period) = sweep(spec, &caps) {
                found.push(Match { period: period.with_fuzzy(subject.fuzzy), range, rule });
            }
        }
    }

    // Bare years last. A year right after a before/after keyword belongs to
    // a keyword sweep even when that sweep declined it.
    for caps in patterns.keyword_year.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let range = Range { start: whole.start(), end: whole.end() };
        if caps.name("keyword").is_some() || overlaps(&found, range) {
            continue;
        }
        let Some((year, range)) = caps.name("year").and_then(|m| year_at(text, m)) else { continue };
        found.push(Match { period: period_for_year(year).with_fuzzy(subject.fuzzy), range, rule: "year" });
    }

    if found.is_empty() { None } else { Some(found) }
}

fn overlaps(found: &[Match], range: Range) -> bool {
    found.iter().any(|m| range.start < m.range.end && m.range.start < range.end)
}

fn day_month_year(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    let month = spec.month(caps.name("month")?.as_str())?;
    let day: u32 = caps.name("day")?.as_str().parse().ok()?;
    let year: i32 = caps.name("year")?.as_str().parse().ok()?;
    Some(period_for_day(HistoricalDate::new(year, month.number_from_month(), day)?))
}

fn season(spec: &LanguageSpec, caps: &Captures<'_>, express: Express) -> Option<Period> {
    let season = spec.season(caps.name("season")?.as_str())?;
    open_season(express, caps.name("year")?.as_str().parse().ok()?, season)
}

fn month(spec: &LanguageSpec, caps: &Captures<'_>, express: Express) -> Option<Period> {
    let month = spec.month(caps.name("month")?.as_str())?;
    open_month(express, caps.name("year")?.as_str().parse().ok()?, month)
}

fn year(caps: &Captures<'_>, express: Express) -> Option<Period> {
    open_year(express, caps.name("year")?.as_str().parse().ok()?)
}

fn before_season(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    season(spec, caps, Express::Before)
}

fn after_season(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    season(spec, caps, Express::After)
}

fn before_month(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    month(spec, caps, Express::Before)
}

fn after_month(spec: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    month(spec, caps, Express::After)
}

fn before_year(_: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    year(caps, Express::Before)
}

fn after_year(_: &LanguageSpec, caps: &Captures<'_>) -> Option<Period> {
    year(caps, Express::After)
}
