//! Year intervals ("1752/60") and open intervals ("before 1856", "after June
//! 1860", "vor dem Sommer 1907").

use chrono::Month;

use crate::calendar::{HistoricalDate, Season};
use crate::period::{Express, Period};
use crate::rules::years::last_year;
use crate::{Rule, Subject};

/// "1752/60", "1752/1760"
pub fn rule_year_interval() -> Rule {
    Rule { name: "year interval", production: year_interval }
}

fn year_interval(subject: &Subject<'_>) -> Option<Period> {
    let caps = regex!(r"^(\d{3,4})/(\d{1,4})$").captures(subject.core)?;
    let first: i32 = caps.get(1)?.as_str().parse().ok()?;
    let last = interval_end(caps.get(1)?.as_str(), caps.get(2)?.as_str())?;
    Some(
        Period::closed(HistoricalDate::first_of(first, Month::January), HistoricalDate::last_of(last, Month::December))
            .with_fuzzy(subject.fuzzy),
    )
}

/// Second year of `head/tail`. A shorter tail replaces the trailing digits of
/// the head and rolls into the next century (or decade) when that lands
/// before the head ("1799/00" is 1800). A full-length tail is taken as is,
/// even when it precedes the head.
fn interval_end(head: &str, tail: &str) -> Option<i32> {
    if tail.len() >= head.len() {
        return tail.parse().ok();
    }
    let first: i32 = head.parse().ok()?;
    let last: i32 = format!("{}{tail}", &head[..head.len() - tail.len()]).parse().ok()?;
    if last < first {
        let width = u32::try_from(tail.len()).ok()?;
        return Some(last + 10i32.pow(width));
    }
    Some(last)
}

/// "before 1856", "nach Juni 1860", "avant l'hiver 1907"
pub fn rule_before_after() -> Rule {
    Rule { name: "before/after", production: before_after }
}

/// Granularity is the finest unit named: season, then month, then year. The
/// year is always the last one in the text.
fn before_after(subject: &Subject<'_>) -> Option<Period> {
    let express = subject.spec.leading_keyword(subject.core)?;
    let year = last_year(subject.core)?;
    let patterns = subject.spec.patterns();

    let season = patterns
        .season
        .captures(subject.core)
        .and_then(|caps| subject.spec.season(caps.name("season")?.as_str()));
    let period = if let Some(season) = season {
        open_season(express, year, season)
    } else if let Some(month) = patterns
        .month
        .captures_iter(subject.core)
        .filter_map(|caps| subject.spec.month(caps.name("month")?.as_str()))
        .last()
    {
        open_month(express, year, month)
    } else {
        open_year(express, year)
    }?;
    Some(period.with_fuzzy(subject.fuzzy))
}

pub(crate) fn open_year(express: Express, year: i32) -> Option<Period> {
    match express {
        Express::Before => Some(Period::before(HistoricalDate::last_of(year - 1, Month::December))),
        Express::After => Some(Period::after(HistoricalDate::first_of(year + 1, Month::January))),
        Express::None => None,
    }
}

/// Before January ends in the previous year; after December starts in the
/// next one.
pub(crate) fn open_month(express: Express, year: i32, month: Month) -> Option<Period> {
    match express {
        Express::Before if month == Month::January => {
            Some(Period::before(HistoricalDate::last_of(year - 1, Month::December)))
        }
        Express::Before => Some(Period::before(HistoricalDate::last_of(year, month.pred()))),
        Express::After if month == Month::December => {
            Some(Period::after(HistoricalDate::first_of(year + 1, Month::January)))
        }
        Express::After => Some(Period::after(HistoricalDate::first_of(year, month.succ()))),
        Express::None => None,
    }
}

/// Before a season ends the month before it starts; after a season starts
/// the month after it ends. Winter of `year` is taken as the one starting in
/// December of `year - 1` on the before side and ending in February of
/// `year + 1` on the after side.
pub(crate) fn open_season(express: Express, year: i32, season: Season) -> Option<Period> {
    match express {
        Express::Before => {
            let start_year = if season == Season::Winter { year - 1 } else { year };
            open_month(express, start_year, season.first_month())
        }
        Express::After => {
            let end_year = if season == Season::Winter { year + 1 } else { year };
            open_month(express, end_year, season.last_month())
        }
        Express::None => None,
    }
}
